//! Composite end-to-end efficiency scoring.

use crossdock_types::TrendSummary;

/// Combine the order, fulfillment, and delivery trends for one product
/// into a single end-to-end efficiency score on a nominal 0-100 scale.
///
/// Component scores: orders contribute 100 when any volume exists,
/// fulfillment and delivery contribute more the lower their times are.
/// Each component is then adjusted by 50x its slope (favorable trends up,
/// unfavorable down), and the final score is the weighted sum
/// `0.30 * order + 0.35 * fulfillment + 0.35 * delivery`.
///
/// The result is intentionally unclamped and can leave [0, 100] when
/// slopes are extreme.
pub fn end_to_end_score(
    order: &TrendSummary,
    fulfillment: &TrendSummary,
    delivery: &TrendSummary,
) -> f64 {
    let mut order_score = if order.current_value > 0.0 { 100.0 } else { 0.0 };
    let mut fulfillment_score = 100.0 - fulfillment.current_value.min(100.0);
    let mut delivery_score = 100.0 - (delivery.current_value / 2.0).min(100.0);

    // Rising orders are good; rising fulfillment/delivery times are not.
    order_score += order.slope * 50.0;
    fulfillment_score -= fulfillment.slope * 50.0;
    delivery_score -= delivery.slope * 50.0;

    order_score * 0.30 + fulfillment_score * 0.35 + delivery_score * 0.35
}
