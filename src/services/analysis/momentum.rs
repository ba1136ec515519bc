//! Short-window price momentum.

/// Rate of change over the last three prices, scaled by 1/10 and clamped
/// to [-1, 1]. Fewer than three prices yields zero momentum.
pub fn calculate(prices: &[f64]) -> f64 {
    if prices.len() < 3 {
        return 0.0;
    }

    let recent = &prices[prices.len() - 3..];
    if recent[0] == 0.0 {
        return 0.0;
    }
    let momentum = ((recent[2] - recent[0]) / recent[0]) * 100.0;

    (momentum / 10.0).clamp(-1.0, 1.0)
}
