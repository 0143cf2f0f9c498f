//! x-axis: moneyness samples in percentage points.

use tracing::debug;

use super::BarrierGrid;
use crate::types::ProductVariant;

/// Moneyness (performance, in percent) sample points for the payoff chart.
///
/// Returns an empty vector for [`ProductVariant::Unrecognized`].
///
/// # Examples
/// ```
/// use payoff_core::sampling::generate_moneyness_samples;
/// use payoff_core::types::ProductVariant;
///
/// let xs = generate_moneyness_samples(ProductVariant::Earn, -0.1, 0.1);
/// assert_eq!(xs[0], -30.0);
/// assert_eq!(xs[2000], -10.0);
/// assert_eq!(*xs.last().unwrap(), 30.0);
/// ```
pub fn generate_moneyness_samples(variant: ProductVariant, lower: f64, upper: f64) -> Vec<f64> {
    let profile = variant.profile();
    if profile.interior.is_none() {
        return Vec::new();
    }

    let grid = BarrierGrid::new(lower, upper);
    let (left, right) = (profile.left_points, profile.right_points);
    let mut samples = Vec::with_capacity(left + grid.interior_len() + right + 2);

    // Ramp ending one hundredth below the lower barrier
    samples.extend((0..left).map(|i| grid.lower_pct - (left - i) as f64 / 100.0));
    samples.push(grid.lower_pct);
    samples.extend(grid.steps().map(|k| k as f64 / 100.0));
    samples.push(grid.upper_pct);
    // Ramp starting one hundredth above the upper barrier
    samples.extend((0..right).map(|i| grid.upper_pct + (i + 1) as f64 / 100.0));

    debug!(
        %variant,
        left,
        interior = grid.interior_len(),
        right,
        "sampled moneyness range"
    );
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_symmetric_band_layout() {
        let xs = generate_moneyness_samples(ProductVariant::Earn, -0.1, 0.1);
        assert_eq!(xs.len(), 2000 + 1 + 2001 + 1 + 2000);

        // Left padding
        assert_relative_eq!(xs[0], -30.0, epsilon = 1e-9);
        assert_relative_eq!(xs[1999], -10.01, epsilon = 1e-9);
        // Lower edge then interior start at the barrier
        assert_eq!(xs[2000], -10.0);
        assert_eq!(xs[2001], -10.0);
        // Interior midpoint
        assert_eq!(xs[2001 + 1000], 0.0);
        // Interior end and upper edge
        assert_eq!(xs[2001 + 2000], 10.0);
        assert_eq!(xs[2001 + 2001], 10.0);
        // Right padding
        assert_relative_eq!(xs[2001 + 2002], 10.01, epsilon = 1e-9);
        assert_relative_eq!(xs[xs.len() - 1], 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_decreasing() {
        for variant in ProductVariant::KNOWN {
            let xs = generate_moneyness_samples(variant, -0.07, 0.23);
            assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_same_grid_for_both_known_variants() {
        let a = generate_moneyness_samples(ProductVariant::Earn, -0.05, 0.15);
        let b = generate_moneyness_samples(ProductVariant::EarnStEth, -0.05, 0.15);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unrecognized_is_empty() {
        assert!(generate_moneyness_samples(ProductVariant::Unrecognized, -0.1, 0.1).is_empty());
    }

    #[test]
    fn test_barriers_rounded_to_whole_percent() {
        let xs = generate_moneyness_samples(ProductVariant::Earn, -0.104, 0.096);
        assert_eq!(xs[2000], -10.0);
        assert_eq!(xs[xs.len() - 2001], 10.0);
    }
}
