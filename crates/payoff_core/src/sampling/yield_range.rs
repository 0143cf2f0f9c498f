//! y-axis: yield samples in percent.

use tracing::{debug, warn};

use super::BarrierGrid;
use crate::staked::{ParticipationYieldModel, StakedYieldModel};
use crate::types::{InteriorShape, ProductVariant};

/// Yield (percent) sample points aligned with
/// [`generate_moneyness_samples`](super::generate_moneyness_samples),
/// using [`ParticipationYieldModel`] for the staked-asset variant.
///
/// Returns an empty vector for [`ProductVariant::Unrecognized`].
///
/// # Examples
/// ```
/// use payoff_core::sampling::generate_yield_samples;
/// use payoff_core::types::ProductVariant;
///
/// let ys = generate_yield_samples(ProductVariant::Earn, -0.1, 0.1, 0.12, 0.04, 1.0);
/// assert_eq!(ys[0], 4.0);
/// assert!((ys[2001 + 2000] - 12.0).abs() < 1e-9);
/// ```
pub fn generate_yield_samples(
    variant: ProductVariant,
    lower: f64,
    upper: f64,
    max_yield: f64,
    base_yield: f64,
    participation_rate: f64,
) -> Vec<f64> {
    generate_yield_samples_with(
        variant,
        lower,
        upper,
        max_yield,
        base_yield,
        participation_rate,
        &ParticipationYieldModel,
    )
}

/// Yield sample points with an explicit staked-asset yield model.
///
/// The model is only consulted for [`ProductVariant::EarnStEth`].
pub fn generate_yield_samples_with<M: StakedYieldModel + ?Sized>(
    variant: ProductVariant,
    lower: f64,
    upper: f64,
    max_yield: f64,
    base_yield: f64,
    participation_rate: f64,
    model: &M,
) -> Vec<f64> {
    let profile = variant.profile();
    let Some(shape) = profile.interior else {
        return Vec::new();
    };

    let grid = BarrierGrid::new(lower, upper);
    let (left, right) = (profile.left_points, profile.right_points);
    let base_pct = base_yield * 100.0;
    let mut samples = Vec::with_capacity(left + grid.interior_len() + right + 2);

    samples.extend(std::iter::repeat(base_pct).take(left));
    samples.push(base_pct);
    match shape {
        InteriorShape::Linear => {
            let upper_pct = upper * 100.0;
            let spread_pct = (max_yield - base_yield) * 100.0;
            if upper_pct == 0.0 {
                warn!(%variant, "upper barrier at zero, interior held at base yield");
                samples.extend(std::iter::repeat(base_pct).take(grid.interior_len()));
            } else {
                samples.extend(
                    grid.steps()
                        .map(|k| base_pct + (k as f64 / 100.0 / upper_pct).abs() * spread_pct),
                );
            }
        }
        InteriorShape::StakedAsset => {
            let width = upper - lower;
            let span = *grid.offsets().end();
            if span == 0 {
                warn!(%variant, "zero-width barrier band, single interior sample at lower barrier");
            }
            samples.extend(grid.offsets().map(|j| {
                let fraction = if span == 0 { 0.0 } else { j as f64 / span as f64 };
                let performance = fraction * width + lower;
                model.expected_yield(base_yield, performance, lower, participation_rate) * 100.0
            }));
        }
    }
    samples.push(base_pct);
    samples.extend(std::iter::repeat(base_pct).take(right));

    debug!(
        %variant,
        left,
        interior = grid.interior_len(),
        right,
        "sampled yield range"
    );
    samples
}
