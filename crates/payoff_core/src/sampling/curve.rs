//! Aligned payoff curve built from both sample generators.

use super::{generate_moneyness_samples, generate_yield_samples_with};
use crate::staked::{ParticipationYieldModel, StakedYieldModel};
use crate::types::{BarrierConfig, ProductVariant, YieldConfig};

/// One plotted point: moneyness (x) and yield (y), both in percent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplePoint {
    /// Performance in percentage points
    pub moneyness: f64,
    /// Yield in percent
    pub yield_percent: f64,
}

/// Moneyness and yield sequences for one product, index-aligned.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffCurve {
    /// Product variant the curve was sampled for
    pub variant: ProductVariant,
    /// x-axis samples
    pub moneyness: Vec<f64>,
    /// y-axis samples
    pub yields: Vec<f64>,
}

impl PayoffCurve {
    /// Number of plotted points.
    #[inline]
    pub fn len(&self) -> usize {
        self.moneyness.len().min(self.yields.len())
    }

    /// Returns whether the chart is blank.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the curve as plot points.
    pub fn points(&self) -> impl Iterator<Item = SamplePoint> + '_ {
        self.moneyness
            .iter()
            .zip(&self.yields)
            .map(|(&moneyness, &yield_percent)| SamplePoint {
                moneyness,
                yield_percent,
            })
    }

    /// Highest yield on the curve, `None` for a blank chart.
    pub fn peak_yield(&self) -> Option<f64> {
        self.yields.iter().copied().reduce(f64::max)
    }
}

/// Sample a payoff curve using [`ParticipationYieldModel`] for staked products.
pub fn sample_payoff_curve(
    variant: ProductVariant,
    barriers: &BarrierConfig,
    yields: &YieldConfig,
) -> PayoffCurve {
    sample_payoff_curve_with(variant, barriers, yields, &ParticipationYieldModel)
}

/// Sample a payoff curve with an explicit staked-asset yield model.
pub fn sample_payoff_curve_with<M: StakedYieldModel + ?Sized>(
    variant: ProductVariant,
    barriers: &BarrierConfig,
    yields: &YieldConfig,
    model: &M,
) -> PayoffCurve {
    let lower = barriers.lower_barrier_percentage;
    let upper = barriers.upper_barrier_percentage;
    PayoffCurve {
        variant,
        moneyness: generate_moneyness_samples(variant, lower, upper),
        yields: generate_yield_samples_with(
            variant,
            lower,
            upper,
            yields.max_yield,
            yields.base_yield,
            yields.participation_rate,
            model,
        ),
    }
}
