//! Payoff chart sample generators.
//!
//! A payoff chart is drawn from two aligned sequences built over the same
//! five regions, in order:
//!
//! | Region | x (moneyness, %) | y (yield, %) |
//! |--------|------------------|--------------|
//! | left padding | ramp up to the lower barrier | `base * 100` |
//! | lower edge | lower barrier | `base * 100` |
//! | interior | hundredth-of-a-percent grid | variant curve |
//! | upper edge | upper barrier | `base * 100` |
//! | right padding | ramp up from the upper barrier | `base * 100` |
//!
//! The edge samples pin the curve to the base-yield line at the barriers.
//! Both generators derive region sizes from [`BarrierGrid`], so the
//! sequences stay index-aligned for every input.
//!
//! # Examples
//!
//! ```
//! use payoff_core::sampling::sample_payoff_curve;
//! use payoff_core::types::{BarrierConfig, ProductVariant, YieldConfig};
//!
//! let barriers = BarrierConfig::new(-0.1, 0.1).unwrap();
//! let yields = YieldConfig::new(0.04, 0.12, 1.0).unwrap();
//! let curve = sample_payoff_curve(ProductVariant::Earn, &barriers, &yields);
//!
//! // 2000 + 1 + 2001 + 1 + 2000
//! assert_eq!(curve.len(), 6003);
//! ```

mod curve;
mod moneyness_range;
mod yield_range;

pub use curve::{sample_payoff_curve, sample_payoff_curve_with, PayoffCurve, SamplePoint};
pub use moneyness_range::generate_moneyness_samples;
pub use yield_range::{generate_yield_samples, generate_yield_samples_with};

use std::ops::RangeInclusive;

use tracing::warn;

/// Samples per percentage point on the interior grid.
pub const STEPS_PER_PERCENT: i64 = 100;

/// Round to the nearest integer with ties towards positive infinity.
///
/// Matches the chart grid of the web app (`-10.5` rounds to `-10`).
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Integer sampling grid between the barriers, rounded to whole percents.
#[derive(Clone, Debug, PartialEq)]
pub struct BarrierGrid {
    /// Lower barrier rounded to whole percentage points
    pub lower_pct: f64,
    /// Upper barrier rounded to whole percentage points
    pub upper_pct: f64,
    lo_step: i64,
    hi_step: i64,
}

impl BarrierGrid {
    /// Build the grid for a barrier pair given as fractions.
    ///
    /// Non-finite barriers, and barriers whose step index or span does not
    /// fit in `i64`, produce an empty interior.
    pub fn new(lower: f64, upper: f64) -> Self {
        let lower_pct = round_half_up(lower * 100.0);
        let upper_pct = round_half_up(upper * 100.0);
        let steps = match (to_step(lower_pct), to_step(upper_pct)) {
            (Some(lo), Some(hi)) if span_len(lo, hi).is_some() => Some((lo, hi)),
            _ => None,
        };
        let (lo_step, hi_step) = steps.unwrap_or_else(|| {
            if lower_pct.is_finite() && upper_pct.is_finite() {
                warn!(lower, upper, "barrier grid exceeds step range, interior left empty");
            }
            (1, 0)
        });
        Self {
            lower_pct,
            upper_pct,
            lo_step,
            hi_step,
        }
    }

    /// Interior step indices, both barriers inclusive.
    #[inline]
    pub fn steps(&self) -> RangeInclusive<i64> {
        self.lo_step..=self.hi_step
    }

    /// Offset of each interior step from the lower barrier (`0..=span`).
    #[inline]
    pub fn offsets(&self) -> RangeInclusive<i64> {
        0..=self.hi_step.saturating_sub(self.lo_step)
    }

    /// Number of interior samples.
    #[inline]
    pub fn interior_len(&self) -> usize {
        span_len(self.lo_step, self.hi_step)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0)
    }
}

/// Step index of a whole-percent barrier, if it is representable.
fn to_step(pct: f64) -> Option<i64> {
    let scaled = pct * STEPS_PER_PERCENT as f64;
    (scaled.is_finite() && scaled > i64::MIN as f64 && scaled < i64::MAX as f64)
        .then(|| scaled as i64)
}

/// Inclusive sample count between two step indices, `None` on overflow.
fn span_len(lo: i64, hi: i64) -> Option<i64> {
    hi.checked_sub(lo)?.checked_add(1)
}
