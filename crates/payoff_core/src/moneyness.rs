//! Performance classification and moneyness against the barriers.
//!
//! Generic over `T: Float` so that the same code serves `f32` chart
//! buffers and `f64` analytics.

use num_traits::Float;

use crate::types::ProductVariant;

/// Where a performance value sits relative to the barrier band.
///
/// # Examples
/// ```
/// use payoff_core::moneyness::{classify_performance, PerformanceState};
///
/// assert_eq!(classify_performance(0.05_f64, -0.1, 0.1), PerformanceState::Within);
/// assert_eq!(classify_performance(0.2_f64, -0.1, 0.1), PerformanceState::Above);
/// assert_eq!(classify_performance(-0.2_f64, -0.1, 0.1), PerformanceState::Below);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PerformanceState {
    /// Strictly below the lower barrier
    Below,
    /// Between the barriers, both inclusive
    Within,
    /// Strictly above the upper barrier
    Above,
}

impl PerformanceState {
    /// Returns whether the payoff is flat at base yield in this state.
    #[inline]
    pub fn is_outside(&self) -> bool {
        !matches!(self, PerformanceState::Within)
    }
}

/// Classify a performance value against the barriers.
///
/// Barriers themselves count as `Within`. A NaN performance compares false
/// against both barriers and therefore also lands in `Within`.
#[inline]
pub fn classify_performance<T: Float>(performance: T, lower: T, upper: T) -> PerformanceState {
    if performance < lower {
        PerformanceState::Below
    } else if performance > upper {
        PerformanceState::Above
    } else {
        PerformanceState::Within
    }
}

/// Returns whether performance is strictly below the lower barrier.
#[inline]
pub fn is_below_barriers<T: Float>(performance: T, lower: T) -> bool {
    performance < lower
}

/// Returns whether performance is strictly above the upper barrier.
#[inline]
pub fn is_above_barriers<T: Float>(performance: T, upper: T) -> bool {
    performance > upper
}

/// Returns whether performance falls outside the barrier band.
#[inline]
pub fn is_outside_barriers<T: Float>(performance: T, lower: T, upper: T) -> bool {
    classify_performance(performance, lower, upper).is_outside()
}

/// Moneyness of a realized performance value.
///
/// Zero outside the barriers. Inside:
/// - `Earn`: `performance + 1`
/// - `EarnStEth`: `(performance + 1) / (1 + lower)`
/// - `Unrecognized`: always zero
///
/// # Examples
/// ```
/// use payoff_core::moneyness::compute_moneyness;
/// use payoff_core::types::ProductVariant;
///
/// let m = compute_moneyness(0.05_f64, -0.1, 0.1, ProductVariant::Earn);
/// assert!((m - 1.05).abs() < 1e-12);
///
/// let m = compute_moneyness(0.05_f64, -0.1, 0.1, ProductVariant::EarnStEth);
/// assert!((m - 1.05 / 0.9).abs() < 1e-12);
///
/// assert_eq!(compute_moneyness(0.5_f64, -0.1, 0.1, ProductVariant::Earn), 0.0);
/// ```
pub fn compute_moneyness<T: Float>(performance: T, lower: T, upper: T, variant: ProductVariant) -> T {
    let one = T::one();
    if is_outside_barriers(performance, lower, upper) {
        return T::zero();
    }
    match variant {
        ProductVariant::Earn => (performance + one) / one,
        ProductVariant::EarnStEth => (performance + one) / (one + lower),
        ProductVariant::Unrecognized => T::zero(),
    }
}

/// Moneyness shown on the chart: the hovered performance when the pointer
/// is over the plot, otherwise the realized performance.
///
/// A hover of zero or NaN counts as no hover.
///
/// # Examples
/// ```
/// use payoff_core::moneyness::option_moneyness;
/// use payoff_core::types::ProductVariant;
///
/// let realized = option_moneyness(None, -0.1_f64, 0.1, 0.02, ProductVariant::Earn);
/// assert!((realized - 1.02).abs() < 1e-12);
///
/// let hovered = option_moneyness(Some(0.3_f64), -0.1, 0.1, 0.02, ProductVariant::Earn);
/// assert_eq!(hovered, 0.0);
/// ```
#[inline]
pub fn option_moneyness<T: Float>(
    hover: Option<T>,
    lower: T,
    upper: T,
    performance: T,
    variant: ProductVariant,
) -> T {
    compute_moneyness(effective_performance(hover, performance), lower, upper, variant)
}

/// Performance the chart reports: a non-zero, non-NaN hover, else `performance`.
#[inline]
pub fn effective_performance<T: Float>(hover: Option<T>, performance: T) -> T {
    hover
        .filter(|h| !h.is_zero() && !h.is_nan())
        .unwrap_or(performance)
}
