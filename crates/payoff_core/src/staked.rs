//! Yield models for the staked-asset earn variant.
//!
//! The staked-asset curve delegates its interior to a [`StakedYieldModel`].
//! Callers with their own expected-yield formula can pass a closure; the
//! default is [`ParticipationYieldModel`].

/// Expected yield of the staked-asset product at a given performance.
///
/// All arguments and the result are decimal fractions.
///
/// Implemented for any `Fn(base_yield, performance, lower_barrier, participation_rate) -> f64`.
///
/// # Examples
/// ```
/// use payoff_core::staked::StakedYieldModel;
///
/// let flat = |base: f64, _perf: f64, _lower: f64, _rate: f64| base;
/// assert_eq!(flat.expected_yield(0.04, 0.2, -0.1, 1.0), 0.04);
/// ```
pub trait StakedYieldModel {
    /// Expected yield for `performance` given the product parameters.
    fn expected_yield(
        &self,
        base_yield: f64,
        performance: f64,
        lower_barrier: f64,
        participation_rate: f64,
    ) -> f64;
}

impl<F> StakedYieldModel for F
where
    F: Fn(f64, f64, f64, f64) -> f64,
{
    #[inline]
    fn expected_yield(
        &self,
        base_yield: f64,
        performance: f64,
        lower_barrier: f64,
        participation_rate: f64,
    ) -> f64 {
        self(base_yield, performance, lower_barrier, participation_rate)
    }
}

/// Base yield plus a participation share of the gain above the lower barrier:
///
/// `base + participation * max(performance - lower, 0)`
///
/// # Examples
/// ```
/// use payoff_core::staked::{ParticipationYieldModel, StakedYieldModel};
///
/// let model = ParticipationYieldModel;
/// let y = model.expected_yield(0.04, 0.1, -0.1, 0.5);
/// assert!((y - 0.14).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParticipationYieldModel;

impl StakedYieldModel for ParticipationYieldModel {
    #[inline]
    fn expected_yield(
        &self,
        base_yield: f64,
        performance: f64,
        lower_barrier: f64,
        participation_rate: f64,
    ) -> f64 {
        base_yield + participation_rate * (performance - lower_barrier).max(0.0)
    }
}
