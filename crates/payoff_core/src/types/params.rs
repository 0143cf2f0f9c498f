//! Barrier and yield parameters for an earn product.
//!
//! All percentages are decimal fractions (`0.1` is 10%).

use super::error::SamplerError;

/// Performance thresholds outside which the payoff flattens to base yield.
///
/// # Examples
/// ```
/// use payoff_core::types::BarrierConfig;
///
/// let barriers = BarrierConfig::new(-0.1, 0.1).unwrap();
/// assert!((barriers.width() - 0.2).abs() < 1e-12);
///
/// assert!(BarrierConfig::new(0.1, -0.1).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierConfig {
    /// Lower barrier as a performance fraction
    pub lower_barrier_percentage: f64,
    /// Upper barrier as a performance fraction
    pub upper_barrier_percentage: f64,
}

impl BarrierConfig {
    /// Create validated barriers.
    ///
    /// # Errors
    /// - [`SamplerError::NonFiniteInput`] if either barrier is NaN or infinite
    /// - [`SamplerError::InvalidBarrier`] unless `lower < upper`
    pub fn new(lower: f64, upper: f64) -> Result<Self, SamplerError> {
        check_finite("lower_barrier_percentage", lower)?;
        check_finite("upper_barrier_percentage", upper)?;
        if lower >= upper {
            return Err(SamplerError::InvalidBarrier { lower, upper });
        }
        Ok(Self {
            lower_barrier_percentage: lower,
            upper_barrier_percentage: upper,
        })
    }

    /// Distance between the barriers.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper_barrier_percentage - self.lower_barrier_percentage
    }
}

/// Yield parameters: base rate outside the barriers, target rate inside.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YieldConfig {
    /// Yield owed regardless of performance
    pub base_yield: f64,
    /// Yield reached at the upper barrier (vanilla variant)
    pub max_yield: f64,
    /// Share of underlying performance passed through (staked-asset variant)
    pub participation_rate: f64,
}

impl YieldConfig {
    /// Create validated yield parameters.
    ///
    /// # Errors
    /// [`SamplerError::NonFiniteInput`] if any value is NaN or infinite.
    pub fn new(base_yield: f64, max_yield: f64, participation_rate: f64) -> Result<Self, SamplerError> {
        check_finite("base_yield", base_yield)?;
        check_finite("max_yield", max_yield)?;
        check_finite("participation_rate", participation_rate)?;
        Ok(Self {
            base_yield,
            max_yield,
            participation_rate,
        })
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), SamplerError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SamplerError::NonFiniteInput { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_barrier_new_valid() {
        let b = BarrierConfig::new(-0.05, 0.15).unwrap();
        assert_eq!(b.lower_barrier_percentage, -0.05);
        assert_eq!(b.upper_barrier_percentage, 0.15);
        assert_relative_eq!(b.width(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_barrier_rejects_unordered() {
        assert_eq!(
            BarrierConfig::new(0.1, 0.1),
            Err(SamplerError::InvalidBarrier {
                lower: 0.1,
                upper: 0.1
            })
        );
        assert!(BarrierConfig::new(0.2, 0.1).is_err());
    }

    #[test]
    fn test_barrier_rejects_non_finite() {
        let err = BarrierConfig::new(f64::NEG_INFINITY, 0.1).unwrap_err();
        assert!(matches!(
            err,
            SamplerError::NonFiniteInput {
                name: "lower_barrier_percentage",
                ..
            }
        ));
        assert!(BarrierConfig::new(-0.1, f64::NAN).is_err());
    }

    #[test]
    fn test_yield_config() {
        let y = YieldConfig::new(0.04, 0.12, 1.0).unwrap();
        assert_eq!(y.base_yield, 0.04);
        assert!(YieldConfig::new(f64::NAN, 0.12, 1.0).is_err());
        assert!(YieldConfig::new(0.04, 0.12, f64::INFINITY).is_err());
    }
}
