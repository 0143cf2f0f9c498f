//! Moneyness command implementation

use std::io::Write;

use payoff_core::{
    classify_performance, effective_performance, option_moneyness, BarrierConfig, ProductVariant,
};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the moneyness command
pub fn run<W: Write>(
    config: &CliConfig,
    variant: Option<&str>,
    performance: f64,
    hover: Option<f64>,
    lower: Option<f64>,
    upper: Option<f64>,
    out: &mut W,
) -> Result<()> {
    let variant = ProductVariant::from(variant.unwrap_or(config.default_variant.as_str()));
    let barriers = BarrierConfig::new(
        lower.unwrap_or(config.curve.lower_barrier),
        upper.unwrap_or(config.curve.upper_barrier),
    )?;
    let (lo, hi) = (
        barriers.lower_barrier_percentage,
        barriers.upper_barrier_percentage,
    );

    let shown = effective_performance(hover, performance);
    info!("Computing moneyness for {} at {}", variant, shown);

    let state = classify_performance(shown, lo, hi);
    let moneyness = option_moneyness(hover, lo, hi, performance, variant);

    writeln!(out, "variant:     {}", variant)?;
    writeln!(out, "performance: {}", shown)?;
    writeln!(out, "state:       {:?}", state)?;
    writeln!(out, "moneyness:   {}", moneyness)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(variant: &str, performance: f64, hover: Option<f64>) -> String {
        let mut buf = Vec::new();
        run(
            &CliConfig::default(),
            Some(variant),
            performance,
            hover,
            None,
            None,
            &mut buf,
        )
        .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_within_band() {
        let out = run_to_string("rEARN", 0.05, None);
        assert!(out.contains("state:       Within"));
        assert!(out.contains("moneyness:   1.05"));
    }

    #[test]
    fn test_hover_above_band() {
        let out = run_to_string("rEARN", 0.05, Some(0.2));
        assert!(out.contains("state:       Above"));
        assert!(out.contains("moneyness:   0\n"));
    }

    #[test]
    fn test_zero_hover_shows_realized() {
        let out = run_to_string("rEARN", 0.5, Some(0.0));
        assert!(out.contains("performance: 0.5\n"));
        assert!(out.contains("state:       Above"));
        assert!(out.contains("moneyness:   0\n"));
    }

    #[test]
    fn test_unrecognized_variant_zero() {
        let out = run_to_string("T-ETH-C", 0.0, None);
        assert!(out.contains("variant:     unrecognized"));
        assert!(out.contains("moneyness:   0\n"));
    }
}
