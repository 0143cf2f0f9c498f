//! Curve command implementation
//!
//! Samples a payoff curve with payoff_core and writes it as JSON, CSV or a table.

use std::io::Write;

use clap::Args;
use payoff_core::{sample_payoff_curve, BarrierConfig, PayoffCurve, ProductVariant, YieldConfig};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Curve parameters; omitted flags fall back to configuration
#[derive(Debug, Clone, Default, Args)]
pub struct CurveParams {
    /// Product tag (rEARN, rEARN-stETH)
    #[arg(long)]
    pub variant: Option<String>,

    /// Lower barrier as a fraction
    #[arg(long, allow_hyphen_values = true)]
    pub lower: Option<f64>,

    /// Upper barrier as a fraction
    #[arg(long, allow_hyphen_values = true)]
    pub upper: Option<f64>,

    /// Base yield as a fraction
    #[arg(long)]
    pub base_yield: Option<f64>,

    /// Max yield as a fraction
    #[arg(long)]
    pub max_yield: Option<f64>,

    /// Participation rate for staked-asset products
    #[arg(long)]
    pub participation_rate: Option<f64>,
}

impl CurveParams {
    /// Merge with configuration (flags take precedence) and validate
    pub fn resolve(&self, config: &CliConfig) -> Result<(ProductVariant, BarrierConfig, YieldConfig)> {
        let tag = self.variant.as_deref().unwrap_or(config.default_variant.as_str());
        let variant = ProductVariant::from(tag);
        if !variant.is_known() {
            warn!("Unrecognized product variant {}, chart will be blank", tag);
        }

        let defaults = &config.curve;
        let barriers = BarrierConfig::new(
            self.lower.unwrap_or(defaults.lower_barrier),
            self.upper.unwrap_or(defaults.upper_barrier),
        )?;
        let yields = YieldConfig::new(
            self.base_yield.unwrap_or(defaults.base_yield),
            self.max_yield.unwrap_or(defaults.max_yield),
            self.participation_rate.unwrap_or(defaults.participation_rate),
        )?;
        Ok((variant, barriers, yields))
    }
}

#[derive(Serialize)]
struct CurveReport<'a> {
    variant: ProductVariant,
    barriers: &'a BarrierConfig,
    yields: &'a YieldConfig,
    points: Vec<payoff_core::SamplePoint>,
}

/// Run the curve command
pub fn run<W: Write>(
    config: &CliConfig,
    params: &CurveParams,
    step: usize,
    format: &str,
    out: &mut W,
) -> Result<()> {
    if step == 0 {
        return Err(CliError::InvalidArgument("--step must be at least 1".to_string()));
    }
    let (variant, barriers, yields) = params.resolve(config)?;

    info!("Sampling payoff curve...");
    info!("  Variant: {}", variant);
    info!(
        "  Barriers: [{}, {}]",
        barriers.lower_barrier_percentage, barriers.upper_barrier_percentage
    );
    info!(
        "  Yields: base {}, max {}, participation {}",
        yields.base_yield, yields.max_yield, yields.participation_rate
    );

    let curve = sample_payoff_curve(variant, &barriers, &yields);
    info!("  Points: {}", curve.len());

    match format {
        "json" => {
            let report = CurveReport {
                variant,
                barriers: &barriers,
                yields: &yields,
                points: curve.points().step_by(step).collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for point in curve.points().step_by(step) {
                writer.serialize(point)?;
            }
            writer.flush()?;
        }
        "table" => write_table(&curve, step, out)?,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            )));
        }
    }

    Ok(())
}

fn write_table<W: Write>(curve: &PayoffCurve, step: usize, out: &mut W) -> Result<()> {
    writeln!(out, "┌──────────────┬──────────────┐")?;
    writeln!(out, "│ Moneyness %  │ Yield %      │")?;
    writeln!(out, "├──────────────┼──────────────┤")?;
    if curve.is_empty() {
        writeln!(out, "│ (no data)    │              │")?;
    }
    for point in curve.points().step_by(step) {
        writeln!(out, "│ {:>12.2} │ {:>12.4} │", point.moneyness, point.yield_percent)?;
    }
    writeln!(out, "└──────────────┴──────────────┘")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(params: &CurveParams, step: usize, format: &str) -> Result<String> {
        let mut buf = Vec::new();
        run(&CliConfig::default(), params, step, format, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_resolve_uses_config_defaults() {
        let (variant, barriers, yields) = CurveParams::default().resolve(&CliConfig::default()).unwrap();
        assert_eq!(variant, ProductVariant::Earn);
        assert_eq!(barriers.lower_barrier_percentage, -0.1);
        assert_eq!(yields.max_yield, 0.12);
    }

    #[test]
    fn test_resolve_flags_override() {
        let params = CurveParams {
            variant: Some("rEARN-stETH".to_string()),
            upper: Some(0.2),
            participation_rate: Some(0.5),
            ..Default::default()
        };
        let (variant, barriers, yields) = params.resolve(&CliConfig::default()).unwrap();
        assert_eq!(variant, ProductVariant::EarnStEth);
        assert_eq!(barriers.upper_barrier_percentage, 0.2);
        assert_eq!(yields.participation_rate, 0.5);
    }

    #[test]
    fn test_resolve_rejects_inverted_barriers() {
        let params = CurveParams {
            lower: Some(0.3),
            ..Default::default()
        };
        assert!(matches!(
            params.resolve(&CliConfig::default()),
            Err(CliError::Sampler(_))
        ));
    }

    #[test]
    fn test_csv_output() {
        let csv = run_to_string(&CurveParams::default(), 1000, "csv").unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("moneyness,yield_percent"));
        // 6003 points, every 1000th
        assert_eq!(lines.count(), 7);
    }

    #[test]
    fn test_json_output() {
        let json = run_to_string(&CurveParams::default(), 1, "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["variant"], "rEARN");
        assert_eq!(value["points"].as_array().unwrap().len(), 6003);
    }

    #[test]
    fn test_table_for_unknown_variant_is_blank() {
        let params = CurveParams {
            variant: Some("rEARN-usdc".to_string()),
            ..Default::default()
        };
        let table = run_to_string(&params, 1, "table").unwrap();
        assert!(table.contains("(no data)"));
    }

    #[test]
    fn test_rejects_bad_format_and_step() {
        assert!(matches!(
            run_to_string(&CurveParams::default(), 1, "xml"),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            run_to_string(&CurveParams::default(), 0, "json"),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
