//! Check command implementation
//!
//! Prints the resolved configuration and the product variant table.

use std::io::Write;
use std::path::Path;

use payoff_core::types::variant::VARIANT_PROFILES;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(config: &CliConfig, config_file: &Path, out: &mut W) -> Result<()> {
    info!("Checking configuration...");

    let source = if config_file.exists() {
        config_file.display().to_string()
    } else {
        "(defaults)".to_string()
    };
    writeln!(out, "config file:        {}", source)?;
    writeln!(out, "log level:          {}", config.log_level)?;
    writeln!(out, "default variant:    {}", config.default_variant)?;
    writeln!(
        out,
        "barriers:           [{}, {}]",
        config.curve.lower_barrier, config.curve.upper_barrier
    )?;
    writeln!(
        out,
        "yields:             base {}, max {}, participation {}",
        config.curve.base_yield, config.curve.max_yield, config.curve.participation_rate
    )?;

    writeln!(out, "variants:")?;
    for profile in VARIANT_PROFILES.iter() {
        let interior = profile.interior.map_or("none", |shape| shape.name());
        writeln!(
            out,
            "  {:<12} padding {}/{}  interior {}",
            profile.tag, profile.left_points, profile.right_points, interior
        )?;
    }

    info!("Configuration OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_known_variants() {
        let mut buf = Vec::new();
        run(&CliConfig::default(), Path::new("does-not-exist.toml"), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("(defaults)"));
        assert!(out.contains("rEARN-stETH"));
        assert!(out.contains("padding 2000/2000"));
        assert!(out.contains("interior linear\n"));
        assert!(out.contains("interior staked-asset\n"));
        assert!(!out.contains("Some("));
    }
}
