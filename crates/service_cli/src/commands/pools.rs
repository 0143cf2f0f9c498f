//! Pools command implementation
//!
//! Prints the lend pool registry.

use std::io::Write;

use pool_registry::{
    allowed_deposit_assets, gas_limits, is_deposit_disabled_pool, max_deposit, pool_details,
    Asset, GasLimits, PoolFees, PoolOption, POOL_FEES,
};
use serde::Serialize;

use crate::{CliError, Result};

#[derive(Serialize)]
struct PoolRow {
    id: &'static str,
    name: &'static str,
    website: &'static str,
    deposit_disabled: bool,
    gas: GasLimits,
    deposit_assets: Vec<Asset>,
    max_deposit: String,
    fees: PoolFees,
}

fn rows() -> Vec<PoolRow> {
    PoolOption::ALL
        .iter()
        .map(|&pool| {
            let details = pool_details(pool);
            PoolRow {
                id: pool.id(),
                name: details.name,
                website: details.website,
                deposit_disabled: is_deposit_disabled_pool(pool),
                gas: gas_limits(pool),
                deposit_assets: allowed_deposit_assets(pool).to_vec(),
                // u128 exceeds JSON number precision
                max_deposit: max_deposit(pool).to_string(),
                fees: POOL_FEES,
            }
        })
        .collect()
}

/// Run the pools command
pub fn run<W: Write>(format: &str, out: &mut W) -> Result<()> {
    let rows = rows();
    match format {
        "json" => {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
        "table" => {
            writeln!(out, "┌────────────┬──────────┬───────────┬────────────┬────────┐")?;
            writeln!(out, "│ Pool       │ Deposits │ Gas (dep) │ Gas (wdr)  │ Assets │")?;
            writeln!(out, "├────────────┼──────────┼───────────┼────────────┼────────┤")?;
            for row in &rows {
                let assets = row
                    .deposit_assets
                    .iter()
                    .map(Asset::symbol)
                    .collect::<Vec<_>>()
                    .join(",");
                writeln!(
                    out,
                    "│ {:<10} │ {:<8} │ {:>9} │ {:>10} │ {:<6} │",
                    row.name,
                    if row.deposit_disabled { "closed" } else { "open" },
                    row.gas.deposit,
                    row.gas.withdraw,
                    assets
                )?;
            }
            writeln!(out, "└────────────┴──────────┴───────────┴────────────┴────────┘")?;
            writeln!(
                out,
                "Fees: {}% management, {}% performance",
                POOL_FEES.management_fee, POOL_FEES.performance_fee
            )?;
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }
    Ok(())
}
