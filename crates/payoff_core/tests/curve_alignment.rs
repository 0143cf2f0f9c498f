//! Integration tests for payoff curve alignment.
//!
//! The chart zips moneyness and yield samples index by index, so both
//! generators must agree on region sizes for every input.

use approx::assert_relative_eq;
use payoff_core::sampling::{
    generate_moneyness_samples, generate_yield_samples, sample_payoff_curve, BarrierGrid,
};
use payoff_core::types::{BarrierConfig, ProductVariant, YieldConfig};
use proptest::prelude::*;

const PADDING: usize = 2000;

#[test]
fn test_symmetric_band_example() {
    let xs = generate_moneyness_samples(ProductVariant::Earn, -0.1, 0.1);
    let interior = &xs[PADDING + 1..xs.len() - PADDING - 1];

    assert_eq!(interior.len(), 2001);
    assert_eq!(interior[0], -10.0);
    assert_eq!(interior[2000], 10.0);
    assert!(interior.windows(2).all(|w| (w[1] - w[0] - 0.01).abs() < 1e-9));
}

#[test]
fn test_edges_pin_curve_to_base_yield() {
    for variant in ProductVariant::KNOWN {
        let ys = generate_yield_samples(variant, -0.15, 0.2, 0.2, 0.03, 0.7);
        let base = 0.03 * 100.0;
        assert_eq!(ys[PADDING], base);
        assert_eq!(ys[ys.len() - PADDING - 1], base);
    }
}

#[test]
fn test_tag_driven_sampling() {
    let barriers = BarrierConfig::new(-0.08, 0.12).unwrap();
    let yields = YieldConfig::new(0.05, 0.15, 0.9).unwrap();

    for tag in ["rEARN", "rEARN-stETH"] {
        let curve = sample_payoff_curve(ProductVariant::from(tag), &barriers, &yields);
        assert_eq!(curve.moneyness.len(), curve.yields.len());
        assert!(!curve.is_empty());
    }

    let blank = sample_payoff_curve(ProductVariant::from("rEARN-usdc"), &barriers, &yields);
    assert!(blank.moneyness.is_empty());
    assert!(blank.yields.is_empty());
}

#[test]
fn test_off_grid_barriers_stay_aligned() {
    // Barrier width rounds differently from the individual barriers
    let (lower, upper) = (-0.1049, 0.1049);
    let grid = BarrierGrid::new(lower, upper);
    assert_eq!(grid.interior_len(), 2001);

    let xs = generate_moneyness_samples(ProductVariant::EarnStEth, lower, upper);
    let ys = generate_yield_samples(ProductVariant::EarnStEth, lower, upper, 0.0, 0.04, 1.0);
    assert_eq!(xs.len(), ys.len());
    assert_relative_eq!(ys[PADDING + 1], 4.0, epsilon = 1e-9);
}

#[test]
fn test_huge_finite_barriers_sample_padding_only() {
    let barriers = BarrierConfig::new(-1e17, 1e17).unwrap();
    let yields = YieldConfig::new(0.04, 0.12, 1.0).unwrap();

    for variant in ProductVariant::KNOWN {
        let curve = sample_payoff_curve(variant, &barriers, &yields);
        assert_eq!(curve.moneyness.len(), 2 * PADDING + 2);
        assert_eq!(curve.yields.len(), 2 * PADDING + 2);
        assert!(curve.yields.iter().all(|&y| y == 0.04 * 100.0));
    }
}

fn variant_strategy() -> impl Strategy<Value = ProductVariant> {
    prop_oneof![Just(ProductVariant::Earn), Just(ProductVariant::EarnStEth)]
}

fn band_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-0.5..0.3_f64, 0.0001..0.4_f64).prop_map(|(lo, width)| (lo, lo + width))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_lengths_match(
        variant in variant_strategy(),
        (lower, upper) in band_strategy(),
        base in 0.0..0.2_f64,
        max in 0.0..0.5_f64,
        rate in 0.0..2.0_f64,
    ) {
        let xs = generate_moneyness_samples(variant, lower, upper);
        let ys = generate_yield_samples(variant, lower, upper, max, base, rate);
        prop_assert_eq!(xs.len(), ys.len());
        prop_assert_eq!(
            xs.len(),
            2 * PADDING + 2 + BarrierGrid::new(lower, upper).interior_len()
        );
    }

    #[test]
    fn test_padding_flat_at_base(
        variant in variant_strategy(),
        (lower, upper) in band_strategy(),
        base in 0.0..0.2_f64,
    ) {
        let ys = generate_yield_samples(variant, lower, upper, 0.3, base, 1.0);
        let base_pct = base * 100.0;
        prop_assert!(ys[..PADDING + 1].iter().all(|&y| y == base_pct));
        prop_assert!(ys[ys.len() - PADDING - 1..].iter().all(|&y| y == base_pct));
    }

    #[test]
    fn test_unrecognized_always_blank(
        (lower, upper) in band_strategy(),
        base in 0.0..0.2_f64,
    ) {
        prop_assert!(generate_moneyness_samples(ProductVariant::Unrecognized, lower, upper).is_empty());
        prop_assert!(
            generate_yield_samples(ProductVariant::Unrecognized, lower, upper, 0.3, base, 1.0)
                .is_empty()
        );
    }
}
