use fuzz_betting::pricing::{quote_required_amount, side_a_ratio_bps};
use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;

const BASE: u64 = 2_000;

fn big(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

fn quote(own: u64, opposite: u64) -> BigUint<StaticApi> {
    quote_required_amount(&big(BASE), &big(own), &big(opposite))
}

#[test]
fn empty_pool_quotes_base() {
    assert_eq!(quote(0, 0), big(BASE));
}

#[test]
fn balanced_pool_quotes_base() {
    assert_eq!(quote(2_000, 2_000), big(BASE));
    assert_eq!(quote(7_777, 7_777), big(BASE));
}

#[test]
fn empty_side_against_funded_side_quotes_floor() {
    assert_eq!(quote(0, 2_000), big(500));
}

#[test]
fn quote_scales_with_opposite_over_own() {
    // 2000 * 3000 / 1000
    assert_eq!(quote(1_000, 3_000), big(6_000));
    // 2000 * 1000 / 1500, truncated
    assert_eq!(quote(1_500, 1_000), big(1_333));
}

#[test]
fn quote_is_floored_at_quarter_of_base() {
    assert_eq!(quote(2_000, 0), big(500));
    assert_eq!(quote(100_000, 1), big(500));
    // exactly at the floor
    assert_eq!(quote(4_000, 1_000), big(500));
}

#[test]
fn quote_never_below_floor() {
    let samples = [0u64, 1, 3, 499, 500, 2_000, 10_000, 1_000_000];
    for own in samples {
        for opposite in samples {
            assert!(quote(own, opposite) >= big(BASE / 4), "own={own} opposite={opposite}");
        }
    }
}

#[test]
fn floor_truncates_for_small_base() {
    let q = quote_required_amount(&big(7), &big(0), &big(10));
    assert_eq!(q, big(1));
}

#[test]
fn ratio_of_empty_pool_is_even() {
    assert_eq!(side_a_ratio_bps(&big(0), &big(0)), 5_000);
}

#[test]
fn ratio_in_basis_points() {
    assert_eq!(side_a_ratio_bps(&big(2_000), &big(2_000)), 5_000);
    assert_eq!(side_a_ratio_bps(&big(2_000), &big(0)), 10_000);
    assert_eq!(side_a_ratio_bps(&big(0), &big(500)), 0);
    // 1000 * 10000 / 3000, truncated
    assert_eq!(side_a_ratio_bps(&big(1_000), &big(2_000)), 3_333);
}
