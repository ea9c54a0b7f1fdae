use fuzz_betting::settlement::{pro_rata_share, FeeBreakdown};
use fuzz_betting::types::FeeConfig;
use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;

fn big(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

fn default_fees() -> FeeConfig {
    FeeConfig::new(100, 400, 450)
}

#[test]
fn default_fees_on_even_pool() {
    let breakdown = FeeBreakdown::compute(&big(2_000), &big(2_000), &default_fees());

    assert_eq!(breakdown.total_pool, big(4_000));
    assert_eq!(breakdown.participation_fee, big(40));
    assert_eq!(breakdown.participation_fee_per_agent, big(20));
    assert_eq!(breakdown.winner_fee, big(160));
    assert_eq!(breakdown.dev_fee, big(180));
    assert_eq!(breakdown.remaining, big(3_620));
}

#[test]
fn odd_participation_fee_leaves_one_unit() {
    // pool 4500: participation 45, per agent 22
    let breakdown = FeeBreakdown::compute(&big(2_500), &big(2_000), &default_fees());

    assert_eq!(breakdown.participation_fee, big(45));
    assert_eq!(breakdown.participation_fee_per_agent, big(22));
    assert_eq!(breakdown.winner_fee, big(180));
    assert_eq!(breakdown.dev_fee, big(202));
    assert_eq!(breakdown.remaining, big(4_073));
    assert_eq!(breakdown.fees_paid(), big(426));
}

#[test]
fn zero_fees_leave_whole_pool() {
    let breakdown = FeeBreakdown::compute(&big(10), &big(5), &FeeConfig::new(0, 0, 0));
    assert_eq!(breakdown.remaining, big(15));
    assert_eq!(breakdown.fees_paid(), big(0));
}

#[test]
fn full_fees_leave_nothing() {
    let breakdown = FeeBreakdown::compute(&big(10_000), &big(0), &FeeConfig::new(2_000, 3_000, 5_000));
    assert_eq!(breakdown.remaining, big(0));
    assert_eq!(breakdown.fees_paid(), big(10_000));
}

#[test]
fn outflow_never_exceeds_pool() {
    let configs = [
        FeeConfig::new(100, 400, 450),
        FeeConfig::new(0, 0, 0),
        FeeConfig::new(3_333, 3_333, 3_334),
        FeeConfig::new(1, 1, 1),
        FeeConfig::new(9_999, 0, 1),
    ];
    let pools = [(0u64, 0u64), (1, 0), (1, 1), (999, 1), (123_457, 98_765)];

    for fees in configs {
        for (a, b) in pools {
            let breakdown = FeeBreakdown::compute(&big(a), &big(b), &fees);
            let outflow = breakdown.fees_paid() + &breakdown.remaining;
            assert!(outflow <= breakdown.total_pool);
            // only the odd participation unit can be left behind
            assert!(&breakdown.total_pool - &outflow <= big(1));
        }
    }
}

#[test]
fn fee_config_cap() {
    assert!(FeeConfig::new(100, 400, 450).is_within(10_000));
    assert!(FeeConfig::new(5_000, 5_000, 0).is_within(10_000));
    assert!(!FeeConfig::new(5_000, 5_001, 4_000).is_within(10_000));
    assert!(!FeeConfig::new(u64::MAX, 1, 0).is_within(10_000));
    assert_eq!(FeeConfig::new(u64::MAX, u64::MAX, 2).total_bps(), None);
}

#[test]
fn pro_rata_shares_truncate() {
    let remaining = big(4_073);
    let total = big(2_500);

    assert_eq!(pro_rata_share(&remaining, &big(2_000), &total), big(3_258));
    assert_eq!(pro_rata_share(&remaining, &big(500), &total), big(814));
}

#[test]
fn pro_rata_without_winners_is_zero() {
    assert_eq!(pro_rata_share(&big(100), &big(0), &big(0)), big(0));
}

#[test]
fn sole_winner_takes_whole_remaining() {
    assert_eq!(pro_rata_share(&big(3_620), &big(2_000), &big(2_000)), big(3_620));
}
