// Contract-object smoke test. Endpoint behaviour is covered by
// `fuzz_betting_blackbox_test.rs`; pure arithmetic by the pricing and fee tests.

use multiversx_sc_scenario::api::DebugApi;

type BettingContract = fuzz_betting::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> BettingContract = fuzz_betting::contract_obj;
}
