multiversx_sc::imports!();

use crate::errors::{ERR_BASE_AMOUNT_TOO_LOW, ERR_FEES_TOO_HIGH, ERR_ZERO_BETTOR_LIMIT};
use crate::types::FeeConfig;
use crate::{BPS_DENOMINATOR, MIN_QUOTE_DIVISOR};

#[multiversx_sc::module]
pub trait ConfigModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: setBasePromptBetAmount
    // ========================================================

    #[only_owner]
    #[endpoint(setBasePromptBetAmount)]
    fn set_base_prompt_bet_amount(&self, amount: BigUint) {
        self.require_valid_base_amount(&amount);
        self.base_prompt_bet_amount().set(&amount);
        self.base_prompt_bet_amount_updated_event(&amount);
    }

    /// Below `MIN_QUOTE_DIVISOR` the quote floor truncates to zero.
    fn require_valid_base_amount(&self, amount: &BigUint) {
        require!(*amount >= MIN_QUOTE_DIVISOR, ERR_BASE_AMOUNT_TOO_LOW);
    }

    // ========================================================
    // ENDPOINT: setMaxSideBettors
    // Bounds the settlement loop of a single round.
    // ========================================================

    #[only_owner]
    #[endpoint(setMaxSideBettors)]
    fn set_max_side_bettors(&self, limit: u64) {
        require!(limit > 0, ERR_ZERO_BETTOR_LIMIT);
        self.max_side_bettors().set(limit);
        self.max_side_bettors_updated_event(limit);
    }

    // ========================================================
    // ENDPOINT: updateFees
    // All three rates are replaced together or not at all.
    // ========================================================

    #[only_owner]
    #[endpoint(updateFees)]
    fn update_fees(&self, participation_fee_bps: u64, winner_fee_bps: u64, dev_fee_bps: u64) {
        let fees = FeeConfig::new(participation_fee_bps, winner_fee_bps, dev_fee_bps);
        require!(fees.is_within(BPS_DENOMINATOR), ERR_FEES_TOO_HIGH);

        self.fee_config().set(fees);
        self.fees_updated_event(participation_fee_bps, winner_fee_bps, dev_fee_bps);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getFeeConfig)]
    fn get_fee_config(&self) -> MultiValue3<u64, u64, u64> {
        let fees = self.fee_config().get();
        (
            fees.participation_fee_bps,
            fees.winner_fee_bps,
            fees.dev_fee_bps,
        )
            .into()
    }

    #[view(participationFeePercentage)]
    fn participation_fee_percentage(&self) -> u64 {
        self.fee_config().get().participation_fee_bps
    }

    #[view(winnerFeePercentage)]
    fn winner_fee_percentage(&self) -> u64 {
        self.fee_config().get().winner_fee_bps
    }

    #[view(devFeePercentage)]
    fn dev_fee_percentage(&self) -> u64 {
        self.fee_config().get().dev_fee_bps
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(betToken)]
    #[storage_mapper("betToken")]
    fn bet_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(agentA)]
    #[storage_mapper("agentA")]
    fn agent_a(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(agentB)]
    #[storage_mapper("agentB")]
    fn agent_b(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(basePromptBetAmount)]
    #[storage_mapper("basePromptBetAmount")]
    fn base_prompt_bet_amount(&self) -> SingleValueMapper<BigUint>;

    /// Distinct backers allowed per side and round
    #[view(maxSideBettors)]
    #[storage_mapper("maxSideBettors")]
    fn max_side_bettors(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("feeConfig")]
    fn fee_config(&self) -> SingleValueMapper<FeeConfig>;
}
