multiversx_sc::imports!();

use crate::types::SettlementSummary;

/// Audit trail of the market. Every value movement and every
/// configuration change is published here.
#[multiversx_sc::module]
pub trait EventsModule {
    /// `prompt_id` is empty for plain agent bets.
    #[event("betPlaced")]
    fn bet_placed_event(
        &self,
        #[indexed] bettor: &ManagedAddress,
        #[indexed] is_side_a: bool,
        #[indexed] game_id: u64,
        #[indexed] prompt_id: Option<u64>,
        amount: &BigUint,
    );

    #[event("winningsDistributed")]
    fn winnings_distributed_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] game_id: u64,
        amount: &BigUint,
    );

    #[event("gameEnded")]
    fn game_ended_event(
        &self,
        #[indexed] game_id: u64,
        #[indexed] winner_is_side_a: bool,
        summary: &SettlementSummary<Self::Api>,
    );

    #[event("roundReset")]
    fn round_reset_event(&self, #[indexed] new_game_id: u64);

    #[event("feesUpdated")]
    fn fees_updated_event(
        &self,
        #[indexed] participation_fee_bps: u64,
        #[indexed] winner_fee_bps: u64,
        #[indexed] dev_fee_bps: u64,
    );

    #[event("basePromptBetAmountUpdated")]
    fn base_prompt_bet_amount_updated_event(&self, amount: &BigUint);

    #[event("maxSideBettorsUpdated")]
    fn max_side_bettors_updated_event(&self, #[indexed] limit: u64);

    #[event("adminAdded")]
    fn admin_added_event(&self, #[indexed] admin: &ManagedAddress);

    #[event("adminRemoved")]
    fn admin_removed_event(&self, #[indexed] admin: &ManagedAddress);
}
