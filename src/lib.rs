#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod config;
pub mod errors;
pub mod events;
pub mod fuzz_betting_proxy;
pub mod ledger;
pub mod pricing;
pub mod settlement;
pub mod types;

use errors::{
    ERR_BELOW_QUOTE, ERR_INVALID_AGENTS, ERR_INVALID_TOKEN, ERR_PROMPT_AMOUNT,
    ERR_ROUND_NOT_ENDED, ERR_ROUND_NOT_OPEN, ERR_SIDE_FULL, ERR_WRONG_TOKEN, ERR_ZERO_AMOUNT,
};
use types::{FeeConfig, Round, RoundStatus, Side};

// ============================================================
// Constants
// ============================================================

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// 1% of the pool, split between both agents
pub const DEFAULT_PARTICIPATION_FEE_BPS: u64 = 100;

/// 4% of the pool to the winning agent
pub const DEFAULT_WINNER_FEE_BPS: u64 = 400;

/// 4.5% of the pool to the treasury
pub const DEFAULT_DEV_FEE_BPS: u64 = 450;

/// Quotes never drop below base / 4
pub const MIN_QUOTE_DIVISOR: u64 = 4;

/// Distinct backers per side and round until the owner changes it
pub const DEFAULT_MAX_SIDE_BETTORS: u64 = 200;

/// Market ratio reported while the pool is empty
pub const EVEN_ODDS_RATIO_BPS: u64 = 5_000;

const FIRST_GAME_ID: u64 = 1;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FuzzBetting:
    ledger::LedgerModule
    + pricing::PricingModule
    + settlement::SettlementModule
    + config::ConfigModule
    + access::AccessModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        bet_token: TokenIdentifier,
        agent_a: ManagedAddress,
        agent_b: ManagedAddress,
        base_prompt_bet_amount: BigUint,
    ) {
        require!(bet_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(
            !agent_a.is_zero() && !agent_b.is_zero() && agent_a != agent_b,
            ERR_INVALID_AGENTS
        );
        self.require_valid_base_amount(&base_prompt_bet_amount);

        self.bet_token().set(&bet_token);
        self.agent_a().set(&agent_a);
        self.agent_b().set(&agent_b);
        self.base_prompt_bet_amount().set(&base_prompt_bet_amount);
        self.fee_config().set(FeeConfig::new(
            DEFAULT_PARTICIPATION_FEE_BPS,
            DEFAULT_WINNER_FEE_BPS,
            DEFAULT_DEV_FEE_BPS,
        ));
        self.max_side_bettors().set(DEFAULT_MAX_SIDE_BETTORS);

        self.rounds(FIRST_GAME_ID).set(Round::open(FIRST_GAME_ID));
        self.current_game_id().set(FIRST_GAME_ID);
    }

    #[upgrade]
    fn upgrade(&self) {
        self.max_side_bettors().set_if_empty(DEFAULT_MAX_SIDE_BETTORS);
    }

    // ========================================================
    // ENDPOINT: betWithPrompt
    // Fixed cost: stake exactly the base amount and register a prompt.
    // ========================================================

    #[payable("*")]
    #[endpoint(betWithPrompt)]
    fn bet_with_prompt(&self, is_side_a: bool, content: OptionalValue<ManagedBuffer>) -> u64 {
        let game_id = self.require_open_round();
        let amount = self.received_stake();
        let side = Side::from_flag(is_side_a);

        require!(amount == self.base_prompt_bet_amount().get(), ERR_PROMPT_AMOUNT);

        let caller = self.blockchain().get_caller();
        self.require_bettor_capacity(&caller, side, game_id);
        let content = content.into_option().unwrap_or_else(ManagedBuffer::new);

        self.record_contribution(&caller, side, &amount, game_id);
        let prompt_id = self.create_prompt(&caller, side, &amount, game_id, content);

        self.bet_placed_event(&caller, is_side_a, game_id, Some(prompt_id), &amount);

        prompt_id
    }

    // ========================================================
    // ENDPOINT: betOnAgent
    // Stake at least the current quote. No upper bound.
    // ========================================================

    #[payable("*")]
    #[endpoint(betOnAgent)]
    fn bet_on_agent(&self, is_side_a: bool) {
        let game_id = self.require_open_round();
        let amount = self.received_stake();
        let side = Side::from_flag(is_side_a);

        require!(amount >= self.quote_for(side), ERR_BELOW_QUOTE);

        let caller = self.blockchain().get_caller();
        self.require_bettor_capacity(&caller, side, game_id);
        self.record_contribution(&caller, side, &amount, game_id);

        self.bet_placed_event(&caller, is_side_a, game_id, None, &amount);
    }

    // ========================================================
    // ENDPOINT: endGame
    // Open → Ended. Settles the round in the same transaction.
    // ========================================================

    #[endpoint(endGame)]
    fn end_game(&self, winner_is_side_a: bool) {
        self.require_owner_or_admin();
        let game_id = self.require_open_round();

        self.rounds(game_id)
            .update(|round| round.status = RoundStatus::Ended);

        let summary = self.settle(game_id, Side::from_flag(winner_is_side_a));
        self.settlements(game_id).set(&summary);

        self.game_ended_event(game_id, winner_is_side_a, &summary);
    }

    // ========================================================
    // ENDPOINT: resetRound
    // Ended → Open under the next game id.
    // ========================================================

    #[endpoint(resetRound)]
    fn reset_round(&self) {
        self.require_owner_or_admin();
        require!(!self.current_round().is_open(), ERR_ROUND_NOT_ENDED);

        let new_game_id = self.current_game_id().get() + 1;
        self.reset_ledger(new_game_id);

        self.round_reset_event(new_game_id);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_open_round(&self) -> u64 {
        let round = self.current_round();
        require!(round.is_open(), ERR_ROUND_NOT_OPEN);
        round.game_id
    }

    fn require_bettor_capacity(&self, caller: &ManagedAddress, side: Side, game_id: u64) {
        let limit = self.max_side_bettors().get();
        require!(
            self.has_bettor_capacity(caller, side, game_id, limit),
            ERR_SIDE_FULL
        );
    }

    /// The single fungible payment attached to a bet, in the bet token.
    fn received_stake(&self) -> BigUint {
        let (token_id, amount) = self.call_value().single_fungible_esdt();
        require!(token_id == self.bet_token().get(), ERR_WRONG_TOKEN);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        amount
    }
}
