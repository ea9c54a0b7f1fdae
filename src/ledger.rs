multiversx_sc::imports!();

use crate::types::{Prompt, Round, Side};

/// Per-round accounting and the prompt registry.
///
/// Rounds, stakes and prompts are keyed by `game_id` and never deleted, so a
/// settled round stays auditable after the next one opens. The only state
/// that is cleared on reset is the current-round prompt index.
#[multiversx_sc::module]
pub trait LedgerModule {
    // ========================================================
    // Recording
    // ========================================================

    /// Adds `amount` to the user's stake and to the round total for `side`.
    /// Validation is the caller's job.
    fn record_contribution(
        &self,
        user: &ManagedAddress,
        side: Side,
        amount: &BigUint,
        game_id: u64,
    ) {
        self.stake(game_id, side, user).update(|s| *s += amount);
        self.rounds(game_id).update(|round| round.add_to(side, amount));
        self.side_bettors(game_id, side).insert(user.clone());
    }

    /// A side accepts a new backer only while below `limit`; existing
    /// backers can always add to their stake.
    fn has_bettor_capacity(&self, user: &ManagedAddress, side: Side, game_id: u64, limit: u64) -> bool {
        let bettors = self.side_bettors(game_id, side);
        bettors.contains(user) || (bettors.len() as u64) < limit
    }

    /// Stores an immutable prompt record and indexes it under the open round.
    fn create_prompt(
        &self,
        creator: &ManagedAddress,
        side: Side,
        amount: &BigUint,
        game_id: u64,
        content: ManagedBuffer,
    ) -> u64 {
        let prompt_id = self.last_prompt_id().get() + 1;

        let prompt = Prompt {
            id: prompt_id,
            creator: creator.clone(),
            is_side_a: side.is_a(),
            votes: amount.clone(),
            game_id,
            content,
            exists: true,
        };

        self.prompts(prompt_id).set(&prompt);
        self.last_prompt_id().set(prompt_id);
        self.current_round_prompts().push(&prompt_id);
        self.rounds(game_id).update(|round| round.prompt_count += 1);

        prompt_id
    }

    /// Opens a fresh round with zero totals. Historical records stay
    /// reachable by their original `game_id`.
    fn reset_ledger(&self, new_game_id: u64) {
        self.rounds(new_game_id).set(Round::open(new_game_id));
        self.current_round_prompts().clear();
        self.current_game_id().set(new_game_id);
    }

    fn current_round(&self) -> Round<Self::Api> {
        self.rounds(self.current_game_id().get()).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getUserContribution)]
    fn get_user_contribution(
        &self,
        user: &ManagedAddress,
        game_id: u64,
    ) -> MultiValue2<BigUint, BigUint> {
        let for_a = self.stake(game_id, Side::A, user).get();
        let for_b = self.stake(game_id, Side::B, user).get();
        (for_a, for_b).into()
    }

    #[view(getPrompt)]
    fn get_prompt(&self, prompt_id: u64) -> Prompt<Self::Api> {
        if self.prompts(prompt_id).is_empty() {
            return Prompt::missing();
        }
        self.prompts(prompt_id).get()
    }

    #[view(getCurrentGamePrompts)]
    fn get_current_game_prompts(&self) -> MultiValueEncoded<Prompt<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for prompt_id in self.current_round_prompts().iter() {
            result.push(self.prompts(prompt_id).get());
        }
        result
    }

    #[view(getRound)]
    fn get_round(&self, game_id: u64) -> OptionalValue<Round<Self::Api>> {
        if self.rounds(game_id).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.rounds(game_id).get())
    }

    #[view(gameEnded)]
    fn game_ended(&self) -> bool {
        !self.current_round().is_open()
    }

    #[view(totalAgentA)]
    fn total_agent_a(&self) -> BigUint {
        self.current_round().total_side_a
    }

    #[view(totalAgentB)]
    fn total_agent_b(&self) -> BigUint {
        self.current_round().total_side_b
    }

    #[view(promptCounter)]
    fn prompt_counter(&self) -> u64 {
        self.current_round().prompt_count
    }

    #[view(getRoundBettors)]
    fn get_round_bettors(&self, game_id: u64, is_side_a: bool) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for bettor in self.side_bettors(game_id, Side::from_flag(is_side_a)).iter() {
            result.push(bettor);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(currentGameId)]
    #[storage_mapper("currentGameId")]
    fn current_game_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("rounds")]
    fn rounds(&self, game_id: u64) -> SingleValueMapper<Round<Self::Api>>;

    #[storage_mapper("stake")]
    fn stake(&self, game_id: u64, side: Side, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Distinct backers of one side of a round. Never removed from, so
    /// iteration follows first-bet order.
    #[storage_mapper("sideBettors")]
    fn side_bettors(&self, game_id: u64, side: Side) -> UnorderedSetMapper<ManagedAddress>;

    // ── Prompts ──

    #[storage_mapper("lastPromptId")]
    fn last_prompt_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("prompts")]
    fn prompts(&self, prompt_id: u64) -> SingleValueMapper<Prompt<Self::Api>>;

    #[storage_mapper("currentRoundPrompts")]
    fn current_round_prompts(&self) -> VecMapper<u64>;
}
