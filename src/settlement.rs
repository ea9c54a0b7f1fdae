multiversx_sc::imports!();

use crate::types::{FeeConfig, SettlementSummary, Side};
use crate::BPS_DENOMINATOR;

/// Fee split of a settled pool. All divisions truncate.
pub struct FeeBreakdown<M: ManagedTypeApi> {
    pub total_pool: BigUint<M>,
    pub participation_fee: BigUint<M>,
    /// Paid to each agent; an odd unit of `participation_fee` stays in the pool
    pub participation_fee_per_agent: BigUint<M>,
    pub winner_fee: BigUint<M>,
    pub dev_fee: BigUint<M>,
    /// Left for backers of the winning side
    pub remaining: BigUint<M>,
}

impl<M: ManagedTypeApi> FeeBreakdown<M> {
    /// Requires `fees` to sum to at most `BPS_DENOMINATOR`, which
    /// `updateFees` enforces.
    pub fn compute(total_a: &BigUint<M>, total_b: &BigUint<M>, fees: &FeeConfig) -> Self {
        let total_pool = total_a + total_b;

        let participation_fee = (&total_pool * fees.participation_fee_bps) / BPS_DENOMINATOR;
        let participation_fee_per_agent = participation_fee.clone() / 2u64;
        let winner_fee = (&total_pool * fees.winner_fee_bps) / BPS_DENOMINATOR;
        let dev_fee = (&total_pool * fees.dev_fee_bps) / BPS_DENOMINATOR;

        let remaining = &total_pool - &participation_fee - &winner_fee - &dev_fee;

        FeeBreakdown {
            total_pool,
            participation_fee,
            participation_fee_per_agent,
            winner_fee,
            dev_fee,
            remaining,
        }
    }

    /// Everything the fee step sends out of the contract.
    pub fn fees_paid(&self) -> BigUint<M> {
        &self.participation_fee_per_agent * 2u64 + &self.winner_fee + &self.dev_fee
    }
}

/// `remaining * contribution / total_winning`, truncated.
pub fn pro_rata_share<M: ManagedTypeApi>(
    remaining: &BigUint<M>,
    contribution: &BigUint<M>,
    total_winning: &BigUint<M>,
) -> BigUint<M> {
    if *total_winning == 0u64 {
        return BigUint::zero();
    }
    (remaining * contribution) / total_winning
}

#[multiversx_sc::module]
pub trait SettlementModule:
    crate::ledger::LedgerModule + crate::config::ConfigModule + crate::events::EventsModule
{
    /// Pays fees and distributes the remaining pool of `game_id`. Any failed
    /// transfer reverts the whole transaction.
    fn settle(&self, game_id: u64, winner: Side) -> SettlementSummary<Self::Api> {
        let round = self.rounds(game_id).get();
        let fees = self.fee_config().get();
        let breakdown = FeeBreakdown::compute(&round.total_side_a, &round.total_side_b, &fees);

        let agent_a = self.agent_a().get();
        let agent_b = self.agent_b().get();
        let winning_agent = match winner {
            Side::A => &agent_a,
            Side::B => &agent_b,
        };
        let treasury = self.blockchain().get_owner_address();

        // ── Fees ──
        self.pay_out(&agent_a, &breakdown.participation_fee_per_agent);
        self.pay_out(&agent_b, &breakdown.participation_fee_per_agent);
        self.pay_out(winning_agent, &breakdown.winner_fee);
        self.pay_out(&treasury, &breakdown.dev_fee);

        // ── Pro-rata distribution to winning backers ──
        let total_winning = round.total(winner).clone();
        let mut distributed = BigUint::zero();
        let mut winner_count = 0u64;

        if total_winning == 0u64 {
            // Nobody backed the winner: the pool goes to the treasury
            self.pay_out(&treasury, &breakdown.remaining);
        } else {
            for user in self.side_bettors(game_id, winner).iter() {
                let contribution = self.stake(game_id, winner, &user).get();
                let payout = pro_rata_share(&breakdown.remaining, &contribution, &total_winning);
                self.pay_out(&user, &payout);
                self.winnings_distributed_event(&user, game_id, &payout);

                distributed += &payout;
                winner_count += 1;
            }
        }

        SettlementSummary {
            game_id,
            winner_is_side_a: winner.is_a(),
            total_pool: breakdown.total_pool,
            participation_fee_per_agent: breakdown.participation_fee_per_agent,
            winner_fee: breakdown.winner_fee,
            dev_fee: breakdown.dev_fee,
            remaining: breakdown.remaining,
            distributed,
            winner_count,
        }
    }

    fn pay_out(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        let token = self.bet_token().get();
        self.send().direct_esdt(to, &token, 0, amount);
    }

    #[view(getSettlement)]
    fn get_settlement(&self, game_id: u64) -> OptionalValue<SettlementSummary<Self::Api>> {
        if self.settlements(game_id).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.settlements(game_id).get())
    }

    #[storage_mapper("settlements")]
    fn settlements(&self, game_id: u64) -> SingleValueMapper<SettlementSummary<Self::Api>>;
}
