multiversx_sc::imports!();

use crate::types::Side;
use crate::{BPS_DENOMINATOR, EVEN_ODDS_RATIO_BPS, MIN_QUOTE_DIVISOR};

/// Amount required to back the side holding `own` while the other side
/// holds `opposite`.
///
/// `base * opposite / own`, truncated, and never below `base / 4`. An empty
/// pool quotes exactly `base`; an empty side facing a funded one quotes the
/// floor.
pub fn quote_required_amount<M: ManagedTypeApi>(
    base: &BigUint<M>,
    own: &BigUint<M>,
    opposite: &BigUint<M>,
) -> BigUint<M> {
    let floor = base.clone() / MIN_QUOTE_DIVISOR;

    if *own == 0u64 {
        if *opposite == 0u64 {
            return base.clone();
        }
        return floor;
    }

    let quote = (base * opposite) / own;
    if quote < floor {
        floor
    } else {
        quote
    }
}

/// Share of the pool staked on side A, in basis points.
pub fn side_a_ratio_bps<M: ManagedTypeApi>(total_a: &BigUint<M>, total_b: &BigUint<M>) -> u64 {
    let pool = total_a + total_b;
    if pool == 0u64 {
        return EVEN_ODDS_RATIO_BPS;
    }
    let ratio = (total_a * BPS_DENOMINATOR) / &pool;
    // at most BPS_DENOMINATOR
    ratio.to_u64().unwrap_or(BPS_DENOMINATOR)
}

#[multiversx_sc::module]
pub trait PricingModule:
    crate::ledger::LedgerModule + crate::config::ConfigModule + crate::events::EventsModule
{
    fn quote_for(&self, side: Side) -> BigUint {
        let round = self.current_round();
        quote_required_amount(
            &self.base_prompt_bet_amount().get(),
            round.total(side),
            round.total(side.opposite()),
        )
    }

    /// Minimum stake of a plain bet on the side.
    #[view(calculateDynamicBetAmount)]
    fn calculate_dynamic_bet_amount(&self, is_side_a: bool) -> BigUint {
        self.quote_for(Side::from_flag(is_side_a))
    }

    /// `(sideARatioBps, costForSideA, costForSideB)`
    #[view(getMarketInfo)]
    fn get_market_info(&self) -> MultiValue3<u64, BigUint, BigUint> {
        let round = self.current_round();
        let base = self.base_prompt_bet_amount().get();

        let ratio = side_a_ratio_bps(&round.total_side_a, &round.total_side_b);
        let cost_a = quote_required_amount(&base, &round.total_side_a, &round.total_side_b);
        let cost_b = quote_required_amount(&base, &round.total_side_b, &round.total_side_a);

        (ratio, cost_a, cost_b).into()
    }
}
