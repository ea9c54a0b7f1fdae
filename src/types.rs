multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Side — the two competing agents
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn from_flag(is_side_a: bool) -> Self {
        if is_side_a {
            Side::A
        } else {
            Side::B
        }
    }

    pub fn is_a(self) -> bool {
        self == Side::A
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

// ============================================================
// Round — one betting cycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum RoundStatus {
    /// Accepting bets.
    Open,
    /// Settled. Waiting for `resetRound` to open the next round.
    Ended,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Round<M: ManagedTypeApi> {
    pub game_id: u64,
    pub total_side_a: BigUint<M>,
    pub total_side_b: BigUint<M>,
    pub status: RoundStatus,
    /// Prompts created while this round was open
    pub prompt_count: u64,
}

impl<M: ManagedTypeApi> Round<M> {
    pub fn open(game_id: u64) -> Self {
        Round {
            game_id,
            total_side_a: BigUint::zero(),
            total_side_b: BigUint::zero(),
            status: RoundStatus::Open,
            prompt_count: 0,
        }
    }

    pub fn total(&self, side: Side) -> &BigUint<M> {
        match side {
            Side::A => &self.total_side_a,
            Side::B => &self.total_side_b,
        }
    }

    pub fn add_to(&mut self, side: Side, amount: &BigUint<M>) {
        match side {
            Side::A => self.total_side_a += amount,
            Side::B => self.total_side_b += amount,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == RoundStatus::Open
    }
}

// ============================================================
// Prompt — immutable record of a prompt bet
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Prompt<M: ManagedTypeApi> {
    pub id: u64,
    pub creator: ManagedAddress<M>,
    pub is_side_a: bool,
    /// Exact amount staked when the prompt was created
    pub votes: BigUint<M>,
    pub game_id: u64,
    /// Opaque creator-supplied payload
    pub content: ManagedBuffer<M>,
    pub exists: bool,
}

impl<M: ManagedTypeApi> Prompt<M> {
    /// Zero-valued record returned for ids that were never allocated.
    pub fn missing() -> Self {
        Prompt {
            id: 0,
            creator: ManagedAddress::zero(),
            is_side_a: false,
            votes: BigUint::zero(),
            game_id: 0,
            content: ManagedBuffer::new(),
            exists: false,
        }
    }
}

// ============================================================
// Fee configuration — basis points out of 10_000
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct FeeConfig {
    /// Split evenly between both agents regardless of outcome
    pub participation_fee_bps: u64,
    /// Paid to the winning agent
    pub winner_fee_bps: u64,
    /// Paid to the treasury
    pub dev_fee_bps: u64,
}

impl FeeConfig {
    pub fn new(participation_fee_bps: u64, winner_fee_bps: u64, dev_fee_bps: u64) -> Self {
        FeeConfig {
            participation_fee_bps,
            winner_fee_bps,
            dev_fee_bps,
        }
    }

    /// `None` when the sum does not fit in a u64.
    pub fn total_bps(&self) -> Option<u64> {
        self.participation_fee_bps
            .checked_add(self.winner_fee_bps)?
            .checked_add(self.dev_fee_bps)
    }

    pub fn is_within(&self, denominator: u64) -> bool {
        matches!(self.total_bps(), Some(total) if total <= denominator)
    }
}

// ============================================================
// Settlement summary — audit record of an ended round
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct SettlementSummary<M: ManagedTypeApi> {
    pub game_id: u64,
    pub winner_is_side_a: bool,
    pub total_pool: BigUint<M>,
    pub participation_fee_per_agent: BigUint<M>,
    pub winner_fee: BigUint<M>,
    pub dev_fee: BigUint<M>,
    /// Pool left for backers of the winning side after fees
    pub remaining: BigUint<M>,
    /// Sum actually paid out to backers; `remaining - distributed` is rounding dust
    pub distributed: BigUint<M>,
    pub winner_count: u64,
}
