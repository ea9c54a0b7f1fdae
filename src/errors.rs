// Error messages raised through `require!` / `sc_panic!`.

pub const ERR_ROUND_NOT_OPEN: &str = "Round is not open";
pub const ERR_ROUND_NOT_ENDED: &str = "Round not yet ended";
pub const ERR_WRONG_TOKEN: &str = "Wrong bet token";
pub const ERR_ZERO_AMOUNT: &str = "Bet amount must be positive";
pub const ERR_PROMPT_AMOUNT: &str = "Amount must exactly match the base prompt amount";
pub const ERR_BELOW_QUOTE: &str = "Amount below dynamic minimum";
pub const ERR_FEES_TOO_HIGH: &str = "Fees too high";
pub const ERR_BASE_AMOUNT_TOO_LOW: &str = "Base prompt amount must be at least 4";
pub const ERR_SIDE_FULL: &str = "Side has reached the bettor limit";
pub const ERR_ZERO_BETTOR_LIMIT: &str = "Bettor limit must be positive";
pub const ERR_NOT_AUTHORIZED: &str = "Caller is not owner or admin";
pub const ERR_INVALID_AGENTS: &str = "Agents must be two distinct non-zero addresses";
pub const ERR_INVALID_TOKEN: &str = "Invalid bet token identifier";
pub const ERR_ALREADY_ADMIN: &str = "Address is already an admin";
pub const ERR_NOT_ADMIN: &str = "Address is not an admin";
