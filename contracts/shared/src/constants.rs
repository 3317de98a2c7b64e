//! Constants used across the election contracts
//!
//! Sentinels and ledger TTL configuration.

// ===== Proposal Constants =====

/// Reserved "no proposal" index. Never stored and never a valid vote target;
/// also the winner reported when no votes were cast.
pub const NO_PROPOSAL: u32 = 0;

/// Index assigned to the first submitted proposal
pub const FIRST_PROPOSAL_INDEX: u32 = 1;

// ===== Ledger TTL Constants =====
// At ~5s per ledger: 1 day ≈ 17,280 ledgers.

/// Ledgers per day
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage (phase, counters, administrator) is extended to 30 days
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Instance storage is only extended once fewer than 29 days remain
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Registry entries (participants, proposals) are extended to 30 days
pub const REGISTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Registry entries are only extended once fewer than 29 days remain
pub const REGISTRY_LIFETIME_THRESHOLD: u32 = REGISTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;
