// ===== Seeds =====
pub const REGISTRY_SEED: &[u8] = b"registry";
pub const DAO_SEED: &[u8] = b"dao";
pub const DAO_TOKEN_SEED: &[u8] = b"dao_token";
pub const PROPOSAL_SEED: &[u8] = b"proposal";
pub const VOTE_SEED: &[u8] = b"vote";

// ===== Governance Defaults =====
/// Basis-point denominator for quorum/majority thresholds
pub const BASIS_POINTS: u64 = 10_000;

/// Default proposal threshold: 100 tokens (9 decimals)
pub const DEFAULT_PROPOSAL_THRESHOLD: u64 = 100 * 1_000_000_000;

/// Default voting period: 3 days
pub const DEFAULT_VOTING_PERIOD: i64 = 3 * 24 * 60 * 60;

/// Default quorum: 10%
pub const DEFAULT_QUORUM_BPS: u16 = 1_000;

/// Default majority: 50%
pub const DEFAULT_MAJORITY_BPS: u16 = 5_000;

// ===== Parameter Bounds =====
pub const MIN_VOTING_PERIOD: i64 = 60 * 60;
pub const MAX_VOTING_PERIOD: i64 = 30 * 24 * 60 * 60;

// ===== String Limits =====
pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 512;
pub const MAX_TOPIC_LEN: usize = 64;
pub const MAX_REMARK_LEN: usize = 128;
