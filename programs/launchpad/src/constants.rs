// ===== Seeds =====
pub const PLATFORM_SEED: &[u8] = b"platform";
pub const CAMPAIGN_SEED: &[u8] = b"campaign";
pub const INVESTOR_POSITION_SEED: &[u8] = b"investor_position";
pub const OG_POINTS_SEED: &[u8] = b"og_points";
pub const VAULT_AUTHORITY: &[u8] = b"vault_authority";
pub const TOKEN_VAULT: &[u8] = b"token_vault";
pub const USDC_VAULT: &[u8] = b"usdc_vault";
pub const TOKEN_MINT_SEED: &[u8] = b"token_mint";

// ===== Token Configuration =====
/// Campaign token decimals (standard SPL token)
pub const TOKEN_DECIMALS: u8 = 9;

/// Funding token (USDC) decimals
pub const USDC_DECIMALS: u8 = 6;

// ===== Supply Bounds =====
/// Minimum total supply: 1 million tokens
pub const MIN_TOTAL_SUPPLY: u64 = 1_000_000 * 10u64.pow(TOKEN_DECIMALS as u32);

/// Maximum total supply: 1 billion tokens
pub const MAX_TOTAL_SUPPLY: u64 = 1_000_000_000 * 10u64.pow(TOKEN_DECIMALS as u32);

// ===== Token Allocation =====
/// Creator allocation: 20%
pub const CREATOR_ALLOCATION_PERCENT: u8 = 20;

/// Liquidity allocation: 15%
pub const LIQUIDITY_ALLOCATION_PERCENT: u8 = 15;

// ===== Fees =====
/// Basis-point denominator
pub const BASIS_POINTS: u64 = 10_000;

/// Default platform fee: 5% of total supply, taken in campaign tokens
pub const DEFAULT_PLATFORM_FEE_BPS: u16 = 500;

/// Upper bound for the updatable platform fee
pub const MAX_PLATFORM_FEE_BPS: u16 = 1_000;

/// Default promotion fee: 100 USDC
pub const DEFAULT_PROMOTION_FEE: u64 = 100 * 10u64.pow(USDC_DECIMALS as u32);

// ===== Bonding Curve =====
/// Reserve-ratio denominator (parts per million; 1_000_000 = 100%)
pub const RESERVE_RATIO_PPM: u32 = 1_000_000;

/// Minimum reserve ratio: 1%
pub const MIN_RESERVE_RATIO: u32 = RESERVE_RATIO_PPM / 100;

/// Maximum reserve ratio: 100% (constant price)
pub const MAX_RESERVE_RATIO: u32 = RESERVE_RATIO_PPM;

// ===== Deadlines =====
/// Minimum funding window: 1 day
pub const MIN_DEADLINE_WINDOW: i64 = 24 * 60 * 60;

/// Maximum funding window: 90 days
pub const MAX_DEADLINE_WINDOW: i64 = 90 * 24 * 60 * 60;

// ===== OG Points =====
/// Base award on first participation in a campaign
pub const OG_POINTS_BASE_AWARD: u64 = 100;

/// Default promotional bonus configured on the platform
pub const DEFAULT_PROMOTIONAL_OG_POINTS: u64 = 500;

// ===== String Limits =====
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_DESCRIPTION_LEN: usize = 256;
pub const MAX_URI_LEN: usize = 128;

// ===== Views =====
/// Largest page a single paginated query may return
pub const MAX_PAGE_LIMIT: u32 = 8;
