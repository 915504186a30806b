// Chainlink USD feeds report answers with 8 decimal places
pub const ORACLE_DECIMALS: u32 = 8;

// Largest power of ten that fits into a U256
pub const MAX_TOKEN_DECIMALS: u8 = 77;

// RPC Configuration
pub const DEFAULT_RPC_URL: &str = "https://api.avax.network/ext/bc/C/rpc";
pub const DEFAULT_RPC_TIMEOUT: u64 = 30;

// Quote defaults
pub const DEFAULT_QUOTE_AMOUNT: &str = "1";
pub const DEFAULT_PRECISION: usize = 2;
pub const MAX_PRECISION: usize = 18;
