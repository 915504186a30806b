pub mod chain;
pub mod cli;
pub mod core;
pub mod quotes;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use chain::ChainClient;
pub use core::{Config, Quote, QuoteError, QuoteResult, TokenUnits, Venue, U256};
pub use quotes::QuoteEngine;
pub use sources::PairSource;
