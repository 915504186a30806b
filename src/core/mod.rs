pub mod config;
pub mod constants;
pub mod error;
pub mod pairs;
pub mod token_units;
pub mod types;

pub use config::Config;
pub use constants::*;
pub use error::{QuoteError, QuoteResult};
pub use pairs::{find_pair, pairs_by_venue, PairInfo, PairLookup, KNOWN_PAIRS};
pub use token_units::{resolve_units, ScaledAmount, TokenUnits};
pub use types::*;
