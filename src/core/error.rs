use crate::core::types::{Side, Venue, U256};
use thiserror::Error;

pub type QuoteResult<T> = Result<T, QuoteError>;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Insufficient liquidity in {venue} pool for {side}: available {available}, required {required}")]
    InsufficientLiquidity {
        venue: Venue,
        side: Side,
        available: U256,
        required: U256,
    },

    #[error("Arithmetic overflow in calculation")]
    ArithmeticOverflow,

    #[error("Source read failed: {0}")]
    SourceRead(String),

    #[error("Invalid source data: {0}")]
    InvalidSourceData(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown pair: {0}")]
    UnknownPair(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Timeout: operation took longer than {0} seconds")]
    Timeout(u64),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl QuoteError {
    /// True for failures caused by the venue rather than the caller or the transport.
    pub fn is_liquidity(&self) -> bool {
        matches!(self, QuoteError::InsufficientLiquidity { .. })
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::SerializationError(err.to_string())
    }
}

impl<M: ethers::providers::Middleware> From<ethers::contract::ContractError<M>> for QuoteError {
    fn from(err: ethers::contract::ContractError<M>) -> Self {
        QuoteError::SourceRead(err.to_string())
    }
}
