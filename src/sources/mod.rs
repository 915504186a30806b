//! Read capabilities the quote engine needs from a venue.
//!
//! Each venue kind gets a narrow trait so the quote math never sees a
//! particular on-chain client; the `chain` module implements them over
//! JSON-RPC, tests implement them with fixed values.

use crate::core::{QuoteResult, Reserves, RoundData, SwapIn, SwapOut, Venue, U256};

/// Token metadata read.
#[async_trait::async_trait]
pub trait TokenHandle: Send + Sync {
    async fn decimals(&self) -> QuoteResult<u8>;
}

/// Single-price feed (Chainlink aggregator style).
#[async_trait::async_trait]
pub trait OracleHandle: Send + Sync {
    async fn latest_round(&self) -> QuoteResult<RoundData>;
}

/// Two-token constant-product pool.
#[async_trait::async_trait]
pub trait ConstantProductHandle: Send + Sync {
    /// `(token0, token1)`
    async fn tokens(&self) -> QuoteResult<(Box<dyn TokenHandle>, Box<dyn TokenHandle>)>;

    async fn reserves(&self) -> QuoteResult<Reserves>;
}

/// Two-token pool with liquidity in discrete price bins.
#[async_trait::async_trait]
pub trait LiquidityBinHandle: Send + Sync {
    /// `(tokenX, tokenY)`
    async fn tokens(&self) -> QuoteResult<(Box<dyn TokenHandle>, Box<dyn TokenHandle>)>;

    /// Simulate selling exactly `amount_in`.
    async fn swap_out(&self, amount_in: U256, swap_for_y: bool) -> QuoteResult<SwapOut>;

    /// Simulate buying exactly `amount_out`.
    async fn swap_in(&self, amount_out: U256, swap_for_y: bool) -> QuoteResult<SwapIn>;
}

/// A venue handle of any supported kind.
pub enum PairSource {
    Oracle(Box<dyn OracleHandle>),
    ConstantProduct(Box<dyn ConstantProductHandle>),
    LiquidityBin(Box<dyn LiquidityBinHandle>),
}

impl PairSource {
    pub fn venue(&self) -> Venue {
        match self {
            PairSource::Oracle(_) => Venue::Oracle,
            PairSource::ConstantProduct(_) => Venue::ConstantProduct,
            PairSource::LiquidityBin(_) => Venue::LiquidityBin,
        }
    }
}
