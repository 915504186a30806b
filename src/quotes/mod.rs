pub mod constant_product_calculator;
pub mod liquidity_bin_calculator;
pub mod oracle_calculator;

use crate::core::{Quote, QuoteResult};
use crate::sources::PairSource;
use rust_decimal::Decimal;

pub use constant_product_calculator::ConstantProductQuoteCalculator;
pub use liquidity_bin_calculator::LiquidityBinQuoteCalculator;
pub use oracle_calculator::OracleQuoteCalculator;

/// Main quote engine that delegates to venue-specific calculators
pub struct QuoteEngine {
    oracle_calculator: OracleQuoteCalculator,
    constant_product_calculator: ConstantProductQuoteCalculator,
    liquidity_bin_calculator: LiquidityBinQuoteCalculator,
}

impl QuoteEngine {
    pub fn new() -> Self {
        Self {
            oracle_calculator: OracleQuoteCalculator::new(),
            constant_product_calculator: ConstantProductQuoteCalculator::new(),
            liquidity_bin_calculator: LiquidityBinQuoteCalculator::new(),
        }
    }

    /// Calculate quote for a single source
    pub async fn calculate_quote(
        &self,
        amount: Decimal,
        source: &PairSource,
        flip: bool,
    ) -> QuoteResult<Quote> {
        match source {
            PairSource::Oracle(feed) => {
                self.oracle_calculator
                    .quote(amount, feed.as_ref(), flip)
                    .await
            }
            PairSource::ConstantProduct(pool) => {
                self.constant_product_calculator
                    .quote(amount, pool.as_ref(), flip)
                    .await
            }
            PairSource::LiquidityBin(pool) => {
                self.liquidity_bin_calculator
                    .quote(amount, pool.as_ref(), flip)
                    .await
            }
        }
    }

    /// Calculate quotes for multiple sources, one after another
    pub async fn calculate_quotes(
        &self,
        amount: Decimal,
        sources: &[(PairSource, bool)],
    ) -> Vec<QuoteResult<Quote>> {
        let mut results = Vec::new();

        for (source, flip) in sources {
            results.push(self.calculate_quote(amount, source, *flip).await);
        }

        results
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new()
    }
}
