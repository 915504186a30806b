use crate::core::{
    resolve_units, Quote, QuoteError, QuoteResult, Reserves, ScaledAmount, Side, TokenUnits, Venue,
    U256,
};
use crate::sources::ConstantProductHandle;
use crate::utils::timestamp_from_unix;
use log::debug;
use rust_decimal::Decimal;

/// Constant-product pool quote calculator
/// Uses constant product formula: x * y = k (no fee term)
pub struct ConstantProductQuoteCalculator;

impl ConstantProductQuoteCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Output received when selling `amount_in` into the pool
    /// bid = amount_in * reserve_out / (reserve_in + amount_in)
    fn calculate_bid(
        &self,
        amount_in: &ScaledAmount,
        reserve_in: U256,
        reserve_out: U256,
    ) -> QuoteResult<f64> {
        reserve_in
            .checked_add(amount_in.ceil)
            .ok_or(QuoteError::ArithmeticOverflow)?;

        let denominator = (reserve_in + amount_in.floor).into_f64() + amount_in.fraction;

        Ok(amount_in.value() * reserve_out.into_f64() / denominator)
    }

    /// Input paid when buying `amount_out` worth of the in-asset
    /// ask = amount_out * reserve_out / (reserve_in - amount_out)
    fn calculate_ask(
        &self,
        amount_out: &ScaledAmount,
        reserve_in: U256,
        reserve_out: U256,
    ) -> QuoteResult<f64> {
        // reserve_in is whole, so reserve_in <= amount iff reserve_in <= floor(amount)
        if reserve_in <= amount_out.floor {
            return Err(QuoteError::InsufficientLiquidity {
                venue: Venue::ConstantProduct,
                side: Side::Ask,
                available: reserve_in,
                required: amount_out.ceil,
            });
        }

        let denominator = (reserve_in - amount_out.floor).into_f64() - amount_out.fraction;

        Ok(amount_out.value() * reserve_out.into_f64() / denominator)
    }

    /// Bid/ask/mid for already resolved units and reserves
    pub fn calculate_quote(
        &self,
        amount: Decimal,
        units: &TokenUnits,
        reserves: &Reserves,
        flip: bool,
    ) -> QuoteResult<Quote> {
        let (reserve_in, reserve_out) = if flip {
            (reserves.reserve1, reserves.reserve0)
        } else {
            (reserves.reserve0, reserves.reserve1)
        };

        let amount_in = units.scale(amount)?;

        debug!(
            "ConstantProduct Quote: amount_in={}, reserve_in={}, reserve_out={}, flip={}",
            amount_in.value(),
            reserve_in,
            reserve_out,
            flip
        );

        let bid = self.calculate_bid(&amount_in, reserve_in, reserve_out)?;
        let ask = self.calculate_ask(&amount_in, reserve_in, reserve_out)?;

        Ok(Quote::new(
            units.to_quote_units(bid),
            units.to_quote_units(ask),
            timestamp_from_unix(reserves.timestamp),
        ))
    }

    pub async fn quote(
        &self,
        amount: Decimal,
        pool: &dyn ConstantProductHandle,
        flip: bool,
    ) -> QuoteResult<Quote> {
        let units = async {
            let (token0, token1) = pool.tokens().await?;
            resolve_units(token0.as_ref(), token1.as_ref(), flip).await
        };

        let (units, reserves) = tokio::try_join!(units, pool.reserves())?;

        self.calculate_quote(amount, &units, &reserves, flip)
    }
}

impl Default for ConstantProductQuoteCalculator {
    fn default() -> Self {
        Self::new()
    }
}
