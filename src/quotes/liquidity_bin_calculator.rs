use crate::core::{resolve_units, Quote, QuoteError, QuoteResult, Side, SwapIn, SwapOut, Venue, U256};
use crate::sources::LiquidityBinHandle;
use log::debug;
use rust_decimal::Decimal;

/// Liquidity-bin pool quote calculator
/// Slippage comes from the pool's own swap simulations; nothing is derived
/// from reserves here.
pub struct LiquidityBinQuoteCalculator;

impl LiquidityBinQuoteCalculator {
    pub fn new() -> Self {
        Self
    }

    fn ensure_filled(side: Side, required: U256, unfilled: U256) -> QuoteResult<()> {
        if unfilled.is_zero() {
            return Ok(());
        }
        Err(QuoteError::InsufficientLiquidity {
            venue: Venue::LiquidityBin,
            side,
            available: required.saturating_sub(unfilled),
            required,
        })
    }

    /// Raw amount received for selling `amount_in`
    fn bid_of(&self, amount_in: U256, swap: &SwapOut) -> QuoteResult<U256> {
        Self::ensure_filled(Side::Bid, amount_in, swap.amount_in_left)?;
        Ok(swap.amount_out)
    }

    /// Raw amount paid for buying `amount_out`
    fn ask_of(&self, amount_out: U256, swap: &SwapIn) -> QuoteResult<U256> {
        Self::ensure_filled(Side::Ask, amount_out, swap.amount_out_left)?;
        Ok(swap.amount_in)
    }

    /// Quote without a timestamp: the pool exposes none.
    pub async fn quote(
        &self,
        amount: Decimal,
        pool: &dyn LiquidityBinHandle,
        flip: bool,
    ) -> QuoteResult<Quote> {
        let (token_x, token_y) = pool.tokens().await?;
        let units = resolve_units(token_x.as_ref(), token_y.as_ref(), flip).await?;
        let scaled = units.scale_amount(amount)?;

        let (swap_out, swap_in) =
            tokio::try_join!(pool.swap_out(scaled, !flip), pool.swap_in(scaled, flip))?;

        debug!(
            "LiquidityBin Quote: amount={}, out={}/{} left, in={}/{} left, flip={}",
            scaled,
            swap_out.amount_out,
            swap_out.amount_in_left,
            swap_in.amount_in,
            swap_in.amount_out_left,
            flip
        );

        let bid = self.bid_of(scaled, &swap_out)?;
        let ask = self.ask_of(scaled, &swap_in)?;

        Ok(Quote::new(
            units.to_quote_units(bid.into_f64()),
            units.to_quote_units(ask.into_f64()),
            None,
        ))
    }
}

impl Default for LiquidityBinQuoteCalculator {
    fn default() -> Self {
        Self::new()
    }
}
