use crate::core::{constants::ORACLE_DECIMALS, Quote, QuoteError, QuoteResult};
use crate::sources::OracleHandle;
use crate::utils::timestamp_from_unix;
use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

/// Oracle feed quote calculator
/// A price feed has no counterparty liquidity, so bid = mid = ask
pub struct OracleQuoteCalculator;

impl OracleQuoteCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Value of `amount` base units at the feed's answer
    fn calculate_value(&self, answer: i128, amount: Decimal) -> QuoteResult<f64> {
        if answer <= 0 {
            return Err(QuoteError::InvalidSourceData(format!(
                "oracle answer must be positive, got {}",
                answer
            )));
        }

        let price = Decimal::try_from_i128_with_scale(answer, ORACLE_DECIMALS)
            .map_err(|_| QuoteError::ArithmeticOverflow)?;

        price
            .checked_mul(amount)
            .and_then(|value| value.to_f64())
            .ok_or(QuoteError::ArithmeticOverflow)
    }

    pub async fn quote(
        &self,
        amount: Decimal,
        feed: &dyn OracleHandle,
        flip: bool,
    ) -> QuoteResult<Quote> {
        if amount <= Decimal::ZERO {
            return Err(QuoteError::InvalidAmount(format!(
                "amount must be positive, got {}",
                amount
            )));
        }

        let round = feed.latest_round().await?;

        debug!(
            "Oracle Quote: amount={}, round={}, answer={}, updated_at={}",
            amount, round.round_id, round.answer, round.updated_at
        );

        let value = self.calculate_value(round.answer, amount)?;
        let value = if flip { 1.0 / value } else { value };
        if !value.is_finite() {
            return Err(QuoteError::ArithmeticOverflow);
        }

        Ok(Quote::flat(value, timestamp_from_unix(round.updated_at)))
    }
}

impl Default for OracleQuoteCalculator {
    fn default() -> Self {
        Self::new()
    }
}
