use crate::core::{constants::MAX_TOKEN_DECIMALS, QuoteError, QuoteResult, U256};
use crate::sources::TokenHandle;
use log::debug;
use rust_decimal::Decimal;

/// Per-call normalization factors for a token pair.
///
/// `base_scale` belongs to the asset being priced and `quote_scale` to the
/// asset it is priced in, after the flip has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenUnits {
    pub base_scale: U256,
    pub quote_scale: U256,
}

impl TokenUnits {
    pub fn from_decimals(first: u8, second: u8, flip: bool) -> QuoteResult<Self> {
        let (first_scale, second_scale) = (pow10(first)?, pow10(second)?);

        let (base_scale, quote_scale) = if flip {
            (second_scale, first_scale)
        } else {
            (first_scale, second_scale)
        };

        Ok(Self {
            base_scale,
            quote_scale,
        })
    }

    /// Express a human amount of the base asset in base units, keeping any
    /// remainder below one unit.
    pub fn scale(&self, amount: Decimal) -> QuoteResult<ScaledAmount> {
        if amount <= Decimal::ZERO {
            return Err(QuoteError::InvalidAmount(format!(
                "amount must be positive, got {}",
                amount
            )));
        }

        let mantissa = u128::try_from(amount.mantissa())
            .map_err(|_| QuoteError::InvalidAmount(amount.to_string()))?;
        let divisor = U256::from(10u64)
            .checked_pow(U256::from(amount.scale()))
            .ok_or(QuoteError::ArithmeticOverflow)?;
        let numerator = U256::from(mantissa)
            .checked_mul(self.base_scale)
            .ok_or(QuoteError::ArithmeticOverflow)?;

        let (floor, remainder) = numerator.div_mod(divisor);
        let ceil = if remainder.is_zero() {
            floor
        } else {
            floor
                .checked_add(U256::one())
                .ok_or(QuoteError::ArithmeticOverflow)?
        };

        Ok(ScaledAmount {
            floor,
            ceil,
            fraction: remainder.into_f64() / divisor.into_f64(),
        })
    }

    /// Whole base units for venues that only take integers. An amount that
    /// does not land on a whole unit is rejected rather than rounded.
    pub fn scale_amount(&self, amount: Decimal) -> QuoteResult<U256> {
        let scaled = self.scale(amount)?;
        if !scaled.is_whole() {
            return Err(QuoteError::InvalidAmount(format!(
                "{} is not a whole number of base units",
                amount
            )));
        }
        Ok(scaled.floor)
    }

    /// Express a raw quote-asset amount in decimal quote units.
    pub fn to_quote_units(&self, raw: f64) -> f64 {
        raw / self.quote_scale.into_f64()
    }
}

/// An amount in base units: `floor + fraction`, with `fraction` in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledAmount {
    pub floor: U256,
    pub ceil: U256,
    pub fraction: f64,
}

impl ScaledAmount {
    pub fn is_whole(&self) -> bool {
        self.floor == self.ceil
    }

    pub fn value(&self) -> f64 {
        self.floor.into_f64() + self.fraction
    }
}

fn pow10(decimals: u8) -> QuoteResult<U256> {
    if decimals > MAX_TOKEN_DECIMALS {
        return Err(QuoteError::ArithmeticOverflow);
    }
    U256::from(10u64)
        .checked_pow(U256::from(decimals))
        .ok_or(QuoteError::ArithmeticOverflow)
}

/// Resolve the scales of a token pair, reading both decimals concurrently.
pub async fn resolve_units(
    first: &dyn TokenHandle,
    second: &dyn TokenHandle,
    flip: bool,
) -> QuoteResult<TokenUnits> {
    let (first_decimals, second_decimals) = tokio::try_join!(first.decimals(), second.decimals())?;

    debug!(
        "Token decimals: first={}, second={}, flip={}",
        first_decimals, second_decimals, flip
    );

    TokenUnits::from_decimals(first_decimals, second_decimals, flip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::sync::Arc;
    use std::time::Duration;
    use test_case::test_case;
    use tokio::sync::Barrier;

    struct FixedToken(u8);

    #[async_trait::async_trait]
    impl TokenHandle for FixedToken {
        async fn decimals(&self) -> QuoteResult<u8> {
            Ok(self.0)
        }
    }

    struct BarrierToken {
        decimals: u8,
        barrier: Arc<Barrier>,
    }

    #[async_trait::async_trait]
    impl TokenHandle for BarrierToken {
        async fn decimals(&self) -> QuoteResult<u8> {
            self.barrier.wait().await;
            Ok(self.decimals)
        }
    }

    struct BrokenToken;

    #[async_trait::async_trait]
    impl TokenHandle for BrokenToken {
        async fn decimals(&self) -> QuoteResult<u8> {
            Err(QuoteError::SourceRead("execution reverted".to_string()))
        }
    }

    #[test_case(18, 6)]
    #[test_case(6, 18)]
    #[test_case(0, 0)]
    #[test_case(8, 77)]
    fn test_flip_swaps_scales_exactly(d0: u8, d1: u8) {
        let straight = TokenUnits::from_decimals(d0, d1, false).unwrap();
        let flipped = TokenUnits::from_decimals(d0, d1, true).unwrap();

        assert_eq!(straight.base_scale, flipped.quote_scale);
        assert_eq!(straight.quote_scale, flipped.base_scale);
        assert_eq!(straight.base_scale, U256::exp10(d0 as usize));
        assert_eq!(straight.quote_scale, U256::exp10(d1 as usize));
    }

    #[test]
    fn test_decimals_beyond_u256_overflow() {
        let result = TokenUnits::from_decimals(18, 78, false);
        assert!(matches!(result, Err(QuoteError::ArithmeticOverflow)));
    }

    #[test]
    fn test_scale_amount() {
        let units = TokenUnits::from_decimals(18, 6, false).unwrap();

        let scaled = units.scale_amount(Decimal::from(2)).unwrap();
        assert_eq!(scaled, U256::from(2_000_000_000_000_000_000u128));

        let scaled = units.scale_amount(Decimal::from_str("0.25").unwrap()).unwrap();
        assert_eq!(scaled, U256::from(250_000_000_000_000_000u128));
    }

    #[test]
    fn test_scale_keeps_sub_unit_remainder() {
        let units = TokenUnits::from_decimals(2, 6, false).unwrap();
        let scaled = units.scale(Decimal::from_str("1.239").unwrap()).unwrap();

        assert_eq!(scaled.floor, U256::from(123u64));
        assert_eq!(scaled.ceil, U256::from(124u64));
        assert!((scaled.fraction - 0.9).abs() < 1e-12);
        assert!((scaled.value() - 123.9).abs() < 1e-9);
        assert!(!scaled.is_whole());
    }

    #[test]
    fn test_scale_whole_amount() {
        let units = TokenUnits::from_decimals(0, 0, false).unwrap();
        let scaled = units.scale(Decimal::from(7)).unwrap();

        assert_eq!(scaled.floor, scaled.ceil);
        assert_eq!(scaled.fraction, 0.0);
        assert_eq!(scaled.value(), 7.0);
        assert!(scaled.is_whole());
    }

    #[test]
    fn test_scale_amount_rejects_sub_unit_remainder() {
        let units = TokenUnits::from_decimals(2, 6, false).unwrap();
        let result = units.scale_amount(Decimal::from_str("1.239").unwrap());
        assert!(matches!(result, Err(QuoteError::InvalidAmount(_))));

        let units = TokenUnits::from_decimals(0, 0, false).unwrap();
        let result = units.scale_amount(Decimal::from_str("0.5").unwrap());
        assert!(matches!(result, Err(QuoteError::InvalidAmount(_))));
    }

    #[test]
    fn test_scale_amount_rejects_non_positive() {
        let units = TokenUnits::from_decimals(0, 0, false).unwrap();
        assert!(matches!(
            units.scale_amount(Decimal::ZERO),
            Err(QuoteError::InvalidAmount(_))
        ));
        assert!(matches!(
            units.scale_amount(Decimal::from(-5)),
            Err(QuoteError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_to_quote_units() {
        let units = TokenUnits::from_decimals(18, 6, false).unwrap();
        assert_eq!(units.to_quote_units(25_500_000.0), 25.5);
    }

    #[tokio::test]
    async fn test_resolve_units() {
        let (wavax, usdc) = (FixedToken(18), FixedToken(6));

        let units = resolve_units(&wavax, &usdc, false).await.unwrap();
        assert_eq!(units, TokenUnits::from_decimals(18, 6, false).unwrap());

        let flipped = resolve_units(&wavax, &usdc, true).await.unwrap();
        assert_eq!(flipped.base_scale, units.quote_scale);
        assert_eq!(flipped.quote_scale, units.base_scale);
    }

    #[tokio::test]
    async fn test_resolve_units_reads_concurrently() {
        // Each read parks until the other one is in flight as well.
        let barrier = Arc::new(Barrier::new(2));
        let first = BarrierToken {
            decimals: 18,
            barrier: barrier.clone(),
        };
        let second = BarrierToken {
            decimals: 6,
            barrier,
        };

        let units = tokio::time::timeout(
            Duration::from_secs(5),
            resolve_units(&first, &second, false),
        )
        .await
        .expect("decimals reads were issued sequentially")
        .unwrap();

        assert_eq!(units.quote_scale, U256::from(1_000_000u64));
    }

    #[tokio::test]
    async fn test_resolve_units_propagates_read_failure() {
        let result = resolve_units(&FixedToken(18), &BrokenToken, false).await;
        assert!(matches!(result, Err(QuoteError::SourceRead(_))));
    }
}
