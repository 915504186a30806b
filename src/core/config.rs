use crate::core::{constants::*, error::QuoteResult, QuoteError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Caller-level defaults. Only collaborators read this; the quote engine
/// takes everything it needs as explicit arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rpc_url: String,
    pub timeout_secs: u64,
    pub default_amount: Decimal,
    pub default_precision: usize,
    pub default_flip: bool,
}

impl Config {
    pub fn from_env() -> QuoteResult<Self> {
        let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());

        Ok(Self {
            rpc_url,
            timeout_secs: env::var("TIMEOUT_SECS")
                .unwrap_or_default()
                .parse()
                .unwrap_or(DEFAULT_RPC_TIMEOUT),
            default_amount: env::var("QUOTE_AMOUNT")
                .ok()
                .and_then(|s| Decimal::from_str(s.trim()).ok())
                .unwrap_or_else(default_amount),
            default_precision: env::var("QUOTE_PRECISION")
                .unwrap_or_default()
                .parse()
                .unwrap_or(DEFAULT_PRECISION),
            default_flip: env::var("QUOTE_FLIP")
                .unwrap_or_default()
                .parse()
                .unwrap_or(false),
        })
    }

    pub fn validate(&self) -> QuoteResult<()> {
        if self.rpc_url.trim().is_empty() {
            return Err(QuoteError::ConfigError(
                "RPC URL cannot be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(QuoteError::ConfigError(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if self.default_amount <= Decimal::ZERO {
            return Err(QuoteError::ConfigError(
                "Default amount must be positive".to_string(),
            ));
        }

        if self.default_precision > MAX_PRECISION {
            return Err(QuoteError::ConfigError(format!(
                "Precision cannot exceed {} digits",
                MAX_PRECISION
            )));
        }

        Ok(())
    }
}

fn default_amount() -> Decimal {
    Decimal::from_str(DEFAULT_QUOTE_AMOUNT).unwrap_or(Decimal::ONE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            timeout_secs: DEFAULT_RPC_TIMEOUT,
            default_amount: default_amount(),
            default_precision: DEFAULT_PRECISION,
            default_flip: false,
        }
    }
}
