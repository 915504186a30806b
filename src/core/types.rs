use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uint::construct_uint;

construct_uint! {
    /// Unsigned 256-bit integer, the width of an EVM word.
    pub struct U256(4);
}

impl U256 {
    /// Lossy conversion used once raw amounts leave the integer domain.
    pub fn into_f64(self) -> f64 {
        self.0
            .iter()
            .rev()
            .fold(0.0, |acc, &limb| acc * 18_446_744_073_709_551_616.0 + limb as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    Oracle,
    ConstantProduct,
    LiquidityBin,
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Venue::Oracle => write!(f, "Oracle"),
            Venue::ConstantProduct => write!(f, "ConstantProduct"),
            Venue::LiquidityBin => write!(f, "LiquidityBin"),
        }
    }
}

impl FromStr for Venue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "oracle" | "feed" | "cl" => Ok(Venue::Oracle),
            "constantproduct" | "cp" | "v1" => Ok(Venue::ConstantProduct),
            "liquiditybin" | "lb" | "v2" => Ok(Venue::LiquidityBin),
            _ => Err(format!("unknown venue kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Bid,
    Ask,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "bid"),
            Side::Ask => write!(f, "ask"),
        }
    }
}

/// Mid/bid/ask in quote-asset units per base-asset unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub mid: f64,
    pub bid: f64,
    pub ask: f64,
    /// `None` when the venue exposes no timestamp.
    pub timestamp: Option<DateTime<Utc>>,
}

impl Quote {
    pub fn new(bid: f64, ask: f64, timestamp: Option<DateTime<Utc>>) -> Self {
        Self {
            mid: (bid + ask) / 2.0,
            bid,
            ask,
            timestamp,
        }
    }

    pub fn flat(value: f64, timestamp: Option<DateTime<Utc>>) -> Self {
        Self {
            mid: value,
            bid: value,
            ask: value,
            timestamp,
        }
    }

    /// Absolute spread between ask and bid.
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }
}

/// One round of an oracle feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundData {
    pub round_id: u128,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserves {
    pub reserve0: U256,
    pub reserve1: U256,
    pub timestamp: u64,
}

/// Result of simulating a sell of an exact input amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOut {
    pub amount_in_left: U256,
    pub amount_out: U256,
}

/// Result of simulating a buy of an exact output amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapIn {
    pub amount_in: U256,
    pub amount_out_left: U256,
}
