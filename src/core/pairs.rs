use crate::core::{QuoteError, QuoteResult, Venue};
use crate::utils::flipped_symbol;
use serde::Serialize;
use std::collections::HashMap;

/// A quotable venue on Avalanche C-Chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairInfo {
    pub symbol: &'static str,
    pub venue: Venue,
    pub address: &'static str,
}

pub const KNOWN_PAIRS: &[PairInfo] = &[
    // Chainlink aggregators
    PairInfo {
        symbol: "AVAX/USD",
        venue: Venue::Oracle,
        address: "0x0A77230d17318075983913bC2145DB16C7366156",
    },
    PairInfo {
        symbol: "USDC/USD",
        venue: Venue::Oracle,
        address: "0xF096872672F44d6EBA71458D74fe67F9a77a23B9",
    },
    PairInfo {
        symbol: "USDT/USD",
        venue: Venue::Oracle,
        address: "0xEBE676ee90Fe1112671f19b6B7459bC678B67e8a",
    },
    // Trader Joe v1 pairs
    PairInfo {
        symbol: "APOW/AVAX",
        venue: Venue::ConstantProduct,
        address: "0x2F32f5224669e48B3bB34691C3D9Ab974d776C09",
    },
    PairInfo {
        symbol: "APOW/USDC",
        venue: Venue::ConstantProduct,
        address: "0x2eFC75dE53c18f891A2bd2130e3bF166c4150e3e",
    },
    PairInfo {
        symbol: "APOW/USDT",
        venue: Venue::ConstantProduct,
        address: "0x507041280Dce58C15FADB1De57eb8618163Cb7C6",
    },
    PairInfo {
        symbol: "XPOW/APOW",
        venue: Venue::ConstantProduct,
        address: "0xB40eA51B243bEc143236B2E54AF5E156C9ac45Af",
    },
    PairInfo {
        symbol: "XPOW/AVAX",
        venue: Venue::ConstantProduct,
        address: "0x0283750aef70b1481bbb7b31a96212bb3c440fed",
    },
    PairInfo {
        symbol: "XPOW/USDC",
        venue: Venue::ConstantProduct,
        address: "0xE41b1699c36d2fBDE1A7eB2529758753f97617b0",
    },
    PairInfo {
        symbol: "XPOW/USDT",
        venue: Venue::ConstantProduct,
        address: "0xBCba353C3bba23ad3fC6d6f24349caF209A7Cbbe",
    },
    // Trader Joe LB v2.1 pairs
    PairInfo {
        symbol: "AVAX/USDC",
        venue: Venue::LiquidityBin,
        address: "0xD446eb1660F766d533BeCeEf890Df7A69d26f7d1",
    },
    PairInfo {
        symbol: "AVAX/USDT",
        venue: Venue::LiquidityBin,
        address: "0x87EB2F90d7D0034571f343fb7429AE22C1Bd9F72",
    },
];

lazy_static::lazy_static! {
    static ref PAIRS_BY_SYMBOL: HashMap<String, &'static PairInfo> = KNOWN_PAIRS
        .iter()
        .map(|pair| (pair.symbol.to_uppercase(), pair))
        .collect();
}

/// Registry hit; `reversed` is set when the caller asked for QUOTE/BASE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairLookup {
    pub pair: &'static PairInfo,
    pub reversed: bool,
}

/// Find a pair by symbol, case-insensitively, in either orientation.
pub fn find_pair(symbol: &str) -> QuoteResult<PairLookup> {
    let key = symbol.trim().to_uppercase();

    if let Some(&pair) = PAIRS_BY_SYMBOL.get(&key) {
        return Ok(PairLookup {
            pair,
            reversed: false,
        });
    }

    PAIRS_BY_SYMBOL
        .get(&flipped_symbol(&key, true))
        .map(|&pair| PairLookup {
            pair,
            reversed: true,
        })
        .ok_or_else(|| QuoteError::UnknownPair(symbol.to_string()))
}

/// Known pairs, optionally restricted to one venue kind.
pub fn pairs_by_venue(venue: Option<Venue>) -> Vec<&'static PairInfo> {
    KNOWN_PAIRS
        .iter()
        .filter(|pair| venue.map_or(true, |v| pair.venue == v))
        .collect()
}
