//! JSON-RPC backed venue handles.

pub mod contracts;

use crate::core::{
    Config, PairInfo, QuoteError, QuoteResult, Reserves, RoundData, SwapIn, SwapOut, Venue,
    U256,
};
use crate::sources::{
    ConstantProductHandle, LiquidityBinHandle, OracleHandle, PairSource, TokenHandle,
};
use contracts::{AggregatorV3, Erc20Metadata, JoePair, LbPair};
use ethers::providers::{Http, Provider};
use ethers::types::{Address, I256, U256 as EvmU256};
use log::debug;
use std::sync::Arc;

pub type Client = Provider<Http>;

/// Builds venue handles against a single RPC endpoint.
#[derive(Clone)]
pub struct ChainClient {
    provider: Arc<Client>,
}

impl ChainClient {
    pub fn new(config: &Config) -> QuoteResult<Self> {
        let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
            .map_err(|e| QuoteError::ConfigError(format!("Invalid RPC URL: {}", e)))?;

        Ok(Self {
            provider: Arc::new(provider),
        })
    }

    /// Handle for a registry entry, typed by its venue kind.
    pub fn source(&self, pair: &PairInfo) -> QuoteResult<PairSource> {
        let address = parse_address(pair.address)?;
        debug!("{} {} at {:?}", pair.venue, pair.symbol, address);

        Ok(match pair.venue {
            Venue::Oracle => PairSource::Oracle(Box::new(EvmFeed::new(address, self.provider.clone()))),
            Venue::ConstantProduct => {
                PairSource::ConstantProduct(Box::new(EvmPair::new(address, self.provider.clone())))
            }
            Venue::LiquidityBin => {
                PairSource::LiquidityBin(Box::new(EvmLbPair::new(address, self.provider.clone())))
            }
        })
    }
}

pub fn parse_address(address: &str) -> QuoteResult<Address> {
    address
        .parse::<Address>()
        .map_err(|e| QuoteError::ConfigError(format!("Invalid address {}: {}", address, e)))
}

/// LB pair amounts are `uint128` on chain.
fn to_u128(value: U256) -> QuoteResult<u128> {
    if value.bits() > 128 {
        return Err(QuoteError::ArithmeticOverflow);
    }
    Ok(value.low_u128())
}

fn answer_to_i128(answer: I256) -> QuoteResult<i128> {
    i128::try_from(answer)
        .map_err(|_| QuoteError::InvalidSourceData(format!("answer out of range: {}", answer)))
}

fn timestamp_to_u64(value: EvmU256) -> QuoteResult<u64> {
    if value > EvmU256::from(u64::MAX) {
        return Err(QuoteError::InvalidSourceData(format!(
            "timestamp out of range: {}",
            value
        )));
    }
    Ok(value.as_u64())
}

pub struct EvmToken {
    contract: Erc20Metadata<Client>,
}

impl EvmToken {
    pub fn new(address: Address, provider: Arc<Client>) -> Self {
        Self {
            contract: Erc20Metadata::new(address, provider),
        }
    }
}

#[async_trait::async_trait]
impl TokenHandle for EvmToken {
    async fn decimals(&self) -> QuoteResult<u8> {
        Ok(self.contract.decimals().call().await?)
    }
}

pub struct EvmFeed {
    contract: AggregatorV3<Client>,
}

impl EvmFeed {
    pub fn new(address: Address, provider: Arc<Client>) -> Self {
        Self {
            contract: AggregatorV3::new(address, provider),
        }
    }
}

#[async_trait::async_trait]
impl OracleHandle for EvmFeed {
    async fn latest_round(&self) -> QuoteResult<RoundData> {
        let (round_id, answer, started_at, updated_at, _answered_in_round) =
            self.contract.latest_round_data().call().await?;

        Ok(RoundData {
            round_id,
            answer: answer_to_i128(answer)?,
            started_at: timestamp_to_u64(started_at)?,
            updated_at: timestamp_to_u64(updated_at)?,
        })
    }
}

pub struct EvmPair {
    contract: JoePair<Client>,
    provider: Arc<Client>,
}

impl EvmPair {
    pub fn new(address: Address, provider: Arc<Client>) -> Self {
        Self {
            contract: JoePair::new(address, provider.clone()),
            provider,
        }
    }
}

#[async_trait::async_trait]
impl ConstantProductHandle for EvmPair {
    async fn tokens(&self) -> QuoteResult<(Box<dyn TokenHandle>, Box<dyn TokenHandle>)> {
        let (call_0, call_1) = (self.contract.token_0(), self.contract.token_1());
        let (token_0, token_1) = tokio::try_join!(call_0.call(), call_1.call())?;

        Ok((
            Box::new(EvmToken::new(token_0, self.provider.clone())),
            Box::new(EvmToken::new(token_1, self.provider.clone())),
        ))
    }

    async fn reserves(&self) -> QuoteResult<Reserves> {
        let (reserve0, reserve1, timestamp) = self.contract.get_reserves().call().await?;

        Ok(Reserves {
            reserve0: U256::from(reserve0),
            reserve1: U256::from(reserve1),
            timestamp: u64::from(timestamp),
        })
    }
}

pub struct EvmLbPair {
    contract: LbPair<Client>,
    provider: Arc<Client>,
}

impl EvmLbPair {
    pub fn new(address: Address, provider: Arc<Client>) -> Self {
        Self {
            contract: LbPair::new(address, provider.clone()),
            provider,
        }
    }
}

#[async_trait::async_trait]
impl LiquidityBinHandle for EvmLbPair {
    async fn tokens(&self) -> QuoteResult<(Box<dyn TokenHandle>, Box<dyn TokenHandle>)> {
        let (call_x, call_y) = (self.contract.get_token_x(), self.contract.get_token_y());
        let (token_x, token_y) = tokio::try_join!(call_x.call(), call_y.call())?;

        Ok((
            Box::new(EvmToken::new(token_x, self.provider.clone())),
            Box::new(EvmToken::new(token_y, self.provider.clone())),
        ))
    }

    async fn swap_out(&self, amount_in: U256, swap_for_y: bool) -> QuoteResult<SwapOut> {
        let (amount_in_left, amount_out, _fee) = self
            .contract
            .get_swap_out(to_u128(amount_in)?, swap_for_y)
            .call()
            .await?;

        Ok(SwapOut {
            amount_in_left: U256::from(amount_in_left),
            amount_out: U256::from(amount_out),
        })
    }

    async fn swap_in(&self, amount_out: U256, swap_for_y: bool) -> QuoteResult<SwapIn> {
        let (amount_in, amount_out_left, _fee) = self
            .contract
            .get_swap_in(to_u128(amount_out)?, swap_for_y)
            .call()
            .await?;

        Ok(SwapIn {
            amount_in: U256::from(amount_in),
            amount_out_left: U256::from(amount_out_left),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KNOWN_PAIRS;

    #[test]
    fn test_registry_addresses_parse() {
        for pair in KNOWN_PAIRS {
            assert!(parse_address(pair.address).is_ok(), "{}", pair.symbol);
        }
        assert!(parse_address("0x1234").is_err());
    }

    #[test]
    fn test_client_builds_sources_for_every_venue() {
        let client = ChainClient::new(&Config::default()).unwrap();

        for pair in KNOWN_PAIRS {
            let source = client.source(pair).unwrap();
            assert_eq!(source.venue(), pair.venue);
        }
    }

    #[test]
    fn test_client_rejects_invalid_url() {
        let config = Config {
            rpc_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(matches!(ChainClient::new(&config), Err(QuoteError::ConfigError(_))));
    }

    #[test]
    fn test_to_u128() {
        assert_eq!(to_u128(U256::from(u128::MAX)).unwrap(), u128::MAX);
        assert!(matches!(
            to_u128(U256::from(u128::MAX) + U256::one()),
            Err(QuoteError::ArithmeticOverflow)
        ));
    }

    #[test]
    fn test_answer_to_i128() {
        assert_eq!(answer_to_i128(I256::from(2_550_000_000i64)).unwrap(), 2_550_000_000);
        assert_eq!(answer_to_i128(I256::from(-5i64)).unwrap(), -5);
        assert_eq!(answer_to_i128(I256::from(i128::MIN)).unwrap(), i128::MIN);
        assert!(matches!(
            answer_to_i128(I256::MAX),
            Err(QuoteError::InvalidSourceData(_))
        ));
        assert!(matches!(
            answer_to_i128(I256::MIN),
            Err(QuoteError::InvalidSourceData(_))
        ));
    }

    #[test]
    fn test_timestamp_to_u64() {
        assert_eq!(timestamp_to_u64(EvmU256::from(1_700_000_000u64)).unwrap(), 1_700_000_000);
        assert!(timestamp_to_u64(EvmU256::MAX).is_err());
    }
}
