use crate::chain::ChainClient;
use crate::cli::display::{DisplayOptions, QuoteDisplay, QuoteReport};
use crate::cli::QuoteArgs;
use crate::core::{find_pair, Config, PairInfo, Quote, QuoteError, QuoteResult, MAX_PRECISION};
use crate::quotes::QuoteEngine;
use log::{info, warn};
use std::time::Duration;

/// Quotes every requested pair in turn. Returns the number of pairs that failed.
pub async fn execute(args: QuoteArgs, mut config: Config) -> QuoteResult<usize> {
    if let Some(amount) = args.amount {
        config.default_amount = amount;
    }
    if let Some(precision) = args.precision {
        if precision > MAX_PRECISION {
            return Err(QuoteError::ConfigError(format!(
                "Precision cannot exceed {} digits",
                MAX_PRECISION
            )));
        }
        config.default_precision = precision;
    }
    config.validate()?;

    let client = ChainClient::new(&config)?;
    let engine = QuoteEngine::new();
    let options = DisplayOptions {
        precision: config.default_precision,
        bid: args.bid,
        ask: args.ask,
        date: args.date,
        time: args.time,
    };
    let requested_flip = args.flip || config.default_flip;

    info!(
        "Quoting {} pair(s) for amount {} via {}",
        args.pairs.len(),
        config.default_amount,
        config.rpc_url
    );

    let mut failures = 0;
    for symbol in &args.pairs {
        let pb = QuoteDisplay::create_progress_bar(&format!("Quoting {}...", symbol));
        let result = quote_pair(&client, &engine, &config, symbol, requested_flip).await;
        pb.finish_and_clear();

        match result {
            Ok((pair, flip, quote)) => {
                if args.json {
                    let report = QuoteReport::new(pair, config.default_amount, flip, quote);
                    QuoteDisplay::display_report(&report)?;
                } else {
                    QuoteDisplay::display_quote(pair.symbol, &quote, flip, &options);
                }
            }
            Err(err) => {
                warn!("{} failed: {}", symbol, err);
                QuoteDisplay::display_error(symbol, &err);
                failures += 1;
            }
        }
    }

    Ok(failures)
}

/// Asking for a reversed symbol inverts whatever flip was requested.
fn effective_flip(requested: bool, reversed: bool) -> bool {
    requested ^ reversed
}

async fn quote_pair(
    client: &ChainClient,
    engine: &QuoteEngine,
    config: &Config,
    symbol: &str,
    requested_flip: bool,
) -> QuoteResult<(&'static PairInfo, bool, Quote)> {
    let lookup = find_pair(symbol)?;
    let flip = effective_flip(requested_flip, lookup.reversed);
    let source = client.source(lookup.pair)?;

    let quote = with_timeout(
        config.timeout_secs,
        engine.calculate_quote(config.default_amount, &source, flip),
    )
    .await?;

    Ok((lookup.pair, flip, quote))
}

async fn with_timeout<T>(
    secs: u64,
    fut: impl std::future::Future<Output = QuoteResult<T>>,
) -> QuoteResult<T> {
    tokio::time::timeout(Duration::from_secs(secs), fut)
        .await
        .map_err(|_| QuoteError::Timeout(secs))?
}
