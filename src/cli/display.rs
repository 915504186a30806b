use crate::core::{PairInfo, Quote, QuoteError, Venue};
use crate::utils::{flipped_symbol, format_price};
use chrono::{DateTime, Utc};
use colored::*;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use serde::Serialize;

/// Which parts of a quote line to render.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub precision: usize,
    pub bid: bool,
    pub ask: bool,
    pub date: bool,
    pub time: bool,
}

/// Serialized form of a quote for `--json`.
#[derive(Debug, Serialize)]
pub struct QuoteReport {
    pub symbol: String,
    pub venue: Venue,
    pub amount: Decimal,
    pub flip: bool,
    #[serde(flatten)]
    pub quote: Quote,
}

impl QuoteReport {
    pub fn new(pair: &PairInfo, amount: Decimal, flip: bool, quote: Quote) -> Self {
        Self {
            symbol: flipped_symbol(pair.symbol, flip),
            venue: pair.venue,
            amount,
            flip,
            quote,
        }
    }
}

/// `SYMBOL MID [ BID : ASK ] @ DATE TIME`, with optional parts left out.
/// Quotes without a timestamp are stamped with `now`.
pub fn render_quote_line(
    symbol: &str,
    quote: &Quote,
    flip: bool,
    options: &DisplayOptions,
    now: DateTime<Utc>,
) -> String {
    let mut line = format!(
        "{} {}",
        flipped_symbol(symbol, flip),
        format_price(quote.mid, options.precision)
    );

    match (options.bid, options.ask) {
        (true, true) => line.push_str(&format!(
            " [ {} : {} ]",
            format_price(quote.bid, options.precision),
            format_price(quote.ask, options.precision)
        )),
        (true, false) => line.push_str(&format!(
            " [ {} : ]",
            format_price(quote.bid, options.precision)
        )),
        (false, true) => line.push_str(&format!(
            " [ : {} ]",
            format_price(quote.ask, options.precision)
        )),
        (false, false) => {}
    }

    if options.date || options.time {
        let stamp = quote.timestamp.unwrap_or(now);
        line.push_str(" @");
        if options.date {
            line.push_str(&format!(" {}", stamp.format("%Y-%m-%d")));
        }
        if options.time {
            line.push_str(&format!(" {}", stamp.format("%H:%M:%S%.3fZ")));
        }
    }

    line
}

/// Display helper for quotes and the pair registry
pub struct QuoteDisplay;

impl QuoteDisplay {
    pub fn display_quote(symbol: &str, quote: &Quote, flip: bool, options: &DisplayOptions) {
        println!("{}", render_quote_line(symbol, quote, flip, options, Utc::now()));
    }

    pub fn display_report(report: &QuoteReport) -> Result<(), QuoteError> {
        println!("{}", serde_json::to_string(report)?);
        Ok(())
    }

    pub fn display_error(symbol: &str, err: &QuoteError) {
        let message = format!("{}: {}", symbol, err);
        if err.is_liquidity() {
            eprintln!("{} {}", style("!").yellow(), message.yellow());
        } else {
            eprintln!("{} {}", style("✗").red(), message.red());
        }
    }

    pub fn display_pair_list(pairs: &[&PairInfo], detailed: bool) {
        println!("\n{}", style("Known Pairs").bold().underlined());

        for (i, pair) in pairs.iter().enumerate() {
            println!(
                "{}. {} {}",
                i + 1,
                venue_label(pair.venue).bold(),
                pair.symbol
            );

            if detailed {
                println!("   Address: {}", style(pair.address).dim());
            }
        }
    }

    /// Create a progress bar for operations
    pub fn create_progress_bar(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }
}

fn venue_label(venue: Venue) -> ColoredString {
    let label = format!("{:<16}", venue.to_string());
    match venue {
        Venue::Oracle => label.green(),
        Venue::ConstantProduct => label.blue(),
        Venue::LiquidityBin => label.yellow(),
    }
}
