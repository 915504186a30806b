use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::core::Venue;

pub mod commands;
pub mod display;

#[derive(Parser)]
#[command(name = "feed-quotes")]
#[command(about = "Mid/bid/ask quotes from on-chain oracle feeds and AMM pools", long_about = None)]
pub struct Cli {
    /// JSON-RPC endpoint (defaults to the Avalanche C-Chain public node)
    #[arg(short = 'u', long, global = true, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote one or more known pairs
    Quote(QuoteArgs),

    /// List the known pairs
    Pairs(PairsArgs),
}

#[derive(Parser)]
pub struct QuoteArgs {
    /// Pair symbols, e.g. AVAX/USDC (QUOTE/BASE quotes the inverse)
    #[arg(required = true)]
    pub pairs: Vec<String>,

    /// Amount of the base asset to quote
    #[arg(short = 'n', long, value_parser = parse_amount)]
    pub amount: Option<Decimal>,

    /// Invert base and quote
    #[arg(short, long)]
    pub flip: bool,

    /// Fraction digits to print
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Show the bid quote
    #[arg(short, long)]
    pub bid: bool,

    /// Show the ask quote
    #[arg(short, long)]
    pub ask: bool,

    /// Show the quote date
    #[arg(short, long)]
    pub date: bool,

    /// Show the quote time
    #[arg(short, long)]
    pub time: bool,

    /// Print JSON instead of a quote line
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct PairsArgs {
    /// Filter by venue kind (oracle, constant-product, liquidity-bin)
    #[arg(long, value_parser = parse_venue)]
    pub venue: Option<Venue>,

    /// Show contract addresses
    #[arg(short, long)]
    pub detailed: bool,
}

fn parse_amount(s: &str) -> Result<Decimal, String> {
    let amount = Decimal::from_str(s).map_err(|e| format!("Invalid amount: {}", e))?;
    if amount <= Decimal::ZERO {
        return Err(format!("Amount must be positive: {}", s));
    }
    Ok(amount)
}

fn parse_venue(s: &str) -> Result<Venue, String> {
    s.parse::<Venue>()
}
