use crate::cli::{display::QuoteDisplay, PairsArgs};
use crate::core::{pairs_by_venue, QuoteResult};
use colored::*;
use log::info;

pub async fn execute(args: PairsArgs) -> QuoteResult<()> {
    let pairs = pairs_by_venue(args.venue);

    info!("Listing {} known pairs", pairs.len());

    if pairs.is_empty() {
        println!("{}", "No pairs registered for this venue".red().bold());
        return Ok(());
    }

    QuoteDisplay::display_pair_list(&pairs, args.detailed);

    Ok(())
}
