use clap::Parser;
use feed_quotes::cli::{Cli, Commands};
use feed_quotes::core::{Config, QuoteError};

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load configuration
    dotenv::dotenv().ok();
    let mut config = Config::from_env()?;

    // Parse CLI arguments
    let cli = Cli::parse();
    if let Some(rpc_url) = cli.rpc_url {
        config.rpc_url = rpc_url;
    }

    // Execute command
    match cli.command {
        Commands::Quote(args) => {
            let failures = feed_quotes::cli::commands::quote::execute(args, config).await?;
            if failures > 0 {
                std::process::exit(1);
            }
        }
        Commands::Pairs(args) => {
            feed_quotes::cli::commands::pairs::execute(args).await?;
        }
    }

    Ok(())
}
