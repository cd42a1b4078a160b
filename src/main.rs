use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use playlink::app::AppContext;
use playlink::cli::{commands, Cli, Commands};
use playlink::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.command.apply_overrides(&mut config);

    let ctx = AppContext::with_workers(config, cli.workers)?;

    match cli.command {
        Commands::Resolve {
            urls,
            incognito,
            json,
            ..
        } => {
            commands::resolve(&ctx, urls, incognito, json).await?;
        }
        Commands::Rules => {
            commands::list_rules(&ctx)?;
        }
    }

    Ok(())
}
