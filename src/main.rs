//! Wordle Auth CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wordle_auth::cli::{Cli, Commands};
use wordle_auth::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_ref() {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => wordle_auth::cli::handle_error(err, cli.json),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }

    let result = match cli.command {
        Commands::Answer => wordle_auth::cli::commands::answer::execute(&config, cli.json).await,
        Commands::Login { candidate } => {
            wordle_auth::cli::commands::login::execute(&config, candidate, cli.json).await
        }
    };

    if let Err(err) = result {
        wordle_auth::cli::handle_error(err, cli.json);
    }
}
