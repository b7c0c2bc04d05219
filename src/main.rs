use clap::Parser;
use tracing_subscriber::EnvFilter;

use hardblame::cli::{self, Cli, Commands};
use hardblame::config;
use hardblame::errors::HardblameError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), HardblameError> {
    if let Commands::Validate(args) = &cli.command {
        let path = args.path.clone().unwrap_or_else(|| cli.config.clone());
        return cli::handle_validate(&path).await;
    }

    let config = config::parse_config(std::path::Path::new(&cli.config)).await?;
    match cli.command {
        Commands::Serve(args) => cli::serve::handle_serve(&config, args).await,
        Commands::Fetch(args) => cli::fetch::handle_fetch(&config, args, cli.quiet).await,
        Commands::Ping(args) => cli::ping::handle_ping(&config, args).await,
        Commands::Hardenize(args) => cli::hardenize::handle_hardenize(&config, args).await,
        Commands::Group(args) => cli::group::handle_group(&config, args).await,
        Commands::Validate(_) => Ok(()),
    }
}
