use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "hardblame", version, about = "Fetch, score and rank Hardenize group reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Run the fetch and scoring pipeline once, locally
    Fetch(FetchArgs),
    /// Ping the API server
    Ping(PingArgs),
    /// Ask the API server to run the pipeline
    Hardenize(HardenizeArgs),
    /// Query stored group data through the API server
    Group(GroupArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen address, overrides apiserver.address
    #[arg(long)]
    pub address: Option<String>,

    /// SQLite database path, overrides db.file
    #[arg(long)]
    pub db: Option<String>,

    /// Drop and recreate the tables before serving
    #[arg(long)]
    pub reset_db: bool,
}

#[derive(Args, Clone)]
pub struct FetchArgs {
    /// Fetch and score without writing blobs, rows or the report
    #[arg(long)]
    pub dry_run: bool,

    /// Directory for data-YYYY-MM-DD.json, overrides output.report_dir
    #[arg(long)]
    pub report_dir: Option<String>,

    /// Directory for raw blobs, overrides output.data_dir
    #[arg(long)]
    pub data_dir: Option<String>,
}

#[derive(Args, Clone)]
pub struct PingArgs {
    /// Number of pings to send
    #[arg(short, long, default_value = "1")]
    pub count: u64,
}

#[derive(Args, Clone)]
pub struct HardenizeArgs {
    #[command(subcommand)]
    pub command: HardenizeCommand,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HardenizeCommand {
    /// Fetch, score and store today's data
    Fetch,
    /// Fetch and score without storing anything
    Test,
}

impl HardenizeCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            HardenizeCommand::Fetch => "fetch",
            HardenizeCommand::Test => "test",
        }
    }
}

#[derive(Args, Clone)]
pub struct GroupArgs {
    #[command(subcommand)]
    pub command: GroupCommand,
}

#[derive(Subcommand, Clone)]
pub enum GroupCommand {
    /// Hosts stored per group today
    Count(GroupCountArgs),
}

#[derive(Args, Clone)]
pub struct GroupCountArgs {
    /// Print a header row
    #[arg(short = 'H', long)]
    pub headers: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate, defaults to --config
    pub path: Option<String>,
}
