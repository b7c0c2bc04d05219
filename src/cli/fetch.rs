use console::style;
use tracing::info;

use crate::cli::commands::FetchArgs;
use crate::config::HardblameConfig;
use crate::db::Database;
use crate::errors::HardblameError;
use crate::hardenize::HardenizeClient;
use crate::pipeline::{Pipeline, RunOptions};
use crate::reporting::formatter::format_ranking_summary;

pub async fn handle_fetch(config: &HardblameConfig, args: FetchArgs, quiet: bool) -> Result<(), HardblameError> {
    let settings = config.hardenize_settings()?;
    let mut options = RunOptions::from_config(config, args.dry_run);
    if let Some(dir) = args.report_dir {
        options.report_dir = dir.into();
    }
    if let Some(dir) = args.data_dir {
        options.data_dir = dir.into();
    }

    let db = if args.dry_run {
        None
    } else {
        Some(Database::new(&config.db_file())?)
    };

    let client = HardenizeClient::login(settings).await?;
    let summary = Pipeline::new(&client, db.as_ref(), options).run().await?;
    info!(groups = summary.groups.len(), hosts = summary.host_count(), "Fetch finished");

    if quiet {
        return Ok(());
    }
    println!("{}", format_ranking_summary(&summary.groups));
    match summary.report_path {
        Some(path) => println!("{} {}", style("Report written to").green(), path.display()),
        None => println!("{}", style("Dry run, nothing written").yellow()),
    }
    Ok(())
}
