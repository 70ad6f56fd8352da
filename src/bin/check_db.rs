/*!
 * CLI tool to summarise per-user records in the phimkhoi MongoDB database
 *
 * Prints distinct userIds with record counts for watch history and
 * favorites, then every user document. Read-only.
 *
 * Usage: cargo run --bin check_db -- [--uri URI] [--database NAME]
 */

use anyhow::Result;
use clap::{Arg, Command};
use tracing::{error, info};

use phimkhoi_tools::{
    config::ReportConfig,
    errors::{AppError, ReportError},
    report::run_report,
    utils::logging::init_logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let matches = Command::new("check_db")
        .about("Print userId counts and users from the phimkhoi database")
        .arg(
            Arg::new("uri")
                .help("MongoDB connection string (overrides MONGODB_URI)")
                .long("uri")
                .value_name("URI"),
        )
        .arg(
            Arg::new("database")
                .help("Database name (overrides MONGODB_DATABASE)")
                .long("database")
                .short('d')
                .value_name("NAME"),
        )
        .get_matches();

    let mut config = ReportConfig::from_env();
    if let Some(uri) = matches.get_one::<String>("uri") {
        config.mongodb_uri = uri.clone();
    }
    if let Some(database) = matches.get_one::<String>("database") {
        config.database = database.clone();
    }

    info!("🔍 Reading collections from database '{}'", config.database);

    if let Err(e) = run_report(&config).await {
        if let Some(report_error) = e.downcast_ref::<ReportError>() {
            error!(
                "❌ {} ({}, category={:?})",
                report_error,
                report_error.error_code(),
                report_error.error_category()
            );
            if let Some(action) = report_error.suggested_action() {
                error!("   {}", action);
            }
        }
        return Err(e);
    }

    Ok(())
}
