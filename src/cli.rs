use crate::config::ResolvedConfig;
use crate::errors::{AppError, AppResult};
use crate::{fetcher, filter, sitemap, writer};
use chrono::Utc;
use clap::{Arg, Command};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and executes the sitemap workflow.
///
/// This function handles two subcommands:
/// - `run`: Built-in defaults with optional flag overrides
/// - `toml`: Run using a TOML configuration file
///
/// Both subcommands execute the same workflow:
/// 1. Fetches the collection items from the CMS API
/// 2. Filters items published within the recency window
/// 3. Renders the Google News sitemap document
/// 4. Writes the document to the output path
///
/// # Returns
///
/// Returns `Ok(())` if all operations complete successfully. Returns an
/// error if:
/// - Configuration is invalid
/// - The network request fails
/// - The API response carries no `items` array
/// - The file write fails
///
pub async fn cli() -> AppResult<()> {
    let cmd = Command::new("news-sitemap-cli")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("run")
                .about("Fetch collection items and write the news sitemap")
                .after_help("Uses the built-in publication defaults.\nExample:\n  news-sitemap-cli run -w 48 -o news-sitemap.xml")
                .arg(
                    Arg::new("collection_id")
                        .short('c')
                        .long("collection-id")
                        .help("Collection to fetch items from")
                        .action(clap::ArgAction::Set),
                )
                .arg(
                    Arg::new("base_url")
                        .short('b')
                        .long("base-url")
                        .help("Public URL prefix that article slugs are appended to")
                        .action(clap::ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Path of the rendered sitemap file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(clap::ArgAction::Set),
                )
                .arg(
                    Arg::new("window_hours")
                        .short('w')
                        .long("window-hours")
                        .help("Sliding recency window in hours")
                        .value_parser(clap::value_parser!(f64))
                        .action(clap::ArgAction::Set),
                )
                .arg(
                    Arg::new("site_name")
                        .long("site-name")
                        .help("Publication name reported in the news block")
                        .action(clap::ArgAction::Set),
                )
                .arg(
                    Arg::new("language")
                        .long("language")
                        .help("Publication language reported in the news block")
                        .action(clap::ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        );

    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("run", sub)) => {
            let mut config = ResolvedConfig::default();
            if let Some(id) = sub.get_one::<String>("collection_id") {
                config.collection_id = id.clone();
            }
            if let Some(base_url) = sub.get_one::<String>("base_url") {
                config.base_url = base_url.clone();
            }
            if let Some(output) = sub.get_one::<PathBuf>("output") {
                config.output_path = output.clone();
            }
            if let Some(&window) = sub.get_one::<f64>("window_hours") {
                config.recency_window_hours = window;
            }
            if let Some(site_name) = sub.get_one::<String>("site_name") {
                config.site_name = site_name.clone();
            }
            if let Some(language) = sub.get_one::<String>("language") {
                config.language = language.clone();
            }
            config.validate()?;

            run_workflow(&config).await?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .expect("config is required");

            let config = ResolvedConfig::from_toml_file(config_path)?;
            run_workflow(&config).await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

/// Executes the four-stage pipeline: fetch, filter, render, write.
pub async fn run_workflow(config: &ResolvedConfig) -> AppResult<()> {
    let started = Instant::now();
    print_run_info(config);

    let client = reqwest::Client::new();
    let token = ResolvedConfig::token_from_env();
    let items = fetcher::fetch_items(&client, config, &token).await?;
    info!(items_fetched = items.len(), "Collection items fetched");

    // One instant for the whole batch; every item ages against the same "now"
    let now = Utc::now();
    let recent = filter::filter_recent_items(items, now, config.recency_window_hours);
    info!(
        items_recent = recent.len(),
        window_hours = config.recency_window_hours,
        "Recency filter applied"
    );

    let document = sitemap::render_sitemap(&recent, config);
    writer::write_sitemap(&config.output_path, &document, recent.len()).await?;

    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "All operations completed successfully"
    );

    Ok(())
}

fn print_run_info(config: &ResolvedConfig) {
    info!(
        collection_id = %config.collection_id,
        output = %config.output_path.display(),
        window_hours = config.recency_window_hours,
        "Starting sitemap generation"
    );
}
