use news_sitemap_cli::cli;
use news_sitemap_cli::errors::{self, AppError, AppResult};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // .env is optional; scheduled environments inject the token directly
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        // Single top-level error boundary for the whole pipeline
        error!(error = %e, "Sitemap generation failed");
        if let AppError::MissingItemsField { body } = &e {
            // Dump the raw response so the operator can see what came back
            println!("{body}");
        }
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let rt =
        tokio::runtime::Runtime::new().map_err(|e| errors::AppError::IoError(e.to_string()))?;
    rt.block_on(cli::cli())
}
