//! news-sitemap-cli library
//!
//! This crate provides the core functionality for the `news-sitemap-cli` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle the stages of the sitemap pipeline:
//!
//! - [`fetcher`] - Fetches collection items from the Webflow CMS API
//! - [`filter`] - Keeps the items published within the recency window
//! - [`sitemap`] - Renders the Google News sitemap document
//! - [`writer`] - Persists the rendered document to disk
//! - [`cli`] - Command-line interface orchestrating the workflow
//! - [`config`] - Resolved configuration and TOML loading
//! - [`models`] - Data structures for collection items
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! The typical workflow fetches the collection items, filters them against a
//! single captured instant, renders the document, and writes it out:
//!
//! ```no_run
//! use chrono::Utc;
//! use news_sitemap_cli::{config::ResolvedConfig, errors::AppResult};
//! use news_sitemap_cli::{fetcher, filter, sitemap, writer};
//!
//! # async fn example() -> AppResult<()> {
//! let config = ResolvedConfig::default();
//! let client = reqwest::Client::new();
//! let token = ResolvedConfig::token_from_env();
//!
//! let items = fetcher::fetch_items(&client, &config, &token).await?;
//! let recent = filter::filter_recent_items(items, Utc::now(), config.recency_window_hours);
//! let document = sitemap::render_sitemap(&recent, &config);
//! writer::write_sitemap(&config.output_path, &document, recent.len()).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod fetcher;
pub mod filter;
pub mod models;
pub mod sitemap;
pub mod writer;
