//! Tests for config module

use news_sitemap_cli::config::ResolvedConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitemap.toml");

    let config_content = r#"
collection_id = "5f74f1c0c0ffee00beefcafe"
base_url = "https://example.org/articles/"
output_path = "out/news-sitemap.xml"
site_name = "Example Daily"
language = "de"
recency_window_hours = 72.0
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = ResolvedConfig::from_toml_file(&config_path).unwrap();

    assert_eq!(config.collection_id, "5f74f1c0c0ffee00beefcafe");
    assert_eq!(config.base_url, "https://example.org/articles/");
    assert_eq!(config.output_path, PathBuf::from("out/news-sitemap.xml"));
    assert_eq!(config.site_name, "Example Daily");
    assert_eq!(config.language, "de");
    assert_eq!(config.recency_window_hours, 72.0);
}

#[test]
fn test_config_partial() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitemap.toml");

    fs::write(&config_path, "recency_window_hours = 24.0\n").unwrap();

    let config = ResolvedConfig::from_toml_file(&config_path).unwrap();

    // Overridden value applies
    assert_eq!(config.recency_window_hours, 24.0);
    // Everything else keeps the built-in defaults
    assert_eq!(config.api_base_url, "https://api.webflow.com");
    assert_eq!(config.collection_id, "677c5483872e84e4fa358f56");
    assert_eq!(config.output_path, PathBuf::from("news-sitemap.xml"));
}

#[test]
fn test_config_defaults() {
    let config = ResolvedConfig::default();

    assert_eq!(config.base_url, "https://www.freeway66.com/news/");
    assert_eq!(config.site_name, "Freeway66");
    assert_eq!(config.language, "en");
    assert_eq!(config.recency_window_hours, 48.0);
}

#[test]
fn test_config_unknown_key_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitemap.toml");

    fs::write(&config_path, "window_hours = 24.0\n").unwrap();

    assert!(ResolvedConfig::from_toml_file(&config_path).is_err());
}

#[test]
fn test_config_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitemap.toml");

    fs::write(&config_path, "[publication\nsite_name = \"Broken\"\n").unwrap();

    assert!(ResolvedConfig::from_toml_file(&config_path).is_err());
}

#[test]
fn test_config_negative_window_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("sitemap.toml");

    fs::write(&config_path, "recency_window_hours = -1.0\n").unwrap();

    assert!(ResolvedConfig::from_toml_file(&config_path).is_err());
}
