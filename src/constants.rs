// Webflow Data API
pub const WEBFLOW_API_BASE: &str = "https://api.webflow.com";
pub const ACCEPT_VERSION_HEADER: &str = "accept-version";
pub const ACCEPT_VERSION: &str = "1.0.0";

// Environment variable holding the bearer credential
pub const TOKEN_ENV_VAR: &str = "WEBFLOW_TOKEN";

// Publication defaults
pub const DEFAULT_COLLECTION_ID: &str = "677c5483872e84e4fa358f56";
pub const DEFAULT_BASE_URL: &str = "https://www.freeway66.com/news/";
pub const DEFAULT_SITEMAP_FILE: &str = "news-sitemap.xml";
pub const DEFAULT_SITE_NAME: &str = "Freeway66";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_WINDOW_HOURS: f64 = 48.0;

// Fallback literals rendered when an item has no slug or name.
// These exact strings are part of the published sitemap format.
pub const FALLBACK_SLUG: &str = "undefined";
pub const FALLBACK_TITLE: &str = "Untitled Article";

// XML namespaces
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";
