use crate::config::ResolvedConfig;
use crate::constants::{ACCEPT_VERSION, ACCEPT_VERSION_HEADER};
use crate::errors::{AppError, AppResult};
use crate::models::Item;
use reqwest::header::AUTHORIZATION;
use tracing::debug;
use url::Url;

/// Fetches all items of the configured collection.
///
/// Performs a single authenticated GET against the collection items
/// endpoint and extracts the `items` array from the body. One request is
/// the entire contract: no timeout, no retry, no pagination.
///
/// The HTTP status is not checked. Auth and configuration failures come
/// back as a JSON body without an `items` key and are reported through
/// [`AppError::MissingItemsField`], which carries the body for diagnosis.
///
/// # Errors
///
/// Returns an error if:
/// - The endpoint URL cannot be constructed
/// - The request or body read fails
/// - The body is not JSON, or carries no `items` array
///
pub async fn fetch_items(
    client: &reqwest::Client,
    config: &ResolvedConfig,
    token: &str,
) -> AppResult<Vec<Item>> {
    let endpoint = items_endpoint(config)?;
    debug!(endpoint = %endpoint, "Requesting collection items");

    let body = client
        .get(endpoint)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(ACCEPT_VERSION_HEADER, ACCEPT_VERSION)
        .send()
        .await?
        .text()
        .await?;

    parse_items_response(&body)
}

/// Builds `<api base>/v2/collections/<collection id>/items`.
fn items_endpoint(config: &ResolvedConfig) -> AppResult<Url> {
    let raw = format!(
        "{}/v2/collections/{}/items",
        config.api_base_url.trim_end_matches('/'),
        config.collection_id
    );
    Ok(Url::parse(&raw)?)
}

/// Extracts the `items` array from a response body.
///
/// When the `items` key is absent the pretty-printed body is attached to
/// the error so the operator can see what the API actually returned.
///
/// # Errors
///
/// Returns `ParseError` if the body is not JSON or `items` is not an array
/// of items, and `MissingItemsField` if the `items` key is absent.
pub fn parse_items_response(body: &str) -> AppResult<Vec<Item>> {
    let json: serde_json::Value = serde_json::from_str(body)?;

    match json.get("items") {
        Some(items) => Ok(serde_json::from_value(items.clone())?),
        None => Err(AppError::MissingItemsField {
            body: serde_json::to_string_pretty(&json).unwrap_or_else(|_| body.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{items_endpoint, parse_items_response};
    use crate::config::ResolvedConfig;
    use crate::errors::AppError;

    #[test]
    fn test_items_endpoint_default_config() {
        let config = ResolvedConfig::default();
        let url = items_endpoint(&config).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.webflow.com/v2/collections/677c5483872e84e4fa358f56/items"
        );
    }

    #[test]
    fn test_items_endpoint_trims_trailing_slash() {
        let config = ResolvedConfig {
            api_base_url: "https://api.webflow.com/".to_string(),
            collection_id: "abc".to_string(),
            ..ResolvedConfig::default()
        };

        let url = items_endpoint(&config).unwrap();
        assert_eq!(url.as_str(), "https://api.webflow.com/v2/collections/abc/items");
    }

    #[test]
    fn test_items_endpoint_invalid_base_errors() {
        let config = ResolvedConfig {
            api_base_url: "not a url".to_string(),
            ..ResolvedConfig::default()
        };

        assert!(matches!(
            items_endpoint(&config).unwrap_err(),
            AppError::UrlError(_)
        ));
    }

    #[test]
    fn test_parse_items_response_basic() {
        let body = r#"{
            "items": [
                {"id": "1", "lastPublished": "2025-06-09T10:30:00Z",
                 "fieldData": {"slug": "first", "name": "First"}},
                {"id": "2", "fieldData": {"slug": "second"}}
            ],
            "pagination": {"limit": 100, "offset": 0, "total": 2}
        }"#;

        let items = parse_items_response(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].slug_or_default(), "first");
        assert_eq!(items[1].title_or_default(), "Untitled Article");
    }

    #[test]
    fn test_parse_items_response_empty_array() {
        let items = parse_items_response(r#"{"items": []}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_items_response_missing_items_keeps_body() {
        let body = r#"{"error": "unauthorized"}"#;

        let result = parse_items_response(body);
        match result.unwrap_err() {
            AppError::MissingItemsField { body } => {
                assert!(body.contains("unauthorized"));
                // Pretty-printed for the operator dump
                assert!(body.contains('\n'));
            }
            _ => panic!("Expected MissingItemsField"),
        }
    }

    #[test]
    fn test_parse_items_response_not_json() {
        let result = parse_items_response("<html>502 Bad Gateway</html>");
        assert!(matches!(result.unwrap_err(), AppError::ParseError(_)));
    }

    #[test]
    fn test_parse_items_response_items_not_an_array() {
        let result = parse_items_response(r#"{"items": "oops"}"#);
        assert!(matches!(result.unwrap_err(), AppError::ParseError(_)));
    }
}
