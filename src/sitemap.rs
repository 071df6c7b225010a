use crate::config::ResolvedConfig;
use crate::constants::{NEWS_NS, SITEMAP_NS};
use crate::models::Item;

/// Renders the complete Google News sitemap document.
///
/// Entries appear in input order inside a `<urlset>` root that declares
/// the base sitemap and Google News namespaces. Zero items yield a
/// well-formed document with an empty `<urlset>` body.
///
/// The template reproduces the published format exactly, indentation
/// included; downstream consumers of the existing sitemap depend on this
/// byte layout.
pub fn render_sitemap(items: &[Item], config: &ResolvedConfig) -> String {
    let entries: Vec<String> = items.iter().map(|item| render_entry(item, config)).collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="{SITEMAP_NS}"
        xmlns:news="{NEWS_NS}">
{entries}
</urlset>"#,
        entries = entries.join("\n"),
    )
}

/// Renders one `<url>` block.
///
/// `<loc>` is the base URL with the slug appended, interpolated without
/// XML escaping; slugs are assumed URL-safe. The title rides in a CDATA
/// section so markup and special characters pass through unescaped. The
/// publication date is the verbatim `lastPublished` string.
fn render_entry(item: &Item, config: &ResolvedConfig) -> String {
    let slug = item.slug_or_default();
    let title = item.title_or_default();
    let publication_date = item.last_published.as_deref().unwrap_or_default();

    format!(
        r#"
  <url>
    <loc>{base_url}{slug}</loc>
    <news:news>
      <news:publication>
        <news:name>{site_name}</news:name>
        <news:language>{language}</news:language>
      </news:publication>
      <news:publication_date>{publication_date}</news:publication_date>
      <news:title><![CDATA[{title}]]></news:title>
    </news:news>
  </url>"#,
        base_url = config.base_url,
        site_name = config.site_name,
        language = config.language,
    )
}
