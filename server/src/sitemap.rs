use serde::Deserialize;

const VEHICLES_JSON: &str = include_str!("../../data/vehicles.json");

/// Static routes listed ahead of the per-vehicle detail pages.
const STATIC_PATHS: [&str; 2] = ["/", "/collection"];

#[derive(Deserialize)]
struct VehicleSlug {
    slug: String,
}

/// Slugs of every vehicle in the shared dataset, in dataset order.
pub fn vehicle_slugs() -> Vec<String> {
    parse_slugs(VEHICLES_JSON)
}

fn parse_slugs(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<VehicleSlug>>(raw) {
        Ok(records) => records.into_iter().map(|r| r.slug).collect(),
        Err(e) => {
            tracing::error!("Failed to parse vehicle dataset: {}", e);
            Vec::new()
        }
    }
}

/// Escapes element text. Quotes only matter inside attributes.
fn escape_xml_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_sitemap(site_url: &str, slugs: &[String]) -> String {
    let detail_paths = slugs.iter().map(|slug| format!("/collection/{}", slug));
    let urls: String = STATIC_PATHS
        .iter()
        .map(|p| p.to_string())
        .chain(detail_paths)
        .map(|path| {
            format!(
                "  <url><loc>{}</loc></url>\n",
                escape_xml_text(&format!("{}{}", site_url, path))
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
         {}</urlset>\n",
        urls
    )
}

pub fn render_robots(site_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n", site_url)
}
