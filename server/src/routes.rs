use crate::config::Config;
use crate::sitemap;
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Bodies rendered once at startup and shared across requests.
pub struct AppState {
    pub sitemap: String,
    pub robots: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let slugs = sitemap::vehicle_slugs();
        tracing::debug!("Sitemap covers {} vehicles", slugs.len());
        Self {
            sitemap: sitemap::render_sitemap(&config.site_url, &slugs),
            robots: sitemap::render_robots(&config.site_url),
        }
    }
}

pub fn app(config: &Config) -> Router {
    let state = Arc::new(AppState::new(config));

    // Unknown paths get the app shell with 200 and the client router decides.
    let index = config.static_dir.join("index.html");
    let static_files = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/robots.txt", get(robots_txt))
        .route("/sitemap.xml", get(sitemap_xml))
        .fallback_service(static_files)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn robots_txt(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.robots.clone(),
    )
}

async fn sitemap_xml(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        state.sitemap.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use tower::ServiceExt;
    use uuid::Uuid;

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>showcase shell</body></html>";

    struct StaticDir(PathBuf);

    impl StaticDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("showcase-static-{}", Uuid::new_v4()));
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
            std::fs::write(dir.join("app.js"), "console.log('app');").unwrap();
            Self(dir)
        }
    }

    impl Drop for StaticDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn test_app(dir: &StaticDir) -> Router {
        app(&Config {
            port: 0,
            static_dir: dir.0.clone(),
            site_url: "https://pagani.example.com".to_string(),
            sentry_dsn: None,
        })
    }

    async fn get_path(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let dir = StaticDir::new();
        let (status, headers, body) = get_path(test_app(&dir), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }

    #[tokio::test]
    async fn sitemap_lists_every_vehicle() {
        let dir = StaticDir::new();
        let (status, headers, body) = get_path(test_app(&dir), "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/xml");
        assert!(body.contains("<loc>https://pagani.example.com/collection</loc>"));
        assert!(body.contains("<loc>https://pagani.example.com/collection/zonda-r</loc>"));
        assert_eq!(body.matches("<url>").count(), 2 + 1);
    }

    #[tokio::test]
    async fn robots_references_sitemap() {
        let dir = StaticDir::new();
        let (status, _, body) = get_path(test_app(&dir), "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Sitemap: https://pagani.example.com/sitemap.xml"));
    }

    #[tokio::test]
    async fn static_assets_are_served() {
        let dir = StaticDir::new();
        let (status, headers, body) = get_path(test_app(&dir), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('app');");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let dir = StaticDir::new();
        for uri in ["/collection", "/collection/does-not-exist", "/no/such/page"] {
            let (status, _, body) = get_path(test_app(&dir), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body, INDEX_HTML, "{}", uri);
        }
    }
}
