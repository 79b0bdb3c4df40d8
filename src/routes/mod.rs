//! HTTP surface: static site, résumé download, contact relay, health probe.

pub mod contact;
pub mod resume;

use axum::Router;
use axum::response::Redirect;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full router. Everything except `/healthz` lives under the
/// configured base path; when that is not the root, `/` redirects to it.
pub fn app(state: AppState) -> Router {
    let base = state.config.base_path.clone();
    let index = state.config.website_dir.join("index.html");
    let website = ServeDir::new(&state.config.website_dir).append_index_html_on_directories(true);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let site = Router::new()
        .route("/api/contact", post(contact::submit).layer(cors))
        .route("/resume.pdf", get(resume::download))
        .fallback_service(website)
        .with_state(state);

    let router = if base.is_empty() {
        site
    } else {
        let target = format!("{base}/");
        Router::new()
            .route(
                "/",
                get(move || {
                    let target = target.clone();
                    async move { Redirect::temporary(&target) }
                }),
            )
            // The nested tail never matches an empty remainder.
            .route_service(&format!("{base}/"), ServeFile::new(index))
            .nest(&base, site)
    };

    router
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
