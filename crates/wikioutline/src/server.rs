use crate::fetch::{fetch_outline, FetchConfig, UpstreamOptions};
use crate::prelude::{eprintln, *};
use axum::{
    extract::{Query, State},
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use wikioutline_core::outline::render_markdown;

pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

#[derive(Debug, Clone, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "OUTLINE_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "OUTLINE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[clap(flatten)]
    pub upstream: UpstreamOptions,
}

#[derive(Debug, serde::Deserialize)]
pub struct OutlineParams {
    /// Article subject. Named `country` but any article name is accepted.
    country: Option<String>,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);
    let config = Arc::new(FetchConfig::from(&options.upstream));

    if global.verbose {
        eprintln!("Starting outline server on {addr}...");
        eprintln!("Upstream base URL: {}", config.base_url);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    info!("Listening on http://{addr}");
    if global.verbose {
        eprintln!("Outline endpoint: http://{addr}/api/outline?country=<subject>");
    }

    axum::serve(listener, router(config))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Any origin, `GET` only, any header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

pub fn router(config: Arc<FetchConfig>) -> Router {
    Router::new()
        .route("/api/outline", get(outline_handler))
        .layer(cors_layer())
        .with_state(config)
}

async fn outline_handler(
    State(config): State<Arc<FetchConfig>>,
    Query(params): Query<OutlineParams>,
) -> Result<impl IntoResponse, Error> {
    let subject = params
        .country
        .filter(|country| !country.is_empty())
        .ok_or_else(|| Error::MissingParameter("country".to_string()))?;

    info!("Building outline for {subject:?}");
    let outline = fetch_outline(&config, &subject).await?;

    Ok((
        [(header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE)],
        render_markdown(&outline),
    ))
}
