//! HTTP server exposing the catalog as JSON and the sitemap as XML

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use indexmap::IndexMap;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::{ContentEntry, ContentType, MarkdownRenderer};
use crate::error::CatalogError;
use crate::{sitemap, Site};

/// Server state
struct ServerState {
    site: Site,
    renderer: MarkdownRenderer,
}

/// Error body returned as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound { .. } => Self::NotFound(e.to_string()),
            CatalogError::Io { .. } => {
                tracing::error!("{}", e);
                Self::Internal(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound(m) | Self::Internal(m) => m,
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Public site metadata
#[derive(Debug, Serialize)]
pub struct SiteInfo {
    pub name: String,
    pub url: String,
    pub description: String,
    pub author: String,
    pub blurb: Vec<String>,
    pub links: IndexMap<String, String>,
}

/// A single entry with its rendered body
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    #[serde(flatten)]
    pub entry: ContentEntry,
    pub html: String,
}

/// Build the application router
pub fn router(site: Site) -> Router {
    let renderer = site.renderer();
    let state = Arc::new(ServerState { site, renderer });

    Router::new()
        .route("/api/site", get(site_handler))
        .route("/api/:kind", get(list_handler))
        .route("/api/:kind/:id", get(entry_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = router(site.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn parse_kind(kind: &str) -> Result<ContentType, ApiError> {
    kind.parse::<ContentType>().map_err(ApiError::NotFound)
}

async fn site_handler(State(state): State<Arc<ServerState>>) -> Json<SiteInfo> {
    let config = &state.site.config;
    Json(SiteInfo {
        name: config.name.clone(),
        url: config.url.clone(),
        description: config.description.clone(),
        author: config.author.clone(),
        blurb: config.blurb.clone(),
        links: config.links.clone(),
    })
}

async fn list_handler(
    State(state): State<Arc<ServerState>>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<ContentEntry>>, ApiError> {
    let content_type = parse_kind(&kind)?;
    let entries = state.site.catalog().list_entries(content_type)?;
    Ok(Json(entries))
}

async fn entry_handler(
    State(state): State<Arc<ServerState>>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<EntryResponse>, ApiError> {
    let content_type = parse_kind(&kind)?;
    let entry = state.site.catalog().load_entry(content_type, &id)?;
    let html = state
        .renderer
        .render(&entry.body)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(EntryResponse { entry, html }))
}

async fn sitemap_handler(State(state): State<Arc<ServerState>>) -> Result<Response, ApiError> {
    let urls = sitemap::build(&state.site, chrono::Utc::now())?;
    let xml = sitemap::render_xml(&urls);
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml).into_response())
}

async fn fallback_handler() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
