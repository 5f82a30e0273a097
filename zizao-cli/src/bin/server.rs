//! Composition server for browser hosts.
//!
//! Exposes one composer per session over a small JSON API; the browser
//! editor sends classified key names and applies the returned patch to its
//! own text buffer.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zizao_engine::CodeTable;
use zizao_im::{Composer, InputSymbol};

/// zizao composition server
#[derive(Parser, Debug)]
#[command(name = "zizao-server")]
#[command(about = "Structural input method composition server", long_about = None)]
struct Args {
    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Path to a custom code table (JSON); bundled table if omitted
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
}

#[derive(Clone)]
struct AppState {
    table: Arc<CodeTable>,
    /// Composers keyed by session id; the engine has no internal locking,
    /// so each session is serialized through this map's lock.
    sessions: Arc<RwLock<HashMap<String, Composer>>>,
}

#[derive(Debug, Deserialize)]
struct KeyRequest {
    session: String,
    /// DOM-style key code name (KeyA..KeyZ, Digit1..Digit9, Backspace,
    /// Enter, Space)
    key: String,
}

#[derive(Debug, Serialize)]
struct KeyResponse {
    /// Whether the key was consumed by the composer
    consumed: bool,
    composing_prev: String,
    composing: String,
    commit: String,
    candidates: Vec<String>,
    progress: String,
}

#[derive(Debug, Deserialize)]
struct ResetRequest {
    session: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "zizao_server=debug,zizao_im=debug,zizao_engine=debug,tower_http=debug"
    } else {
        "zizao_server=info,zizao_im=info,zizao_engine=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let table = match &args.table {
        Some(path) => CodeTable::from_json_file(path).expect("failed to load code table"),
        None => CodeTable::bundled(),
    };
    tracing::info!("code table loaded: {} entries", table.len());

    let state = AppState {
        table: Arc::new(table),
        sessions: Arc::new(RwLock::new(HashMap::new())),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/key", post(key_handler))
        .route("/api/reset", post(reset_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state);

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind server address");

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .await
        .expect("failed to run server");
}

async fn key_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<KeyResponse>, StatusCode> {
    let Some(symbol) = InputSymbol::from_key_name(&req.key) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    let mut sessions = state.sessions.write().expect("lock poisoned");
    let engine = sessions
        .entry(req.session)
        .or_insert_with(|| Composer::new(state.table.clone()));

    let result = engine.process(symbol);
    let response = KeyResponse {
        consumed: result.is_some(),
        composing_prev: result
            .as_ref()
            .map(|r| r.composing_prev.clone())
            .unwrap_or_default(),
        composing: result
            .as_ref()
            .map(|r| r.composing.clone())
            .unwrap_or_default(),
        commit: result.map(|r| r.commit).unwrap_or_default(),
        candidates: engine.current_candidates().to_vec(),
        progress: engine.progress_display(),
    };

    Ok(Json(response))
}

async fn reset_handler(
    State(state): State<AppState>,
    Json(req): Json<ResetRequest>,
) -> impl IntoResponse {
    let mut sessions = state.sessions.write().expect("lock poisoned");
    if let Some(engine) = sessions.get_mut(&req.session) {
        engine.reset();
    }
    StatusCode::OK
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "zizao-server"
    }))
}
