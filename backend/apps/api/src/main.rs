//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors use the
//! unified `kernel::error::AppError` shape.

use auth::{AuthConfig, PgAuthRepository, auth_router};
use axum::{
    Json, Router, http,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use chrono::{SecondsFormat, Utc};
use notes::{NotesConfig, PgNotesRepository, notes_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,notes=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token secret: one server-held secret signs (auth) and verifies
    // (notes) bearer tokens
    let token_secret = if cfg!(debug_assertions) {
        AuthConfig::with_random_secret().token_secret
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "TOKEN_SECRET must decode to exactly 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        secret
    };

    let auth_config = AuthConfig {
        token_secret,
        ..Default::default()
    };
    let notes_config = NotesConfig { token_secret };

    let auth_repo = PgAuthRepository::new(pool.clone());
    let notes_repo = PgNotesRepository::new(pool.clone());

    // CORS configuration: "*" opens the API up for development; anything
    // else is treated as a comma-separated origin allowlist
    let cors_origins = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

    let cors = if cors_origins.trim() == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ]))
            .allow_headers(AllowHeaders::list([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ]))
    } else {
        let allowed_origins: Vec<http::HeaderValue> = cors_origins
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(allowed_origins)
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ]))
            .allow_headers(AllowHeaders::list([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ]))
            .allow_credentials(true)
    };

    // Build router
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/", get(api_info))
        .nest("/api/auth", auth_router(auth_repo, auth_config))
        .nest("/api/notes", notes_router(notes_repo, notes_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::custom(catch_panic));

    // Start server
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()?;

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Convert a panicking handler into the standard 500 shape instead of
/// tearing down the connection or leaking a backtrace
fn catch_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "<unknown>".to_string()
    };

    tracing::error!(message = %detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Internal server error" })),
    )
        .into_response()
}

/// GET /api/health
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Server is running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }))
}

/// GET /api/
async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Notes API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": [
                "POST /api/auth/register",
                "POST /api/auth/login",
                "POST /api/auth/forgot-password",
                "POST /api/auth/verify-reset-token",
                "POST /api/auth/reset-password",
                "POST /api/auth/unlink-device"
            ],
            "notes": [
                "GET /api/notes",
                "GET /api/notes/{id}",
                "POST /api/notes",
                "PUT /api/notes/{id}",
                "DELETE /api/notes/{id}"
            ]
        },
    }))
}
