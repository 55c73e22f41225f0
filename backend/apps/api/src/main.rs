//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use accounts::middleware::{AccountsMiddlewareState, resolve_actor};
use accounts::{AccountsConfig, OrphanedNoticePolicy, PgAccountsRepository, auth_router, users_router};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use base64::Engine;
use base64::engine::general_purpose;
use notices::{PgNoticeRepository, notice_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,accounts=info,notices=info,tower_http=info".into()),
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

    // Accounts configuration
    let accounts_config = build_accounts_config()?;

    let accounts_repo = PgAccountsRepository::new(pool.clone());
    let notice_repo = PgNoticeRepository::new(pool.clone());

    // Middleware state for resolving bearer tokens on notice routes
    let mw_state = AccountsMiddlewareState {
        repo: Arc::new(accounts_repo.clone()),
        config: Arc::new(accounts_config.clone()),
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
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
        ]));

    // Build router
    let app = Router::new()
        .nest(
            "/auth",
            auth_router(accounts_repo.clone(), accounts_config.clone()),
        )
        .nest(
            "/users",
            users_router(accounts_repo.clone(), accounts_config.clone()),
        )
        .nest(
            "/notices",
            notice_router(notice_repo).layer(middleware::from_fn_with_state(
                mw_state,
                resolve_actor::<PgAccountsRepository>,
            )),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Assemble the accounts configuration from the environment
///
/// Debug builds fall back to a random token secret; production must
/// supply TOKEN_SECRET (base64, 32 bytes).
fn build_accounts_config() -> anyhow::Result<AccountsConfig> {
    let mut config = if cfg!(debug_assertions) {
        AccountsConfig::with_random_secret()
    } else {
        let secret_b64 =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "TOKEN_SECRET must decode to exactly 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AccountsConfig {
            token_secret: secret,
            ..AccountsConfig::default()
        }
    };

    if let Ok(pepper_b64) = env::var("PASSWORD_PEPPER") {
        let pepper = Engine::decode(&general_purpose::STANDARD, &pepper_b64)?;
        config.password_pepper = Some(pepper);
    }

    if let Ok(policy) = env::var("ORPHANED_NOTICES") {
        config.orphaned_notices = OrphanedNoticePolicy::from_str_opt(&policy)
            .ok_or_else(|| anyhow::anyhow!("ORPHANED_NOTICES must be 'retain' or 'delete'"))?;
    }

    Ok(config)
}
