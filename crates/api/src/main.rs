use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use folio_db::store::{MemoryStore, PgStore, RecordStore, RestStore, SharedStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_api::auth::password::hash_password;
use folio_api::config::{ServerConfig, StoreConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // `folio-api hash-password <password>` prints a value for ADMIN_PASSWORD_HASH.
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [command, password] = args.as_slice() {
        if command == "hash-password" {
            match hash_password(password) {
                Ok(hash) => println!("{hash}"),
                Err(e) => {
                    eprintln!("Failed to hash password: {e}");
                    std::process::exit(1);
                }
            }
            return;
        }
    }

    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        store = config.store.backend_name(),
        "Loaded server configuration"
    );

    // --- Record store ---
    let store = connect_store(&config.store).await;

    match store.ping().await {
        Ok(()) => tracing::info!("Record store reachable"),
        Err(err) => tracing::warn!(error = %err, "Record store ping failed, starting anyway"),
    }

    // --- App state ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// `RUST_LOG` filter with a crate-level default; `LOG_FORMAT=json` switches
/// to structured output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "folio_api=debug,folio_db=debug,tower_http=debug".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Build the configured store backend. Panics if it cannot be set up.
async fn connect_store(config: &StoreConfig) -> SharedStore {
    match config {
        StoreConfig::Rest {
            url,
            api_key,
            timeout_secs,
        } => {
            let store = RestStore::new(url, api_key, Duration::from_secs(*timeout_secs))
                .expect("Failed to build record store client");
            tracing::info!(%url, "Using REST record store");
            Arc::new(store)
        }
        StoreConfig::Postgres { database_url } => {
            let pool = folio_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            folio_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgStore::new(pool))
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory record store; data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
