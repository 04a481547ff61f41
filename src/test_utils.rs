use crate::router::create_router;
use crate::schemas::AppState;
use crate::upstream::PredictionClient;
use axum::Router;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is determined by the RUST_LOG environment variable,
/// defaulting to WARN if not set.
///
/// # Returns
///
/// A guard that will clean up the subscriber when dropped.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Serve `router` on an ephemeral local port and return its `/predict` URL.
///
/// Used both for the stand-in model service and for the relay itself.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind upstream listener");
    let addr = listener.local_addr().expect("Failed to read upstream address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Upstream server failed");
    });

    format!("http://{}/predict", addr)
}

/// A URL nothing listens on.
pub async fn unreachable_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().expect("Failed to read throwaway address");
    drop(listener);

    format!("http://{}/predict", addr)
}

/// Create AppState for testing
pub fn setup_test_app_state(upstream_url: &str, static_dir: PathBuf) -> AppState {
    let upstream = PredictionClient::new(upstream_url, Duration::from_secs(5))
        .expect("Failed to build upstream client");

    AppState {
        upstream,
        static_dir,
    }
}

/// Create axum app for testing, with no static files
pub fn setup_test_app(upstream_url: &str) -> Router {
    let state = setup_test_app_state(upstream_url, PathBuf::from("does-not-exist"));
    create_router(state)
}
