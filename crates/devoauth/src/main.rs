mod app;
mod config;
mod extractors;
mod handlers;
mod keys;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use devoauth_core::oidc::{IdentityFixture, Issuer};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, keys::KeyMaterial, state::AppState};

/// devoauth - A fixed-identity OpenID Connect provider for local development
#[derive(Parser, Debug)]
#[command(name = "devoauth")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "127.0.0.1", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "6644", env = "PORT")]
    port: u16,

    /// Issuer URL advertised in discovery and signed into ID tokens
    /// (default: http://localhost:<port>/)
    #[arg(long, env = "DEVOAUTH2_ISSUER")]
    issuer: Option<Issuer>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devoauth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let issuer = match cli.issuer {
        Some(issuer) => issuer,
        None => format!("http://localhost:{}/", cli.port)
            .parse::<Issuer>()
            .context("failed to build default issuer URL")?,
    };

    // Key material must load before anything is served.
    let keys = KeyMaterial::load(&config.key_source).context("failed to load signing key")?;
    let identity = IdentityFixture::demo(config.groups);

    tracing::info!(
        issuer = %issuer,
        sub = %identity.subject,
        groups = ?identity.groups,
        "Starting OpenID provider"
    );

    let app = create_app(AppState::new(issuer, identity, keys));

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
