//! igview-web - local viewer for an Instagram data export
//!
//! Serves one read-only page per dataset of an unpacked export folder.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use igview_common::config::{default_config_path, CompiledDefaults, ExportRootResolver, TomlConfig};
use igview_common::geo::{DisabledGeoResolver, GeoResolver};
use igview_common::reader::{DatasetReader, ExportLayout};
use igview_web::services::IpInfoClient;
use igview_web::{build_router, AppState};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for igview-web
#[derive(Parser, Debug)]
#[command(name = "igview-web")]
#[command(about = "Local viewer for an Instagram data export")]
#[command(version)]
struct Args {
    /// Root folder of the unpacked export
    #[arg(short, long)]
    export_root: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Path to the TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of static assets served under /static
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let defaults = CompiledDefaults::for_current_platform();

    let config_path = args.config.clone().or_else(default_config_path);
    let (toml_config, config_error) = match config_path.as_deref().map(TomlConfig::load) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let log_level = toml_config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|| defaults.log_level.clone());

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{log_level},tower_http=info").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting igview-web v{}", env!("CARGO_PKG_VERSION"));

    match (&config_path, &toml_config, &config_error) {
        (_, _, Some(e)) => warn!(error = %e, "Failed to load config file, using defaults"),
        (Some(path), None, None) => {
            warn!(path = %path.display(), "Config file not found, using defaults")
        }
        (Some(path), Some(_), None) => info!(path = %path.display(), "Loaded config file"),
        (None, _, None) => warn!("No config directory available, using defaults"),
    }

    let export_root = ExportRootResolver::new(args.export_root)
        .with_toml(toml_config.as_ref())
        .resolve();
    let reader = DatasetReader::new(ExportLayout::resolve(&export_root));

    let geo_config = toml_config
        .as_ref()
        .map(|c| c.geolocation.clone())
        .unwrap_or_default();
    let geo: Arc<dyn GeoResolver> = if geo_config.enabled {
        match IpInfoClient::new(&geo_config) {
            Ok(client) => {
                info!(base_url = %geo_config.base_url, "IP geolocation enabled");
                Arc::new(client)
            }
            Err(e) => {
                warn!(error = %e, "Failed to create geolocation client, locations disabled");
                Arc::new(DisabledGeoResolver)
            }
        }
    } else {
        info!("IP geolocation disabled");
        Arc::new(DisabledGeoResolver)
    };

    let static_dir = args
        .static_dir
        .or_else(|| toml_config.as_ref().and_then(|c| c.static_dir.clone()))
        .unwrap_or(defaults.static_dir);
    let port = args
        .port
        .or_else(|| toml_config.as_ref().and_then(|c| c.port))
        .unwrap_or(defaults.port);

    let state = AppState::new(reader, geo, geo_config.timeout());
    let app = build_router(state, &static_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("igview-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
