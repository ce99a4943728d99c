//! geogate - IP country validation service
//!
//! This is the composition root that wires together all the components.

use geogate::adapters::inbound::{TlsConfig, ValidationServer};
use geogate::adapters::outbound::MaxMindCountryResolver;
use geogate::config::load_config;
use geogate::domain::ports::CountryResolver;
use geogate::infrastructure::{shutdown_signal, ShutdownController};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting geogate listen={} db_dir={}",
        cfg.listen_addr,
        cfg.db_dir.display()
    );

    // ===== COMPOSITION ROOT =====

    // GeoIP country resolver (MaxMind), opened once and shared
    let resolver: Arc<dyn CountryResolver> = match MaxMindCountryResolver::from_dir(&cfg.db_dir) {
        Ok(r) => {
            tracing::info!("GeoIP DB loaded from {}", cfg.db_dir.display());
            Arc::new(r)
        }
        Err(e) => {
            tracing::error!("failed to open geoip database in {}: {:?}", cfg.db_dir.display(), e);
            return Err(e);
        }
    };

    // Shutdown coordination (Ctrl+C / SIGTERM)
    let shutdown = ShutdownController::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    // Inbound HTTP adapter
    let server = ValidationServer::new(resolver, cfg.listen_addr.clone(), shutdown);

    if cfg.tls_enabled {
        let tls_config = TlsConfig::from_pem_files(&cfg.tls_cert_path, &cfg.tls_key_path)?;
        server.run_tls(tls_config).await
    } else {
        server.run().await
    }
}
