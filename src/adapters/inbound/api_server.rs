//! Validation API Server
//!
//! HTTP inbound adapter. Exposes the country validator on `POST /` and
//! a liveness probe on `GET /health`, in plain-HTTP or TLS mode.

use crate::adapters::inbound::tls::TlsConfig;
use crate::domain::entities::{ValidationRequest, ValidationResult};
use crate::domain::ports::CountryResolver;
use crate::domain::services::CountryValidator;
use crate::infrastructure::ShutdownController;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use hyper::body::Incoming;
use hyper::Request;
use hyper_util::rt::{TokioExecutor, TokioIo};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::Service;
use tower_http::trace::TraceLayer;

/// Liveness probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Shared request-handling state.
#[derive(Clone)]
pub struct ApiState {
    /// Country resolver, opened once at startup and shared by all requests
    pub resolver: Arc<dyn CountryResolver>,
}

/// Validation API server - inbound adapter for HTTP clients.
pub struct ValidationServer {
    state: ApiState,
    listen_addr: String,
    shutdown: ShutdownController,
}

impl ValidationServer {
    /// Create a new validation server.
    pub fn new(
        resolver: Arc<dyn CountryResolver>,
        listen_addr: String,
        shutdown: ShutdownController,
    ) -> Self {
        Self {
            state: ApiState { resolver },
            listen_addr,
            shutdown,
        }
    }

    /// Build the router. Exposed separately so tests can drive it
    /// without binding a socket.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", post(validate_handler))
            .route("/health", get(health_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the server in plain-HTTP mode until shutdown is signalled.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run(&self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("validation API listening on {}", self.listen_addr);

        let mut shutdown_rx = self.shutdown.subscribe();
        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        tracing::info!("validation API shut down gracefully");
        Ok(())
    }

    /// Run the server in TLS mode until shutdown is signalled.
    ///
    /// Accepts TCP connections, performs the rustls handshake, and
    /// serves each stream with hyper. In-flight connections finish in
    /// their own tasks after the accept loop exits.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run_tls(&self, tls_config: TlsConfig) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("validation API (TLS) listening on {}", self.listen_addr);

        let router = self.router();
        let mut shutdown_rx = self.shutdown.subscribe();

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                accepted = listener.accept() => {
                    let (stream, peer_addr) = accepted?;
                    let acceptor = tls_config.acceptor.clone();
                    let router = router.clone();

                    tokio::spawn(async move {
                        let tls_stream = match acceptor.accept(stream).await {
                            Ok(s) => s,
                            Err(e) => {
                                tracing::debug!("TLS handshake failed from {}: {:?}", peer_addr, e);
                                return;
                            }
                        };

                        let hyper_service =
                            hyper::service::service_fn(move |request: Request<Incoming>| {
                                router.clone().call(request)
                            });

                        if let Err(e) = hyper_util::server::conn::auto::Builder::new(
                            TokioExecutor::new(),
                        )
                        .serve_connection(TokioIo::new(tls_stream), hyper_service)
                        .await
                        {
                            tracing::debug!("connection error from {}: {:?}", peer_addr, e);
                        }
                    });
                }
            }
        }

        tracing::info!("validation API shut down gracefully");
        Ok(())
    }
}

// Handler functions

async fn validate_handler(
    State(state): State<ApiState>,
    Json(request): Json<ValidationRequest>,
) -> Json<ValidationResult> {
    let result = CountryValidator::validate(&request, state.resolver.as_ref());

    if result.is_error {
        tracing::error!(error = %result.error_message, "validation error");
    }

    Json(result)
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
