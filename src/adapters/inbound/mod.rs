mod api_server;
mod tls;

pub use api_server::{ApiState, HealthResponse, ValidationServer};
pub use tls::TlsConfig;
