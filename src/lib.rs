//! geogate Library
//!
//! Validates whether an IP address belongs to one of a caller-supplied
//! set of countries, using a local MaxMind GeoLite2 database. This
//! module exposes the components for use in integration tests and as a
//! library.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use adapters::inbound::{TlsConfig, ValidationServer};
pub use adapters::outbound::{FixedCountryResolver, MaxMindCountryResolver};
pub use config::load_config;
pub use domain::entities::{ValidationRequest, ValidationResult};
pub use domain::ports::{CountryResolver, ResolveError};
pub use domain::services::CountryValidator;
pub use infrastructure::{shutdown_signal, ShutdownController};
