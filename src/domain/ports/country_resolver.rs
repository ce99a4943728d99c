//! Country Resolver Port
//!
//! Defines the interface for resolving IP addresses to ISO country codes.

use std::net::IpAddr;
use thiserror::Error;

/// Error returned when a country lookup fails.
///
/// The `Database` variant displays as the raw underlying message so the
/// validator can pass it through to callers unmodified.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The database has no record for this address (private ranges,
    /// loopback, or simply unlisted).
    #[error("no geoip record for {0}")]
    NotFound(IpAddr),
    /// The underlying database access failed (corrupt file, I/O error).
    #[error("{0}")]
    Database(String),
}

/// Resolver for IP address to ISO country code.
///
/// This is an outbound port that abstracts the GeoIP database.
/// Implementations may use MaxMind GeoLite2, IP2Location, or other
/// country-level databases; a fixed-response double exists for tests.
pub trait CountryResolver: Send + Sync {
    /// Resolve an IP address to its ISO 3166-1 alpha-2 country code.
    fn resolve(&self, ip: IpAddr) -> Result<String, ResolveError>;
}
