//! MaxMind Country Resolver
//!
//! Implements CountryResolver using a MaxMind GeoLite2-Country database.

use crate::domain::ports::{CountryResolver, ResolveError};
use maxminddb::{MaxMindDBError, Reader};
use serde::Deserialize;
use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;

/// Fixed database filename, joined onto the configured directory.
pub const DB_FILENAME: &str = "GeoLite2-Country.mmdb";

/// MaxMind country resolver.
///
/// Holds a `maxminddb::Reader` opened once at startup. The reader is
/// safe for concurrent read-only use, so a single instance behind `Arc`
/// serves every request without locking.
pub struct MaxMindCountryResolver {
    reader: Arc<Reader<Vec<u8>>>,
}

impl MaxMindCountryResolver {
    /// Open a GeoLite2 database from an explicit file path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self {
            reader: Arc::new(reader),
        })
    }

    /// Open the database from a directory containing `GeoLite2-Country.mmdb`.
    pub fn from_dir(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::from_file(dir.as_ref().join(DB_FILENAME))
    }
}

impl CountryResolver for MaxMindCountryResolver {
    fn resolve(&self, ip: IpAddr) -> Result<String, ResolveError> {
        #[derive(Debug, Deserialize)]
        struct Country {
            iso_code: Option<String>,
        }

        #[derive(Debug, Deserialize)]
        struct CountryRecord {
            country: Option<Country>,
        }

        let record: CountryRecord = self.reader.lookup(ip).map_err(|e| match e {
            MaxMindDBError::AddressNotFoundError(_) => ResolveError::NotFound(ip),
            other => ResolveError::Database(other.to_string()),
        })?;

        // Some records exist but carry no country (e.g. anonymous ranges).
        record
            .country
            .and_then(|c| c.iso_code)
            .ok_or(ResolveError::NotFound(ip))
    }
}
