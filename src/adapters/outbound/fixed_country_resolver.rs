//! Fixed Country Resolver
//!
//! A CountryResolver double that always returns the same country code
//! or always fails with the same message. Used by the test suites and
//! handy for running the server without a real database.

use crate::domain::ports::{CountryResolver, ResolveError};
use std::net::IpAddr;

/// Resolver with a fixed outcome, independent of the queried address.
pub struct FixedCountryResolver {
    outcome: Result<String, String>,
}

impl FixedCountryResolver {
    /// Resolver that resolves every address to `code`.
    pub fn with_country(code: impl Into<String>) -> Self {
        Self {
            outcome: Ok(code.into()),
        }
    }

    /// Resolver that fails every lookup with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

impl CountryResolver for FixedCountryResolver {
    fn resolve(&self, _ip: IpAddr) -> Result<String, ResolveError> {
        match &self.outcome {
            Ok(code) => Ok(code.clone()),
            Err(message) => Err(ResolveError::Database(message.clone())),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_with_country_resolves_any_address() {
        let resolver = FixedCountryResolver::with_country("BR");
        let ip = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));
        assert_eq!(resolver.resolve(ip).unwrap(), "BR");
    }

    #[test]
    fn test_failing_reports_message_verbatim() {
        let resolver = FixedCountryResolver::failing("record not found");
        let ip = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));
        let err = resolver.resolve(ip).unwrap_err();
        assert_eq!(err.to_string(), "record not found");
    }
}
