//! Country Validator Service
//!
//! Pure domain logic for deciding whether an IP address belongs to one
//! of a caller-supplied set of countries. The only external dependency
//! is the injected `CountryResolver` port.

use crate::domain::entities::{ValidationRequest, ValidationResult};
use crate::domain::ports::CountryResolver;
use std::net::IpAddr;

/// Message returned when the IP is blank or the allow-list is empty.
/// One message covers both conditions.
const MSG_MISSING_INPUT: &str =
    "Ip address cannot be blank and at least one country code required.";

/// Message returned when the IP string is not a valid IPv4/IPv6 address.
const MSG_UNPARSEABLE_IP: &str = "The incoming ip address could not be parsed";

/// Country validation service.
///
/// Validates a request in four steps: input sanity checks, IP parsing,
/// geolocation lookup through the resolver, and a membership test
/// against the allow-list. Any failure is terminal for the request;
/// there are no retries.
pub struct CountryValidator;

impl CountryValidator {
    /// Validate a request against the given resolver.
    ///
    /// Returns `ValidationResult::error(..)` on bad input, an
    /// unparseable IP, or a resolver failure (the resolver's error text
    /// is passed through verbatim). Otherwise returns
    /// `ValidationResult::valid(matched)` where `matched` is true iff
    /// the resolved country code appears in `country_iso_code`
    /// (case-sensitive exact match).
    pub fn validate(
        request: &ValidationRequest,
        resolver: &dyn CountryResolver,
    ) -> ValidationResult {
        if request.country_iso_code.is_empty() || request.ip.trim().is_empty() {
            return ValidationResult::error(MSG_MISSING_INPUT);
        }

        let addr: IpAddr = match request.ip.parse() {
            Ok(addr) => addr,
            Err(_) => return ValidationResult::error(MSG_UNPARSEABLE_IP),
        };

        let iso_code = match resolver.resolve(addr) {
            Ok(code) => code,
            Err(e) => return ValidationResult::error(e.to_string()),
        };

        // Linear scan is fine: allow-lists are expected to be tiny.
        let is_valid = request.country_iso_code.iter().any(|code| *code == iso_code);

        tracing::info!(
            ip = %request.ip,
            allowed_countries = %request.country_iso_code.join(","),
            resolved_country = %iso_code,
            is_valid_country = is_valid,
            "ip lookup complete"
        );

        ValidationResult::valid(is_valid)
    }
}
