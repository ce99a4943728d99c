//! Domain Entities - Core business objects
//!
//! The request and result shapes for country validation. These map 1:1
//! to the JSON wire envelope (camelCase field names) but carry no
//! transport logic themselves.

use serde::{Deserialize, Serialize};

/// A validation request: a candidate IP address and the set of country
/// codes the caller considers acceptable.
///
/// `country_iso_code` is caller-supplied and may contain duplicates;
/// order does not affect the outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    /// Candidate IP address in textual form (IPv4 or IPv6)
    pub ip: String,
    /// Acceptable ISO 3166-1 alpha-2 country codes
    pub country_iso_code: Vec<String>,
}

/// The outcome of a validation request.
///
/// Constructed once per call and immutable afterwards. Invariants:
/// `is_valid_country` is never true when `is_error` is true, and
/// `error_message` is non-empty iff `is_error` is true. Both are
/// enforced by the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the request failed (bad input, unparseable IP, or lookup failure)
    pub is_error: bool,
    /// Human-readable failure description; empty on success
    pub error_message: String,
    /// Whether the resolved country was in the allow-list (meaningful only when `is_error` is false)
    pub is_valid_country: bool,
}

impl ValidationResult {
    /// Successful validation with the given match outcome.
    pub fn valid(is_valid_country: bool) -> Self {
        Self {
            is_error: false,
            error_message: String::new(),
            is_valid_country,
        }
    }

    /// Failed validation with a descriptive message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            error_message: message.into(),
            is_valid_country: false,
        }
    }
}
