//! Adapters Layer
//!
//! Inbound adapters drive the domain from the outside (HTTP); outbound
//! adapters implement the domain's ports against real infrastructure.

pub mod inbound;
pub mod outbound;
