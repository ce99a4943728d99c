//! Domain Layer
//!
//! Core business objects, ports, and services. Nothing in this layer
//! touches the network, the filesystem, or the GeoIP database directly.

pub mod entities;
pub mod ports;
pub mod services;
