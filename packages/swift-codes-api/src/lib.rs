//! REST API server for the SWIFT code registry.
//!
//! Provides the `/v1/swift-codes` endpoints, request routing,
//! and the hyper accept loop.

pub mod handlers;
pub mod router;
pub mod server;
