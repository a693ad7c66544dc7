//! Core of the SWIFT code registry.
//!
//! Provides the record model, the embedded single-bucket store,
//! the delimited-file loader, and the query service used by the API.

pub mod config;
pub mod error;
pub mod loader;
pub mod record;
pub mod service;
pub mod store;

pub use error::SwiftError;
pub use record::{BranchView, CountryGroup, HeadquarterResponse, Record};
pub use service::{CodeDetails, SwiftCodeService};
pub use store::Store;
