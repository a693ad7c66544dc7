//! Service configuration.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::PathBuf;

/// Runtime configuration for the registry service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Path of the embedded database file
    pub db_path: PathBuf,
    /// Name of the single bucket holding all records
    pub bucket: String,
    /// Delimited file used to populate an empty store
    pub source_file: PathBuf,
    /// Run the loader at startup
    pub populate_on_start: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            db_path: PathBuf::from("swift_codes.db"),
            bucket: "swift_code".to_string(),
            source_file: PathBuf::from("swiftCodes.csv"),
            populate_on_start: true,
        }
    }
}

impl ServiceConfig {
    /// Socket address to bind; `host` must be an IPv4 or IPv6 literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
