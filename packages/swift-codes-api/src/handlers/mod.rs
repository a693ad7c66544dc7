//! HTTP endpoint implementations for the SWIFT code registry.

pub mod crud_handlers;
pub mod query_handlers;
pub mod request_utils;
pub mod response;

pub use crud_handlers::{create_swift_code, delete_swift_code, read_swift_code};
pub use query_handlers::list_swift_codes_by_country;
pub use request_utils::map_swift_error_to_router_error;
pub use response::{error_response, message_response, ErrorResponse, MessageResponse};
