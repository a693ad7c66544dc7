//! Country listing handler.

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};

use super::request_utils::{json_response, path_param, run_blocking, MatchitParams};

/// Lists every SWIFT code registered for a country.
///
/// # Endpoint
/// `GET /v1/swift-codes/country/{iso2}`
///
/// # Response
/// - **200 OK**: The country group; the ISO2 code is matched case-insensitively
/// ```json
/// {
///   "countryISO2": "AL",
///   "countryName": "ALBANIA",
///   "swiftCodes": [ { "swiftCode": "AAISALTRXXX", "...": "..." } ]
/// }
/// ```
///
/// # Errors
/// - **404 Not Found**: No record for the country
/// - **500 Internal Server Error**: Storage failure
///
/// # Example
/// ```bash
/// curl http://localhost:8080/v1/swift-codes/country/al
/// ```
pub async fn list_swift_codes_by_country<B>(
    _req: Request<B>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let iso2 = path_param(&params, "iso2")?;
    tracing::info!(country = %iso2, "API request: list SWIFT codes by country");

    let service = state.service.clone();
    let group = run_blocking(move || service.list_by_country(&iso2)).await?;

    tracing::debug!(
        country = %group.country_iso2,
        count = group.swift_codes.len(),
        "Listed SWIFT codes"
    );
    json_response(200, &group)
}
