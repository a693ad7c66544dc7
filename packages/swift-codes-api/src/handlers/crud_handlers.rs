//! Create, read and delete handlers for single SWIFT codes.

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};
use swift_codes_core::Record;

use super::request_utils::{
    json_response, map_swift_error_to_router_error, path_param, read_request_body, run_blocking,
    MatchitParams,
};
use super::response::message_response;

/// Reads a SWIFT code.
///
/// # Endpoint
/// `GET /v1/swift-codes/{code}`
///
/// # Response
/// - **200 OK**: The record. Headquarters (codes ending in `XXX`) also carry
///   their branches, without `countryName`.
/// ```json
/// {
///   "address": "HYRJA 3 RR. DRITAN HOXHA ND. 11 TIRANA",
///   "bankName": "UNITED BANK OF ALBANIA SH.A",
///   "countryISO2": "AL",
///   "countryName": "ALBANIA",
///   "isHeadquarter": true,
///   "swiftCode": "AAISALTRXXX",
///   "branches": [
///     {
///       "address": "BRANCH STREET",
///       "bankName": "UNITED BANK OF ALBANIA SH.A",
///       "countryISO2": "AL",
///       "isHeadquarter": false,
///       "swiftCode": "AAISALTRABC"
///     }
///   ]
/// }
/// ```
///
/// # Errors
/// - **404 Not Found**: Code not in the store
/// - **500 Internal Server Error**: Storage or decoding failure
///
/// # Example
/// ```bash
/// curl http://localhost:8080/v1/swift-codes/AAISALTRXXX
/// ```
pub async fn read_swift_code<B>(
    _req: Request<B>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let code = path_param(&params, "code")?;
    tracing::info!(code = %code, "API request: get SWIFT code");

    let service = state.service.clone();
    let details = run_blocking(move || service.get_details(&code)).await?;

    json_response(200, &details)
}

/// Deletes a SWIFT code.
///
/// # Endpoint
/// `DELETE /v1/swift-codes/{code}`
///
/// # Response
/// - **200 OK**: `{"message": "SWIFT code deleted successfully"}`, also when
///   the code did not exist
///
/// # Errors
/// - **500 Internal Server Error**: Storage failure
///
/// # Example
/// ```bash
/// curl -X DELETE http://localhost:8080/v1/swift-codes/AAISALTRXXX
/// ```
pub async fn delete_swift_code<B>(
    _req: Request<B>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let code = path_param(&params, "code")?;
    tracing::info!(code = %code, "API request: delete SWIFT code");

    let service = state.service.clone();
    let deleted = code.clone();
    run_blocking(move || service.delete(&deleted)).await?;

    tracing::info!(code = %code, "SWIFT code deleted");
    json_response(200, &message_response("SWIFT code deleted successfully"))
}

/// Creates or replaces a SWIFT code.
///
/// # Endpoint
/// `POST /v1/swift-codes`
///
/// # Request Body
/// ```json
/// {
///   "address": "Test Address",
///   "bankName": "Test Bank",
///   "countryISO2": "US",
///   "countryName": "United States",
///   "isHeadquarter": true,
///   "swiftCode": "TESTUS33XXX"
/// }
/// ```
///
/// # Response
/// - **200 OK**: `{"message": "SWIFT code added successfully"}`
///
/// # Errors
/// - **400 Bad Request**: Body is not a JSON record
/// - **500 Internal Server Error**: Storage failure
///
/// # Notes
/// - An existing entry with the same code is overwritten
/// - Country fields are stored uppercased
pub async fn create_swift_code<B>(
    req: Request<B>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    let body_bytes = read_request_body(req).await?;
    let record = Record::from_json(&body_bytes).map_err(|e| {
        tracing::warn!(error = %e, "Rejected request body");
        map_swift_error_to_router_error(e)
    })?;
    let code = record.code.clone();
    tracing::info!(code = %code, "API request: add SWIFT code");

    let service = state.service.clone();
    run_blocking(move || service.insert(record)).await?;

    tracing::info!(code = %code, "SWIFT code added");
    json_response(200, &message_response("SWIFT code added successfully"))
}
