//! Matchit routing configuration.

use hyper::{body::Bytes, Method, Request, Response};
use matchit::Router as MatchitRouter;

use crate::handlers;
use swift_codes_core::SwiftCodeService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Query service over the shared store
    pub service: SwiftCodeService,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router with the registry routes.
    pub fn new(service: SwiftCodeService) -> Self {
        let mut router = MatchitRouter::new();

        router
            .insert("/v1/swift-codes", RouteHandler::Collection)
            .expect("Failed to insert /v1/swift-codes route");
        router
            .insert("/v1/swift-codes/{code}", RouteHandler::SwiftCode)
            .expect("Failed to insert /v1/swift-codes/{code} route");
        router
            .insert("/v1/swift-codes/country/{iso2}", RouteHandler::Country)
            .expect("Failed to insert /v1/swift-codes/country/{iso2} route");

        Self {
            inner: router,
            state: AppState { service },
        }
    }

    /// Routes a request and renders any error as a JSON response.
    pub async fn handle<B>(&self, req: Request<B>) -> Response<Bytes>
    where
        B: hyper::body::Body,
        B::Error: std::fmt::Display,
    {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        match self.route(req).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%method, %path, error = %err, "Request failed");
                Response::from(err)
            }
        }
    }

    /// Routes an incoming request to the appropriate handler.
    ///
    /// # Arguments
    /// * `req` - HTTP request
    ///
    /// # Returns
    /// `Result<Response<Bytes>, RouterError>` containing the response or an error.
    pub async fn route<B>(&self, req: Request<B>) -> Result<Response<Bytes>, RouterError>
    where
        B: hyper::body::Body,
        B::Error: std::fmt::Display,
    {
        let path = req.uri().path().to_string();

        match self.inner.at(&path) {
            Ok(matched) => {
                let handler = matched.value;
                handler
                    .handle(req, matched.params, self.state.clone())
                    .await
            }
            Err(_) => Err(RouterError::NotFound(format!("No route found for {}", path))),
        }
    }
}

/// Route handler function.
enum RouteHandler {
    Collection,
    SwiftCode,
    Country,
}

impl RouteHandler {
    /// Handles a request with the given route parameters.
    async fn handle<B>(
        &self,
        req: Request<B>,
        params: matchit::Params<'_, '_>,
        state: AppState,
    ) -> Result<Response<Bytes>, RouterError>
    where
        B: hyper::body::Body,
        B::Error: std::fmt::Display,
    {
        let method = req.method().clone();
        match self {
            RouteHandler::Collection if method == Method::POST => {
                handlers::create_swift_code(req, params, state).await
            }
            RouteHandler::SwiftCode if method == Method::GET => {
                handlers::read_swift_code(req, params, state).await
            }
            RouteHandler::SwiftCode if method == Method::DELETE => {
                handlers::delete_swift_code(req, params, state).await
            }
            RouteHandler::Country if method == Method::GET => {
                handlers::list_swift_codes_by_country(req, params, state).await
            }
            _ => Err(RouterError::MethodNotAllowed),
        }
    }
}

/// Router error type.
#[derive(Debug)]
pub enum RouterError {
    MethodNotAllowed,
    InternalError(String),
    BadRequest(String),
    NotFound(String),
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            RouterError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
            RouterError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            RouterError::NotFound(msg) => write!(f, "Not Found: {}", msg),
        }
    }
}

impl std::error::Error for RouterError {}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let (status, message) = match &err {
            RouterError::MethodNotAllowed => (405, "Method Not Allowed"),
            RouterError::InternalError(msg) => (500, msg.as_str()),
            RouterError::BadRequest(msg) => (400, msg.as_str()),
            RouterError::NotFound(msg) => (404, msg.as_str()),
        };

        let error_response = handlers::error_response(message);
        let body = serde_json::to_vec(&error_response).unwrap_or_else(|e| {
            format!("{{\"error\":\"Failed to serialize error: {}\"}}", e).into_bytes()
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| {
                let mut fallback = Response::new(Bytes::from_static(b"Internal Server Error"));
                *fallback.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
                fallback
            })
    }
}
