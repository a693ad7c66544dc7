//! Hyper server setup and request handling.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming as IncomingBody};
use hyper::{Request, Response};
use hyper_util::rt::TokioExecutor;
use hyper_util::rt::TokioIo;
use hyper_util::server::conn::auto::Builder as ConnectionBuilder;
use tokio::net::TcpListener;

use crate::router::Router;

/// HTTP server for the registry API.
pub struct Server {
    addr: SocketAddr,
    router: Arc<Router>,
}

impl Server {
    /// Creates a new server instance.
    ///
    /// # Arguments
    /// * `addr` - Socket address to bind to
    /// * `router` - Request router
    pub fn new(addr: SocketAddr, router: Router) -> Self {
        Self {
            addr,
            router: Arc::new(router),
        }
    }

    /// Binds the configured address and serves until the task is aborted.
    pub async fn serve(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!(addr = %self.addr, "Server listening");
        serve_listener(listener, self.router).await
    }
}

/// Pause after an accept error that is not tied to a single connection (e.g. EMFILE).
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_secs(1);

/// Accept loop over an already bound listener; one task per connection.
///
/// Accept errors are logged and never end the loop.
pub async fn serve_listener(
    listener: TcpListener,
    router: Arc<Router>,
) -> Result<(), std::io::Error> {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(err) if is_connection_error(&err) => {
                tracing::debug!("Connection dropped before accept: {}", err);
                continue;
            }
            Err(err) => {
                tracing::error!("Accept error: {}", err);
                tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                continue;
            }
        };
        let io = TokioIo::new(stream);
        let router = Arc::clone(&router);

        tokio::task::spawn(async move {
            let builder = ConnectionBuilder::new(TokioExecutor::new());
            if let Err(err) = builder
                .serve_connection(
                    io,
                    hyper::service::service_fn(move |req| handle_request(req, router.clone())),
                )
                .await
            {
                tracing::error!(%peer, "Error serving connection: {}", err);
            }
        });
    }
}

/// Errors that only affect the connection being accepted.
fn is_connection_error(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        std::io::ErrorKind::ConnectionRefused
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::ConnectionReset
    )
}

/// Handles an incoming HTTP request.
async fn handle_request(
    req: Request<IncomingBody>,
    router: Arc<Router>,
) -> Result<Response<Full<Bytes>>, std::convert::Infallible> {
    let response = router.handle(req).await;
    Ok(response.map(Full::new))
}
