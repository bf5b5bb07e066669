//! HTTP transport implementation.
//!
//! HTTP server with JSON-RPC over POST requests.
//! This allows standard HTTP clients (curl, browsers, etc.) to communicate with the MCP server.
//!
//! Every path accepts JSON-RPC:
//! - `POST` with a JSON body: JSON-RPC response, or `204` for notifications
//! - `POST` with an undecodable body: `400` plain text
//! - `OPTIONS`: `200`, for CORS preflight
//! - anything else: `405` plain text
//!
//! A request that is not answered within `request_timeout` gets `408`.

use std::future::{Future, IntoFuture};

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{MethodRouter, post},
};
use bytes::Bytes;
use http::{HeaderValue, StatusCode, header};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::{
    set_header::SetResponseHeaderLayer,
    timeout::{RequestBodyTimeoutLayer, TimeoutLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::McpServer;
use crate::core::protocol::{self, JsonRpcRequest};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn run<F>(self, server: McpServer, shutdown: F) -> TransportResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        self.serve(listener, server, shutdown).await
    }

    /// Serve on `listener` until `shutdown` resolves.
    ///
    /// After `shutdown` resolves the listener stops accepting connections and
    /// in-flight requests get `shutdown_grace` to finish. Past that deadline
    /// this returns without waiting for them.
    pub async fn serve<F>(
        self,
        listener: TcpListener,
        server: McpServer,
        shutdown: F,
    ) -> TransportResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "{} v{} ready - listening on http://{} (JSON-RPC over HTTP, CORS {})",
            server.name(),
            server.version(),
            addr,
            cors_status
        );

        let app = router(server, &self.config);

        let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
        let graceful = async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        };

        let grace = self.config.shutdown_grace;
        let deadline = async move {
            if signalled_rx.await.is_err() {
                std::future::pending::<()>().await;
            }
            tokio::time::sleep(grace).await;
        };

        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(graceful)
            .into_future();

        tokio::select! {
            result = serve => result?,
            _ = deadline => warn!(
                "Shutdown grace period of {:?} elapsed; no longer waiting for in-flight requests, they end when the process exits",
                grace
            ),
        }

        info!("HTTP transport stopped");
        Ok(())
    }
}

/// Build the HTTP router around `server`.
pub fn router(server: McpServer, config: &HttpConfig) -> Router {
    let rpc: MethodRouter = post(handle_rpc)
        .options(handle_preflight)
        .fallback(method_not_allowed)
        .with_state(AppState { server });

    let mut app = Router::new()
        .fallback_service(rpc)
        .layer(RequestBodyTimeoutLayer::new(config.read_timeout))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        app = app
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("POST, OPTIONS"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ));
    }

    app
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method = tracing::field::Empty))]
async fn handle_rpc(State(state): State<AppState>, body: Bytes) -> Response {
    let request: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejecting malformed request body: {}", e);
            return (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", e)).into_response();
        }
    };

    tracing::Span::current().record("method", request.method_name());
    info!("Received request: method={}", request.method_name());

    match protocol::handle_request(&state.server, request).await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// CORS preflight.
async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
