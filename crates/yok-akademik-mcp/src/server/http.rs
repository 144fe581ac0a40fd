//! HTTP transport for the MCP protocol.
//!
//! Streamable HTTP: `POST /mcp` carries JSON-RPC requests, `GET /mcp`
//! opens an SSE stream with Last-Event-ID replay backed by the
//! connection mailbox. Tool results are mirrored into the mailbox so a
//! reconnecting client can recover them.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{get, post},
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::mailbox::{Connection, ConnectionManager, StreamEvent};
use super::rpc::{self, JsonRpcRequest, JsonRpcResponse};
use crate::tools::{McpTool, ToolContext};

/// Query parameters for the /mcp endpoint.
#[derive(Debug, Deserialize)]
pub struct McpQuery {
    #[serde(rename = "connectionId")]
    connection_id: Option<String>,
}

/// Shared state for HTTP handlers.
pub struct HttpState {
    pub tools: Vec<Box<dyn McpTool>>,
    pub ctx: ToolContext,
    pub connections: Arc<ConnectionManager>,
}

/// Create the HTTP router for MCP.
pub fn create_router(tools: Vec<Box<dyn McpTool>>, ctx: ToolContext) -> Router {
    let connections = Arc::new(ConnectionManager::new());
    Arc::clone(&connections).start_cleanup_task();

    let state = Arc::new(HttpState { tools, ctx, connections });

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/mcp", post(handle_mcp_post).get(handle_mcp_get))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "yok-akademik-mcp",
        "version": env!("CARGO_PKG_VERSION"),
        "tools": state.tools.len()
    }))
}

/// Handle POST requests to /mcp.
async fn handle_mcp_post(
    State(state): State<Arc<HttpState>>,
    Query(query): Query<McpQuery>,
    Json(req): Json<JsonRpcRequest>,
) -> Response {
    tracing::debug!(method = %req.method, "Handling MCP POST request");

    let connection = state.connections.get_or_create(query.connection_id.as_deref()).await;

    if req.is_notification() {
        // Notifications get an empty 202; dispatch still runs for
        // side effects like the initialized handshake log line.
        let _ = rpc::handle_request(&req, &state.tools, &state.ctx).await;
        return StatusCode::ACCEPTED.into_response();
    }

    let response = rpc::handle_request(&req, &state.tools, &state.ctx).await;

    // Mirror tool results into the mailbox for SSE replay.
    if req.method == "tools/call" {
        if let Some(ref result) = response.result {
            let event_data =
                serde_json::to_string(&JsonRpcResponse::success(req.id.clone(), result.clone()))
                    .unwrap_or_default();
            connection.push_event("message", event_data).await;
        }
    }

    let mut res = Json(response).into_response();
    if let Ok(header) = HeaderValue::from_str(&connection.id) {
        res.headers_mut().insert("Mcp-Connection-Id", header);
    }
    res
}

/// Handle GET requests to /mcp (SSE stream).
async fn handle_mcp_get(
    State(state): State<Arc<HttpState>>,
    headers: HeaderMap,
    Query(query): Query<McpQuery>,
) -> impl IntoResponse {
    let last_event_id: u64 = headers
        .get("Last-Event-ID")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    let connection = state.connections.get_or_create(query.connection_id.as_deref()).await;

    tracing::info!(
        connection_id = %connection.id,
        last_event_id = last_event_id,
        "New SSE stream connection"
    );

    let stream = build_sse_stream(connection, last_event_id).await;

    (
        [
            ("X-Accel-Buffering", "no"),
            ("Cache-Control", "no-cache, no-store, must-revalidate"),
        ],
        Sse::new(stream)
            .keep_alive(KeepAlive::new().interval(Duration::from_secs(15)).text("ping")),
    )
}

/// Build the SSE stream: replay missed events, then live events.
async fn build_sse_stream(
    connection: Arc<Connection>,
    last_event_id: u64,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let missed_events = connection.events_after(last_event_id).await;
    let replay_stream = stream::iter(missed_events.into_iter().map(|e| {
        tracing::debug!(event_id = e.id, "Replaying missed event");
        Ok::<_, Infallible>(e.to_sse_event())
    }));

    let receiver = connection.subscribe();
    let live_stream =
        BroadcastStream::new(receiver).filter_map(|result: Result<StreamEvent, _>| async move {
            match result {
                Ok(event) => Some(Ok(event.to_sse_event())),
                Err(e) => {
                    tracing::debug!(error = %e, "Broadcast lag, client will catch up");
                    None
                }
            }
        });

    replay_stream.chain(live_stream)
}
