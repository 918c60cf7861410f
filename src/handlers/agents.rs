//! Agent endpoint handlers: the card and the JSON-RPC message endpoint.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::{debug, warn};

use crate::agent::{AgentRegistration, RequestContext};
use crate::api::{AgentCard, MessageSendParams, RpcRequest, RpcResponse, rpc};

/// GET `<agent path>`/agent.json
pub async fn agent_card(State(agent): State<Arc<AgentRegistration>>) -> Json<AgentCard> {
    Json(agent.card.clone())
}

/// POST `<agent path>`
///
/// JSON-RPC 2.0 endpoint accepting `message/send`. Protocol errors come back
/// as HTTP 200 with a JSON-RPC error object; only a failing executor turns
/// into a 500.
pub async fn send_message(State(agent): State<Arc<AgentRegistration>>, body: Bytes) -> Response {
    // The id is pulled from the raw value so it survives envelope errors.
    let raw: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            return rpc_failure(
                StatusCode::OK,
                None,
                rpc::PARSE_ERROR,
                format!("Parse error: {e}"),
            );
        }
    };
    let id = raw.get("id").cloned();

    let request: RpcRequest = match serde_json::from_value(raw) {
        Ok(request) => request,
        Err(e) => {
            return rpc_failure(
                StatusCode::OK,
                id,
                rpc::INVALID_REQUEST,
                format!("Invalid Request: {e}"),
            );
        }
    };
    if request.jsonrpc != rpc::VERSION {
        return rpc_failure(
            StatusCode::OK,
            id,
            rpc::INVALID_REQUEST,
            "Invalid Request: jsonrpc must be \"2.0\"",
        );
    }
    if request.method != rpc::METHOD_MESSAGE_SEND {
        return rpc_failure(
            StatusCode::OK,
            id,
            rpc::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        );
    }

    let params: MessageSendParams = match request.params.map(serde_json::from_value).transpose() {
        Ok(Some(params)) => params,
        Ok(None) => {
            return rpc_failure(
                StatusCode::OK,
                id,
                rpc::INVALID_PARAMS,
                "Invalid params: params are required",
            );
        }
        Err(e) => {
            return rpc_failure(
                StatusCode::OK,
                id,
                rpc::INVALID_PARAMS,
                format!("Invalid params: {e}"),
            );
        }
    };

    debug!(agent = %agent.name, "Handling message/send");
    let context = RequestContext::new(params.message.content);
    match agent.executor.execute(&context).await {
        Ok(event) => (StatusCode::OK, Json(RpcResponse::success(id, event))).into_response(),
        Err(e) => {
            warn!(agent = %agent.name, error = %e, "Agent execution failed");
            rpc_failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                id,
                rpc::INTERNAL_ERROR,
                format!("Internal error: {e}"),
            )
        }
    }
}

fn rpc_failure(
    status: StatusCode,
    id: Option<Value>,
    code: i64,
    message: impl Into<String>,
) -> Response {
    (status, Json(RpcResponse::failure(id, code, message))).into_response()
}

// ============================================================================
// Tests
// ============================================================================
