//! Shared API types used by both server handlers and client.
//!
//! These types define the contract between server and client.
//! Changes here affect both sides, preventing silent drift.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

// ============================================================================
// Discovery Constants
// ============================================================================

/// Well-known path the catalog document is served from (RFC 9727).
pub const WELL_KNOWN_CATALOG_PATH: &str = "/.well-known/api-catalog";

/// Alias route for clients that expect a `.json` suffix.
pub const WELL_KNOWN_CATALOG_ALIAS: &str = "/.well-known/api-catalog.json";

/// Path of the card document relative to an agent mount.
pub const AGENT_CARD_PATH: &str = "/agent.json";

/// Content type of the catalog document.
pub const LINKSET_CONTENT_TYPE: &str =
    "application/linkset+json; profile=\"https://www.rfc-editor.org/info/rfc9727\"";

/// Schema marker carried at the top of the catalog document.
pub const CATALOG_SCHEMA_VERSION: &str = "1";

// ============================================================================
// JSON-RPC Constants
// ============================================================================

/// JSON-RPC constants used on the agent endpoints.
pub mod rpc {
    pub const VERSION: &str = "2.0";
    pub const METHOD_MESSAGE_SEND: &str = "message/send";

    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
}

// ============================================================================
// Catalog Types
// ============================================================================

/// The catalog document served at the well-known path.
///
/// An RFC 9264 linkset: one link context per mounted agent, in mount order,
/// plus a schema marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: String,
    pub linkset: Vec<LinkContext>,
}

/// One linkset entry describing an agent endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkContext {
    /// Absolute URL of the agent's RPC endpoint.
    pub anchor: String,
    /// Agent name.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Links to the agent's card document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub describedby: Vec<LinkTarget>,
}

/// Target of a `describedby` relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkTarget {
    pub href: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

// ============================================================================
// Agent Card Types
// ============================================================================

/// Metadata document describing one agent, served at `<mount>/agent.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCard {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Absolute URL of the agent's RPC endpoint.
    pub url: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<AgentSkill>,
}

/// A capability advertised on an agent card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSkill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

// ============================================================================
// Message Types
// ============================================================================

/// The payload an agent returns for one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEvent {
    pub content: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// Inbound message body inside `message/send` params.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePayload {
    pub content: String,
}

/// Params of a `message/send` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSendParams {
    pub message: MessagePayload,
}

// ============================================================================
// JSON-RPC Envelope
// ============================================================================

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RpcRequest {
    /// Build a `message/send` request with a fresh id.
    ///
    /// The params shape must stay parsable as [`MessageSendParams`]; a test
    /// below pins that down.
    #[must_use]
    pub fn message_send(text: &str) -> Self {
        Self {
            jsonrpc: rpc::VERSION.to_string(),
            id: Some(Value::String(Uuid::new_v4().to_string())),
            method: rpc::METHOD_MESSAGE_SEND.to_string(),
            params: Some(json!({ "message": { "content": text } })),
        }
    }
}

/// A JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MessageEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    #[must_use]
    pub fn success(id: Option<Value>, result: MessageEvent) -> Self {
        Self {
            jsonrpc: rpc::VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(id: Option<Value>, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: rpc::VERSION.to_string(),
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Error object of a JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

// ============================================================================
// Tests
// ============================================================================
