//! Client-side error types.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure before an agent was involved, e.g. the catalog host
    /// is down.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Transport failure talking to a selected agent.
    #[error("agent '{agent}' is unreachable: {source}")]
    AgentUnreachable {
        agent: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("catalog has no agent named '{name}'")]
    SelectionFailed { name: String },

    #[error("catalog is empty")]
    EmptyCatalog,

    /// Non-success HTTP status outside the JSON-RPC envelope.
    #[error("server returned {status} for {url}: {detail}")]
    Api {
        status: StatusCode,
        url: String,
        detail: String,
    },

    /// JSON-RPC error object returned by an agent.
    #[error("agent '{agent}' returned JSON-RPC error {code}: {message}")]
    Rpc {
        agent: String,
        code: i64,
        message: String,
    },

    /// A 200 response whose JSON-RPC envelope carries neither result nor
    /// error.
    #[error("agent '{agent}' returned a JSON-RPC response with neither result nor error")]
    MalformedResponse { agent: String },
}
