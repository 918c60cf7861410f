//! Discovery client.
//!
//! Implements the discovery loop against a catalog host: fetch the well-known
//! catalog, pick an agent, resolve its URL, and send it a message.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::api::{
    AgentCard, CatalogDocument, MessageEvent, RpcRequest, RpcResponse, WELL_KNOWN_CATALOG_PATH,
};
use crate::catalog::{self, CatalogEntry};

pub mod error;

pub use error::ClientError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of a discovery run: the selected entry and the agent's reply.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub agent: CatalogEntry,
    pub event: MessageEvent,
}

pub struct DiscoveryClient {
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl DiscoveryClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    #[must_use]
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            http: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches and parses the well-known catalog.
    pub async fn fetch_catalog(&self) -> Result<CatalogDocument, ClientError> {
        let url = format!("{}{WELL_KNOWN_CATALOG_PATH}", self.base_url);
        debug!(url = %url, "Fetching catalog");
        let response = self.http.get(&url).timeout(self.timeout).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status,
                url,
                detail: error_detail(&bytes),
            });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetches an agent card.
    pub async fn fetch_card(&self, url: &str) -> Result<AgentCard, ClientError> {
        let url = self.resolve_url(url)?;
        debug!(url = %url, "Fetching agent card");
        let response = self.http.get(&url).timeout(self.timeout).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status,
                url,
                detail: error_detail(&bytes),
            });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Resolves a possibly-relative URL from the catalog against the client's
    /// base URL.
    pub fn resolve_url(&self, raw: &str) -> Result<String, ClientError> {
        match Url::parse(raw) {
            Ok(url) => Ok(url.into()),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base =
                    Url::parse(&self.base_url).map_err(|source| ClientError::InvalidUrl {
                        url: self.base_url.clone(),
                        source,
                    })?;
                let joined = base.join(raw).map_err(|source| ClientError::InvalidUrl {
                    url: raw.to_string(),
                    source,
                })?;
                Ok(joined.into())
            }
            Err(source) => Err(ClientError::InvalidUrl {
                url: raw.to_string(),
                source,
            }),
        }
    }

    /// Sends `text` to the agent at `url` via JSON-RPC `message/send`.
    ///
    /// `agent` names the target in transport errors so callers can tell a
    /// dead agent from a dead catalog host.
    pub async fn send_message(
        &self,
        agent: &str,
        url: &str,
        text: &str,
    ) -> Result<MessageEvent, ClientError> {
        let request = RpcRequest::message_send(text);
        debug!(agent = %agent, url = %url, "Sending message");
        let response = self
            .http
            .post(url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|source| ClientError::AgentUnreachable {
                agent: agent.to_string(),
                source,
            })?;
        let status = response.status();
        let bytes =
            response
                .bytes()
                .await
                .map_err(|source| ClientError::AgentUnreachable {
                    agent: agent.to_string(),
                    source,
                })?;

        match serde_json::from_slice::<RpcResponse>(&bytes) {
            Ok(rpc_response) => match (rpc_response.result, rpc_response.error) {
                (_, Some(error)) => Err(ClientError::Rpc {
                    agent: agent.to_string(),
                    code: error.code,
                    message: error.message,
                }),
                (Some(result), None) => Ok(result),
                (None, None) => Err(ClientError::MalformedResponse {
                    agent: agent.to_string(),
                }),
            },
            Err(e) if status.is_success() => Err(ClientError::Parse(e)),
            Err(_) => Err(ClientError::Api {
                status,
                url: url.to_string(),
                detail: error_detail(&bytes),
            }),
        }
    }

    /// The full discovery loop: fetch the catalog, pick `name` (or the first
    /// entry), resolve its URL, and send `text`.
    pub async fn discover(&self, name: Option<&str>, text: &str) -> Result<Discovery, ClientError> {
        let document = self.fetch_catalog().await?;
        let entries = catalog::entries(&document);
        let entry = select_entry(&entries, name)?.clone();
        let url = self.resolve_url(&entry.url)?;
        let event = self.send_message(&entry.name, &url, text).await?;
        Ok(Discovery {
            agent: entry,
            event,
        })
    }
}

/// Picks the entry named `name`, or the first entry when no name is given.
///
/// Selection is by exact, case-sensitive name. An empty catalog is reported
/// before any name lookup.
pub fn select_entry<'a>(
    entries: &'a [CatalogEntry],
    name: Option<&str>,
) -> Result<&'a CatalogEntry, ClientError> {
    let Some(first) = entries.first() else {
        return Err(ClientError::EmptyCatalog);
    };
    match name {
        None => Ok(first),
        Some(name) => {
            entries
                .iter()
                .find(|entry| entry.name == name)
                .ok_or_else(|| ClientError::SelectionFailed {
                    name: name.to_string(),
                })
        }
    }
}

/// Best-effort detail from an error body: problem details if present,
/// otherwise the raw text.
fn error_detail(bytes: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(bytes)
        && let Some(detail) = value
            .get("detail")
            .or_else(|| value.get("title"))
            .and_then(Value::as_str)
    {
        return detail.to_string();
    }
    String::from_utf8_lossy(bytes).into_owned()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, path: &str) -> CatalogEntry {
        CatalogEntry {
            path: path.to_string(),
            name: name.to_string(),
            description: String::new(),
            url: format!("http://127.0.0.1:9999{path}"),
            card_url: None,
        }
    }

    #[test]
    fn test_select_defaults_to_first_entry() {
        let entries = vec![entry("Agent A", "/agents/a"), entry("Agent B", "/agents/b")];
        let selected = select_entry(&entries, None).unwrap();
        assert_eq!(selected.name, "Agent A");
        assert_eq!(selected.url, "http://127.0.0.1:9999/agents/a");
    }

    #[test]
    fn test_select_by_exact_name() {
        let entries = vec![entry("Agent A", "/agents/a"), entry("Agent B", "/agents/b")];
        let selected = select_entry(&entries, Some("Agent B")).unwrap();
        assert_eq!(selected.url, "http://127.0.0.1:9999/agents/b");
    }

    #[test]
    fn test_select_unknown_name_fails() {
        let entries = vec![entry("Agent A", "/agents/a")];
        let err = select_entry(&entries, Some("Agent Z")).unwrap_err();
        assert!(matches!(err, ClientError::SelectionFailed { name } if name == "Agent Z"));
    }

    #[test]
    fn test_select_is_case_sensitive() {
        let entries = vec![entry("Agent A", "/agents/a")];
        let err = select_entry(&entries, Some("agent a")).unwrap_err();
        assert!(matches!(err, ClientError::SelectionFailed { .. }));
    }

    #[test]
    fn test_select_from_empty_catalog_fails() {
        let err = select_entry(&[], None).unwrap_err();
        assert!(matches!(err, ClientError::EmptyCatalog));

        // Empty wins over unknown name.
        let err = select_entry(&[], Some("Agent A")).unwrap_err();
        assert!(matches!(err, ClientError::EmptyCatalog));
    }

    #[test]
    fn test_resolve_relative_url() {
        let client = DiscoveryClient::new("http://127.0.0.1:9999");
        let resolved = client.resolve_url("/agents/a").unwrap();
        assert_eq!(resolved, "http://127.0.0.1:9999/agents/a");
    }

    #[test]
    fn test_resolve_absolute_url_passes_through() {
        let client = DiscoveryClient::new("http://127.0.0.1:9999");
        let resolved = client
            .resolve_url("http://other.example:8080/agents/x")
            .unwrap();
        assert_eq!(resolved, "http://other.example:8080/agents/x");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = DiscoveryClient::new("http://127.0.0.1:9999/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_error_detail_prefers_problem_detail() {
        let body =
            br#"{"type":"about:blank","title":"Not Found","status":404,"detail":"No route for /nope"}"#;
        assert_eq!(error_detail(body), "No route for /nope");
        assert_eq!(error_detail(b"plain text"), "plain text");
    }
}
