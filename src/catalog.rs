//! Catalog construction and flattening.
//!
//! The server publishes its agents as an RFC 9727 api-catalog: one linkset
//! context per agent, anchored at the agent's endpoint URL and pointing at its
//! card. The client flattens the same document back into plain entries it can
//! select from.

use url::Url;

use crate::agent::AgentRegistry;
use crate::api::{CATALOG_SCHEMA_VERSION, CatalogDocument, LinkContext, LinkTarget};

/// A catalog entry as seen by the client: one agent, flattened out of the
/// linkset form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Path component of the anchor, used as the entry's identity.
    pub path: String,
    pub name: String,
    pub description: String,
    /// Endpoint URL as published, possibly relative to the catalog origin.
    pub url: String,
    /// Card URL, when the entry links one.
    pub card_url: Option<String>,
}

/// Builds the published catalog from the registry, preserving agent order.
#[must_use]
pub fn build_document(registry: &AgentRegistry) -> CatalogDocument {
    CatalogDocument {
        version: CATALOG_SCHEMA_VERSION.to_string(),
        linkset: registry
            .iter()
            .map(|agent| LinkContext {
                anchor: agent.url.clone(),
                title: agent.name.clone(),
                description: agent.description.clone(),
                describedby: vec![LinkTarget {
                    href: agent.card_url.clone(),
                    media_type: Some("application/json".to_string()),
                }],
            })
            .collect(),
    }
}

/// Flattens a catalog document into entries, preserving document order.
#[must_use]
pub fn entries(document: &CatalogDocument) -> Vec<CatalogEntry> {
    document
        .linkset
        .iter()
        .map(|context| CatalogEntry {
            path: anchor_path(&context.anchor),
            name: context.title.clone(),
            description: context.description.clone(),
            url: context.anchor.clone(),
            card_url: context.describedby.first().map(|target| target.href.clone()),
        })
        .collect()
}

/// Path component of an anchor. Relative anchors are already paths and pass
/// through unchanged.
fn anchor_path(anchor: &str) -> String {
    match Url::parse(anchor) {
        Ok(url) => url.path().to_string(),
        Err(_) => anchor.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
