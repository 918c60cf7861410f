//! Agent registry.
//!
//! Builds the set of mounted agents from config, validating it up front so a
//! bad roster fails at startup rather than at request time. The registry is
//! immutable once built; the catalog and the per-agent routes are both derived
//! from it.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::agent::executor::{AgentExecutor, EchoExecutor, FixedReplyExecutor};
use crate::api::{AGENT_CARD_PATH, AgentCard, AgentSkill};
use crate::config::{AgentBehavior, AgentConfig, Config};

/// Path prefixes an agent may not mount under.
const RESERVED_PATHS: &[&str] = &["/.well-known", "/livez", "/version"];

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate agent path: {path}")]
    DuplicatePath { path: String },

    #[error("duplicate agent name: {name}")]
    DuplicateName { name: String },

    #[error("agent path is reserved: {path}")]
    ReservedPath { path: String },

    #[error("agent path must start with '/' and must not end with '/': {path}")]
    InvalidPath { path: String },

    #[error("agent '{name}' has behavior 'fixed' but no reply configured")]
    MissingReply { name: String },
}

/// One mounted agent: catalog identity, card, and the executor behind it.
pub struct AgentRegistration {
    pub name: String,
    pub path: String,
    pub description: String,
    /// Absolute URL of the agent's JSON-RPC endpoint.
    pub url: String,
    /// Absolute URL of the agent's card.
    pub card_url: String,
    pub card: AgentCard,
    pub executor: Box<dyn AgentExecutor>,
}

impl std::fmt::Debug for AgentRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRegistration")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("url", &self.url)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: Arc<Vec<Arc<AgentRegistration>>>,
}

impl AgentRegistry {
    /// Builds the registry from config, preserving agent order.
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let base_url = config.base_url();
        let mut agents = Vec::with_capacity(config.agents.len());
        let mut seen_paths = HashSet::new();
        let mut seen_names = HashSet::new();

        for agent in &config.agents {
            validate_path(&agent.path)?;
            if !seen_paths.insert(agent.path.clone()) {
                return Err(RegistryError::DuplicatePath {
                    path: agent.path.clone(),
                });
            }
            if !seen_names.insert(agent.name.clone()) {
                return Err(RegistryError::DuplicateName {
                    name: agent.name.clone(),
                });
            }
            agents.push(Arc::new(build_registration(agent, &base_url)?));
        }

        Ok(Self {
            agents: Arc::new(agents),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<AgentRegistration>> {
        self.agents.iter()
    }
}

fn validate_path(path: &str) -> Result<(), RegistryError> {
    // Braces would be taken for axum capture syntax when the path is mounted.
    if !path.starts_with('/')
        || path.len() < 2
        || path.ends_with('/')
        || path.contains(['{', '}'])
        || path.contains(char::is_whitespace)
    {
        return Err(RegistryError::InvalidPath {
            path: path.to_string(),
        });
    }
    if RESERVED_PATHS
        .iter()
        .any(|reserved| path == *reserved || path.starts_with(&format!("{reserved}/")))
    {
        return Err(RegistryError::ReservedPath {
            path: path.to_string(),
        });
    }
    Ok(())
}

fn build_registration(
    agent: &AgentConfig,
    base_url: &str,
) -> Result<AgentRegistration, RegistryError> {
    let executor: Box<dyn AgentExecutor> = match agent.behavior {
        AgentBehavior::Fixed => {
            let reply = agent
                .reply
                .clone()
                .ok_or_else(|| RegistryError::MissingReply {
                    name: agent.name.clone(),
                })?;
            Box::new(FixedReplyExecutor::new(reply, agent.metadata.clone()))
        }
        AgentBehavior::Echo => Box::new(EchoExecutor::new(agent.metadata.clone())),
    };

    let url = format!("{base_url}{}", agent.path);
    let card_url = format!("{url}{AGENT_CARD_PATH}");
    let card = AgentCard {
        name: agent.name.clone(),
        description: agent.description.clone(),
        url: url.clone(),
        version: agent.version.clone(),
        skills: agent
            .skills
            .iter()
            .map(|skill| AgentSkill {
                id: skill.id.clone(),
                name: skill.name.clone(),
                description: skill.description.clone(),
                tags: skill.tags.clone(),
                examples: skill.examples.clone(),
            })
            .collect(),
    };

    Ok(AgentRegistration {
        name: agent.name.clone(),
        path: agent.path.clone(),
        description: agent.description.clone(),
        url,
        card_url,
        card,
        executor,
    })
}

// ============================================================================
// Tests
// ============================================================================
