//! Agent executors.
//!
//! An executor is the behavior behind a mount: it takes the caller's message
//! and produces the event returned in the JSON-RPC response. The demo ships
//! two of them, a fixed-reply executor and an echo executor.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::api::MessageEvent;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent execution failed: {0}")]
    Execution(String),
}

/// Per-request input handed to an executor.
#[derive(Debug, Clone)]
pub struct RequestContext {
    user_input: String,
}

impl RequestContext {
    #[must_use]
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
        }
    }

    #[must_use]
    pub fn user_input(&self) -> &str {
        &self.user_input
    }
}

#[async_trait]
pub trait AgentExecutor: Send + Sync {
    async fn execute(&self, context: &RequestContext) -> Result<MessageEvent, AgentError>;
}

// ============================================================================
// FixedReplyExecutor
// ============================================================================

/// Returns the same configured reply for every message.
pub struct FixedReplyExecutor {
    reply: String,
    metadata: HashMap<String, String>,
}

impl FixedReplyExecutor {
    #[must_use]
    pub fn new(reply: impl Into<String>, metadata: HashMap<String, String>) -> Self {
        Self {
            reply: reply.into(),
            metadata,
        }
    }
}

#[async_trait]
impl AgentExecutor for FixedReplyExecutor {
    async fn execute(&self, _context: &RequestContext) -> Result<MessageEvent, AgentError> {
        Ok(MessageEvent {
            content: self.reply.clone(),
            metadata: self.metadata.clone(),
        })
    }
}

// ============================================================================
// EchoExecutor
// ============================================================================

/// Returns the caller's own text.
pub struct EchoExecutor {
    metadata: HashMap<String, String>,
}

impl EchoExecutor {
    #[must_use]
    pub fn new(metadata: HashMap<String, String>) -> Self {
        Self { metadata }
    }
}

#[async_trait]
impl AgentExecutor for EchoExecutor {
    async fn execute(&self, context: &RequestContext) -> Result<MessageEvent, AgentError> {
        Ok(MessageEvent {
            content: context.user_input().to_string(),
            metadata: self.metadata.clone(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
