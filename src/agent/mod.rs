//! Agent domain: executors and the registry of mounted agents.

pub mod executor;
pub mod registry;

pub use executor::{AgentError, AgentExecutor, EchoExecutor, FixedReplyExecutor, RequestContext};
pub use registry::{AgentRegistration, AgentRegistry, RegistryError};
