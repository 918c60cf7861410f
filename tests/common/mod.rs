//! Common test utilities.

use std::collections::HashMap;

use agora::agent::AgentRegistry;
use agora::config::{AgentBehavior, AgentConfig, Config};
use agora::server::AppState;

/// A fixed-reply agent mount.
pub fn fixed_agent(name: &str, path: &str, reply: &str) -> AgentConfig {
    AgentConfig {
        name: name.to_string(),
        description: format!("{name} (test)"),
        path: path.to_string(),
        version: "1.0.0".to_string(),
        behavior: AgentBehavior::Fixed,
        reply: Some(reply.to_string()),
        metadata: HashMap::new(),
        skills: Vec::new(),
    }
}

/// An echo agent mount.
pub fn echo_agent(name: &str, path: &str) -> AgentConfig {
    AgentConfig {
        name: name.to_string(),
        description: format!("{name} (test)"),
        path: path.to_string(),
        version: "1.0.0".to_string(),
        behavior: AgentBehavior::Echo,
        reply: None,
        metadata: HashMap::new(),
        skills: Vec::new(),
    }
}

/// Default server settings with the given agent roster.
pub fn config_with_agents(agents: Vec<AgentConfig>) -> Config {
    let mut config = Config::default();
    config.agents = agents;
    config
}

/// Create a test `AppState` from a config.
pub fn test_state(config: &Config) -> AppState {
    let registry = AgentRegistry::from_config(config).unwrap();
    AppState::new(registry)
}
