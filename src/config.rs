use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Config (root)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Agents to mount, in catalog order.
    #[serde(default = "default_agents")]
    pub agents: Vec<AgentConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            agents: default_agents(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Base URL advertised in catalog entries and agent cards, without a
    /// trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        match &self.server.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}:{}", self.server.host, self.server.port),
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

/// Default base URL the client commands talk to.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9999";

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    9999
}

fn default_request_timeout() -> u64 {
    30
}

fn default_agent_version() -> String {
    "1.0.0".to_string()
}

/// The demo roster mounted when no config file is present: one fixed-reply
/// agent and one echo agent.
fn default_agents() -> Vec<AgentConfig> {
    vec![
        AgentConfig {
            name: "Hello World Agent".to_string(),
            description: "Just a hello world agent".to_string(),
            path: "/agents/hello".to_string(),
            version: default_agent_version(),
            behavior: AgentBehavior::Fixed,
            reply: Some("Hello, world!".to_string()),
            metadata: HashMap::new(),
            skills: vec![SkillConfig {
                id: "hello_world".to_string(),
                name: "Returns hello world".to_string(),
                description: "Just returns hello world".to_string(),
                tags: vec!["hello world".to_string()],
                examples: vec!["hi".to_string(), "hello world".to_string()],
            }],
        },
        AgentConfig {
            name: "Echo Agent".to_string(),
            description: "Echoes the message back to the caller".to_string(),
            path: "/agents/echo".to_string(),
            version: default_agent_version(),
            behavior: AgentBehavior::Echo,
            reply: None,
            metadata: HashMap::new(),
            skills: vec![SkillConfig {
                id: "echo".to_string(),
                name: "Echoes input".to_string(),
                description: "Returns whatever text it receives".to_string(),
                tags: vec!["echo".to_string()],
                examples: vec!["hi".to_string(), "hello world".to_string()],
            }],
        },
    ]
}

// ============================================================================
// ServerConfig
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Base URL advertised in the catalog. Set this when the server sits
    /// behind a proxy or a hostname that differs from the bind address.
    /// Defaults to `http://<host>:<port>`.
    #[serde(default)]
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            public_url: None,
        }
    }
}

// ============================================================================
// AgentConfig
// ============================================================================

/// One agent mount: catalog identity plus the behavior behind it.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Agent name, unique within the catalog.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Mount path, unique within the catalog (e.g. `/agents/hello`).
    pub path: String,
    #[serde(default = "default_agent_version")]
    pub version: String,
    #[serde(default)]
    pub behavior: AgentBehavior,
    /// Reply text for `fixed` agents. Required when `behavior: fixed`.
    #[serde(default)]
    pub reply: Option<String>,
    /// Metadata attached to every message the agent returns.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub skills: Vec<SkillConfig>,
}

/// How an agent answers messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentBehavior {
    /// Return the configured `reply` for every message.
    #[default]
    Fixed,
    /// Return the caller's own text.
    Echo,
}

/// A skill advertised on the agent's card.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.server.request_timeout_seconds, 30);
        assert!(config.server.public_url.is_none());
        assert_eq!(config.agents.len(), 2);
        assert_eq!(config.agents[0].name, "Hello World Agent");
        assert_eq!(config.agents[0].behavior, AgentBehavior::Fixed);
        assert_eq!(config.agents[1].name, "Echo Agent");
        assert_eq!(config.agents[1].behavior, AgentBehavior::Echo);
    }

    #[test]
    fn test_base_url_from_host_and_port() {
        let config = Config::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_base_url_prefers_public_url() {
        let mut config = Config::default();
        config.server.public_url = Some("https://agents.example.com/".to_string());
        assert_eq!(config.base_url(), "https://agents.example.com");
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_defaults() {
        let tmp_dir = TempDir::new().unwrap();
        let missing_path = tmp_dir.path().join("missing-config.yaml");
        let config = Config::load(missing_path.to_str().unwrap()).await.unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.agents.len(), 2);
    }

    #[tokio::test]
    async fn test_load_valid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
server:
  host: "0.0.0.0"
  port: 3000
  request_timeout_seconds: 60
agents:
  - name: "Greeter"
    description: "Greets"
    path: /agents/greeter
    reply: "Greetings!"
  - name: "Parrot"
    path: /agents/parrot
    behavior: echo
"#
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.request_timeout_seconds, 60);
        assert_eq!(config.agents.len(), 2);
        assert_eq!(config.agents[0].name, "Greeter");
        assert_eq!(config.agents[0].behavior, AgentBehavior::Fixed);
        assert_eq!(config.agents[0].reply.as_deref(), Some("Greetings!"));
        assert_eq!(config.agents[1].behavior, AgentBehavior::Echo);
        assert!(config.agents[1].reply.is_none());
    }

    #[tokio::test]
    async fn test_load_partial_yaml_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
server:
  port: 9000
"#
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(config.server.host, "127.0.0.1"); // default
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.request_timeout_seconds, 30); // default
        assert_eq!(config.agents.len(), 2); // default roster
    }

    #[tokio::test]
    async fn test_load_explicit_empty_roster() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "agents: []").unwrap();

        let config = Config::load(file.path().to_str().unwrap()).await.unwrap();
        assert!(config.agents.is_empty());
    }

    #[tokio::test]
    async fn test_load_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "agents: [unclosed").unwrap();

        let result = Config::load(file.path().to_str().unwrap()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_config_error_display() {
        let io_error = ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "test",
        ));
        assert!(io_error.to_string().contains("failed to read config file"));
    }
}
