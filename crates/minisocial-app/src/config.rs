//! Configuration for the minisocial client.
//!
//! Loaded from (in priority order):
//! 1. Environment variables (`MINISOCIAL_` prefix, `__` between nested keys,
//!    e.g. `MINISOCIAL_NEO4J__URI`)
//! 2. Config file (`minisocial.toml` by default)
//! 3. Defaults

use minisocial_graph::GraphConfig;
use serde::Deserialize;

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub neo4j: Neo4jSettings,
}

/// The `[neo4j]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jSettings {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Connection pool size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Rows fetched per round trip.
    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

impl AppConfig {
    /// Load configuration from `<file_prefix>.{toml,yaml,json,...}` (optional)
    /// and `MINISOCIAL_*` environment variables.
    pub fn load(file_prefix: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("MINISOCIAL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig {
            uri: self.neo4j.uri.clone(),
            user: self.neo4j.user.clone(),
            password: self.neo4j.password.clone(),
            max_connections: self.neo4j.max_connections,
            fetch_size: self.neo4j.fetch_size,
        }
    }
}

fn default_uri() -> String {
    GraphConfig::default().uri
}

fn default_user() -> String {
    GraphConfig::default().user
}

fn default_password() -> String {
    GraphConfig::default().password
}

fn default_max_connections() -> u32 {
    GraphConfig::default().max_connections
}

fn default_fetch_size() -> usize {
    GraphConfig::default().fetch_size
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_graph_config() {
        let graph = AppConfig::default().graph_config();
        let expected = GraphConfig::default();
        assert_eq!(graph.uri, expected.uri);
        assert_eq!(graph.user, expected.user);
        assert_eq!(graph.password, expected.password);
        assert_eq!(graph.max_connections, expected.max_connections);
        assert_eq!(graph.fetch_size, expected.fetch_size);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("absent");
        let cfg = AppConfig::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(cfg.neo4j.uri, "bolt://localhost:7687");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("minisocial.toml"),
            concat!(
                "[neo4j]\n",
                "uri = \"bolt://graph.internal:7687\"\n",
                "password = \"s3cret\"\n",
                "max_connections = 2\n",
            ),
        )
        .unwrap();

        let prefix = dir.path().join("minisocial");
        let cfg = AppConfig::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(cfg.neo4j.uri, "bolt://graph.internal:7687");
        assert_eq!(cfg.neo4j.password, "s3cret");
        assert_eq!(cfg.neo4j.max_connections, 2);
        // Untouched keys keep their defaults.
        assert_eq!(cfg.neo4j.user, "neo4j");
        assert_eq!(cfg.neo4j.fetch_size, 200);
    }
}
