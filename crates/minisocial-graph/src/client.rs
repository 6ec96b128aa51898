//! Neo4j connection management and shared graph client.

use minisocial_core::SocialError;
use neo4rs::{query, ConfigBuilder, Graph, Query};

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Row decode error: {0}")]
    Decode(String),
}

impl GraphError {
    /// Convert into a [`SocialError`], tagging it with the adapter operation
    /// that failed.
    ///
    /// Transport faults map to `StoreUnavailable`; execution errors and rows
    /// with an unexpected shape map to `QueryFailed`.
    pub fn in_operation(self, operation: &'static str) -> SocialError {
        match self {
            Self::Connection(message) => SocialError::StoreUnavailable { operation, message },
            Self::Query(e) if is_transport_error(&e) => SocialError::StoreUnavailable {
                operation,
                message: e.to_string(),
            },
            Self::Query(e) => SocialError::QueryFailed {
                operation,
                message: e.to_string(),
            },
            Self::Decode(message) => SocialError::QueryFailed { operation, message },
        }
    }
}

fn is_transport_error(e: &neo4rs::Error) -> bool {
    matches!(
        e,
        neo4rs::Error::IOError { .. } | neo4rs::Error::ConnectionError { .. }
    )
}

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "password123".to_string(),
            max_connections: 4,
            fetch_size: 200,
        }
    }
}

/// Neo4j client backed by a small connection pool.
///
/// Each query checks a connection out of the pool and hands it back once its
/// result stream is drained, so no session outlives a single operation.
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j and verify the server answers.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let client = Self { graph };
        client.verify_connectivity().await?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(client)
    }

    /// Round-trip a trivial query to make sure the server is reachable and
    /// the credentials are accepted.
    pub async fn verify_connectivity(&self) -> Result<(), GraphError> {
        self.query_one(query("RETURN 1 AS ok"))
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?
            .ok_or_else(|| GraphError::Connection("empty reply to connectivity probe".into()))?;
        Ok(())
    }

    /// Execute a write-only query (CREATE, DELETE, SET).
    pub async fn run(&self, query: Query) -> Result<(), GraphError> {
        self.graph.run(query).await?;
        Ok(())
    }

    /// Execute a read query and collect all rows.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a read query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        Ok(stream.next().await?)
    }
}
