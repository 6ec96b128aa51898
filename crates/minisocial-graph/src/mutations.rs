//! Write operations for the social graph.
//!
//! Each mutation is a single auto-committed Cypher statement. Friendships
//! are always written and removed as a pair of opposite FRIEND_OF edges in
//! the same statement, so a single-direction edge is never left behind.

use minisocial_core::Person;
use neo4rs::query;

use crate::client::{GraphClient, GraphError};
use crate::queries::count_from_row;

impl GraphClient {
    /// Create a Person node unless one with the same name already exists.
    /// Returns whether a node was created.
    pub async fn insert_person(&self, person: &Person) -> Result<bool, GraphError> {
        let q = query(
            "OPTIONAL MATCH (existing:Person {name: $name})
             WITH existing WHERE existing IS NULL
             CREATE (p:Person {name: $name, city: $city, hobby: $hobby})
             RETURN count(p) AS cnt",
        )
        .param("name", person.name.clone())
        .param("city", person.city.clone())
        .param("hobby", person.hobby.clone());

        let created = count_from_row(self.query_one(q).await?)?;
        tracing::debug!(name = %person.name, created, "insert_person");
        Ok(created > 0)
    }

    /// Create both FRIEND_OF edges between two existing, unconnected people.
    /// Returns whether the pair was created.
    pub async fn insert_friendship(&self, a: &str, b: &str) -> Result<bool, GraphError> {
        let q = query(
            "MATCH (a:Person {name: $name1}), (b:Person {name: $name2})
             WHERE a <> b AND NOT (a)-[:FRIEND_OF]-(b)
             CREATE (a)-[:FRIEND_OF]->(b), (b)-[:FRIEND_OF]->(a)
             RETURN count(*) AS cnt",
        )
        .param("name1", a.to_string())
        .param("name2", b.to_string());

        let created = count_from_row(self.query_one(q).await?)?;
        tracing::debug!(a, b, created, "insert_friendship");
        Ok(created > 0)
    }

    /// Delete every FRIEND_OF edge between two people, in both directions.
    /// Returns the number of directed edges removed.
    pub async fn remove_friendship(&self, a: &str, b: &str) -> Result<i64, GraphError> {
        let q = query(
            "MATCH (a:Person {name: $name1})-[r:FRIEND_OF]-(b:Person {name: $name2})
             DELETE r
             RETURN count(r) AS cnt",
        )
        .param("name1", a.to_string())
        .param("name2", b.to_string());

        let removed = count_from_row(self.query_one(q).await?)?;
        tracing::debug!(a, b, removed, "remove_friendship");
        Ok(removed)
    }
}
