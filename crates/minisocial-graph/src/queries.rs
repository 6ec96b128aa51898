//! Read operations against the social graph.
//!
//! Every query returns scalar columns (`name`, `city`, `hobby`, `cnt`) rather
//! than whole nodes, and each row is decoded into a typed record here.

use minisocial_core::{Attribute, Person};
use neo4rs::{query, Row};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    // ── Existence Checks ─────────────────────────────────────────

    /// True if a Person with exactly this name exists.
    pub async fn person_exists(&self, name: &str) -> Result<bool, GraphError> {
        let q = query(
            "MATCH (p:Person {name: $name})
             RETURN count(p) AS cnt",
        )
        .param("name", name.to_string());

        Ok(count_from_row(self.query_one(q).await?)? > 0)
    }

    /// True if any FRIEND_OF edge connects the two people, in either direction.
    pub async fn friendship_exists(&self, a: &str, b: &str) -> Result<bool, GraphError> {
        let q = query(
            "MATCH (a:Person {name: $name1})-[r:FRIEND_OF]-(b:Person {name: $name2})
             RETURN count(r) AS cnt",
        )
        .param("name1", a.to_string())
        .param("name2", b.to_string());

        Ok(count_from_row(self.query_one(q).await?)? > 0)
    }

    // ── Person Lookups ───────────────────────────────────────────

    /// All people, ordered by name.
    pub async fn list_people(&self) -> Result<Vec<Person>, GraphError> {
        let q = query(
            "MATCH (p:Person)
             RETURN p.name AS name, p.city AS city, p.hobby AS hobby
             ORDER BY p.name",
        );

        people_from_rows(self.query_rows(q).await?)
    }

    /// Exact-name lookup.
    pub async fn find_person(&self, name: &str) -> Result<Option<Person>, GraphError> {
        let q = query(
            "MATCH (p:Person {name: $name})
             RETURN p.name AS name, p.city AS city, p.hobby AS hobby
             LIMIT 1",
        )
        .param("name", name.to_string());

        self.query_one(q)
            .await?
            .map(|row| person_from_row(&row))
            .transpose()
    }

    // ── Neighbor Queries ─────────────────────────────────────────

    /// Targets of the person's outbound FRIEND_OF edges, ordered by name.
    pub async fn friends_of(&self, name: &str) -> Result<Vec<Person>, GraphError> {
        let q = query(
            "MATCH (p:Person {name: $name})-[:FRIEND_OF]->(friend:Person)
             RETURN friend.name AS name, friend.city AS city, friend.hobby AS hobby
             ORDER BY friend.name",
        )
        .param("name", name.to_string());

        people_from_rows(self.query_rows(q).await?)
    }

    /// People sharing `attribute` with `name`, minus the subject and anyone
    /// already connected to them.
    pub async fn recommend_by(
        &self,
        name: &str,
        attribute: Attribute,
    ) -> Result<Vec<Person>, GraphError> {
        let prop = attribute.property();
        let cypher = format!(
            "MATCH (p:Person {{name: $name}})
             MATCH (candidate:Person)
             WHERE candidate.{prop} = p.{prop}
               AND candidate <> p
               AND NOT (p)-[:FRIEND_OF]-(candidate)
             RETURN candidate.name AS name, candidate.city AS city, candidate.hobby AS hobby
             ORDER BY candidate.name"
        );

        let q = query(&cypher).param("name", name.to_string());

        people_from_rows(self.query_rows(q).await?)
    }

    // ── Aggregates ───────────────────────────────────────────────

    /// Count Person nodes.
    pub async fn count_people(&self) -> Result<i64, GraphError> {
        let q = query(
            "MATCH (p:Person)
             RETURN count(p) AS cnt",
        );

        count_from_row(self.query_one(q).await?)
    }

    /// Count directed FRIEND_OF edges (two per friendship).
    pub async fn count_directed_friend_edges(&self) -> Result<i64, GraphError> {
        let q = query(
            "MATCH (:Person)-[r:FRIEND_OF]->(:Person)
             RETURN count(r) AS cnt",
        );

        count_from_row(self.query_one(q).await?)
    }
}

// ── Row Decoding ─────────────────────────────────────────────────

/// Decode a `name, city, hobby` row into a Person.
fn person_from_row(row: &Row) -> Result<Person, GraphError> {
    Ok(Person {
        name: string_column(row, "name")?,
        city: string_column(row, "city")?,
        hobby: string_column(row, "hobby")?,
    })
}

fn people_from_rows(rows: Vec<Row>) -> Result<Vec<Person>, GraphError> {
    rows.iter().map(person_from_row).collect()
}

fn string_column(row: &Row, column: &str) -> Result<String, GraphError> {
    row.get::<String>(column)
        .map_err(|e| GraphError::Decode(format!("Failed to decode column `{column}`: {e}")))
}

/// Read the `cnt` column of an aggregate row. Aggregates always yield
/// exactly one row, so a missing row is a shape error too.
pub(crate) fn count_from_row(row: Option<Row>) -> Result<i64, GraphError> {
    let row = row.ok_or_else(|| GraphError::Decode("Aggregate query returned no rows".into()))?;
    row.get::<i64>("cnt")
        .map_err(|e| GraphError::Decode(format!("Failed to decode column `cnt`: {e}")))
}
