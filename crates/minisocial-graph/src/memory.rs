//! In-memory implementation of [`SocialStore`].
//!
//! Keeps people in a name-ordered map and friendships as directed edges, the
//! same shape the Neo4j backend stores. Used by tests and by the binary's
//! `--in-memory` mode.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use minisocial_core::{Attribute, Person, Result};
use tokio::sync::RwLock;

use crate::store::SocialStore;

#[derive(Default)]
struct Inner {
    people: BTreeMap<String, Person>,
    /// Directed FRIEND_OF edges as (from, to).
    edges: BTreeSet<(String, String)>,
}

impl Inner {
    fn connected(&self, a: &str, b: &str) -> bool {
        self.edges.contains(&(a.to_string(), b.to_string()))
            || self.edges.contains(&(b.to_string(), a.to_string()))
    }
}

/// A social graph held entirely in process memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SocialStore for MemoryStore {
    async fn person_exists(&self, name: &str) -> Result<bool> {
        Ok(self.inner.read().await.people.contains_key(name))
    }

    async fn insert_person(&self, person: &Person) -> Result<bool> {
        let mut inner = self.inner.write().await;
        if inner.people.contains_key(&person.name) {
            return Ok(false);
        }
        inner.people.insert(person.name.clone(), person.clone());
        Ok(true)
    }

    async fn list_people(&self) -> Result<Vec<Person>> {
        Ok(self.inner.read().await.people.values().cloned().collect())
    }

    async fn find_person(&self, name: &str) -> Result<Option<Person>> {
        Ok(self.inner.read().await.people.get(name).cloned())
    }

    async fn friendship_exists(&self, a: &str, b: &str) -> Result<bool> {
        Ok(self.inner.read().await.connected(a, b))
    }

    async fn insert_friendship(&self, a: &str, b: &str) -> Result<bool> {
        let mut inner = self.inner.write().await;
        if a == b
            || !inner.people.contains_key(a)
            || !inner.people.contains_key(b)
            || inner.connected(a, b)
        {
            return Ok(false);
        }
        inner.edges.insert((a.to_string(), b.to_string()));
        inner.edges.insert((b.to_string(), a.to_string()));
        Ok(true)
    }

    async fn remove_friendship(&self, a: &str, b: &str) -> Result<i64> {
        let mut inner = self.inner.write().await;
        let mut removed = 0;
        for edge in [(a.to_string(), b.to_string()), (b.to_string(), a.to_string())] {
            if inner.edges.remove(&edge) {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn friends_of(&self, name: &str) -> Result<Vec<Person>> {
        let inner = self.inner.read().await;
        // Edges are ordered by (from, to), so targets come out sorted by name.
        Ok(inner
            .edges
            .iter()
            .filter(|(from, _)| from == name)
            .filter_map(|(_, to)| inner.people.get(to).cloned())
            .collect())
    }

    async fn recommend_by(&self, name: &str, attribute: Attribute) -> Result<Vec<Person>> {
        let inner = self.inner.read().await;
        let Some(subject) = inner.people.get(name) else {
            return Ok(Vec::new());
        };
        let value = subject.attribute(attribute);
        Ok(inner
            .people
            .values()
            .filter(|p| p.name != subject.name)
            .filter(|p| p.attribute(attribute) == value)
            .filter(|p| !inner.connected(&subject.name, &p.name))
            .cloned()
            .collect())
    }

    async fn count_people(&self) -> Result<i64> {
        Ok(self.inner.read().await.people.len() as i64)
    }

    async fn count_directed_friend_edges(&self) -> Result<i64> {
        Ok(self.inner.read().await.edges.len() as i64)
    }
}
