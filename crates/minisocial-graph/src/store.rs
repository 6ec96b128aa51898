//! The store adapter contract.
//!
//! Backends implement the primitive queries; the check-then-act rules for
//! people and friendships are provided methods so that every backend reports
//! the same error for the same situation.

use async_trait::async_trait;
use minisocial_core::{Attribute, Person, Result, SocialError};

use crate::client::GraphClient;

/// Queries against a social graph backend.
#[async_trait]
pub trait SocialStore: Send + Sync {
    // ── Primitives ───────────────────────────────────────────────

    async fn person_exists(&self, name: &str) -> Result<bool>;

    /// Insert a person unless the name is taken. Returns whether it was created.
    async fn insert_person(&self, person: &Person) -> Result<bool>;

    /// All people, ordered by name.
    async fn list_people(&self) -> Result<Vec<Person>>;

    async fn find_person(&self, name: &str) -> Result<Option<Person>>;

    /// True if an edge joins the pair in either direction.
    async fn friendship_exists(&self, a: &str, b: &str) -> Result<bool>;

    /// Insert both directed edges in one write, only if both people exist,
    /// are distinct, and are not yet connected. Returns whether it was created.
    async fn insert_friendship(&self, a: &str, b: &str) -> Result<bool>;

    /// Remove every edge between the pair. Returns the directed edge count removed.
    async fn remove_friendship(&self, a: &str, b: &str) -> Result<i64>;

    /// Outbound-edge targets, ordered by name.
    async fn friends_of(&self, name: &str) -> Result<Vec<Person>>;

    /// People sharing `attribute` with `name`, excluding `name` and anyone
    /// connected to it, ordered by name.
    async fn recommend_by(&self, name: &str, attribute: Attribute) -> Result<Vec<Person>>;

    async fn count_people(&self) -> Result<i64>;

    async fn count_directed_friend_edges(&self) -> Result<i64>;

    // ── Contract ─────────────────────────────────────────────────

    /// Create a person. `AlreadyExists` if the name is taken.
    async fn create_person(&self, person: &Person) -> Result<()> {
        if self.person_exists(&person.name).await? {
            return Err(SocialError::person_exists(&person.name));
        }
        // Another writer can take the name between the check and the insert.
        if !self.insert_person(person).await? {
            return Err(SocialError::person_exists(&person.name));
        }
        Ok(())
    }

    /// Befriend two distinct, existing, not-yet-connected people.
    async fn create_friendship(&self, a: &str, b: &str) -> Result<()> {
        if a == b {
            return Err(SocialError::InvalidArgument(
                "cannot create friendship with oneself".into(),
            ));
        }
        if !self.person_exists(a).await? || !self.person_exists(b).await? {
            return Err(SocialError::endpoints_not_found(a, b));
        }
        if self.friendship_exists(a, b).await? {
            return Err(SocialError::friendship_exists(a, b));
        }
        if !self.insert_friendship(a, b).await? {
            return Err(SocialError::friendship_exists(a, b));
        }
        Ok(())
    }

    /// Remove a friendship in both directions. `NotFound` if nothing was removed.
    async fn delete_friendship(&self, a: &str, b: &str) -> Result<()> {
        if self.remove_friendship(a, b).await? == 0 {
            return Err(SocialError::friendship_not_found(a, b));
        }
        Ok(())
    }

    /// Undirected friendship count.
    async fn count_friendship_edges(&self) -> Result<i64> {
        Ok(self.count_directed_friend_edges().await? / 2)
    }
}

/// Every method delegates to the inherent query on `GraphClient`, naming the
/// operation in any error.
#[async_trait]
impl SocialStore for GraphClient {
    async fn person_exists(&self, name: &str) -> Result<bool> {
        GraphClient::person_exists(self, name)
            .await
            .map_err(|e| e.in_operation("person_exists"))
    }

    async fn insert_person(&self, person: &Person) -> Result<bool> {
        GraphClient::insert_person(self, person)
            .await
            .map_err(|e| e.in_operation("create_person"))
    }

    async fn list_people(&self) -> Result<Vec<Person>> {
        GraphClient::list_people(self)
            .await
            .map_err(|e| e.in_operation("list_people"))
    }

    async fn find_person(&self, name: &str) -> Result<Option<Person>> {
        GraphClient::find_person(self, name)
            .await
            .map_err(|e| e.in_operation("find_person"))
    }

    async fn friendship_exists(&self, a: &str, b: &str) -> Result<bool> {
        GraphClient::friendship_exists(self, a, b)
            .await
            .map_err(|e| e.in_operation("friendship_exists"))
    }

    async fn insert_friendship(&self, a: &str, b: &str) -> Result<bool> {
        GraphClient::insert_friendship(self, a, b)
            .await
            .map_err(|e| e.in_operation("create_friendship"))
    }

    async fn remove_friendship(&self, a: &str, b: &str) -> Result<i64> {
        GraphClient::remove_friendship(self, a, b)
            .await
            .map_err(|e| e.in_operation("delete_friendship"))
    }

    async fn friends_of(&self, name: &str) -> Result<Vec<Person>> {
        GraphClient::friends_of(self, name)
            .await
            .map_err(|e| e.in_operation("friends_of"))
    }

    async fn recommend_by(&self, name: &str, attribute: Attribute) -> Result<Vec<Person>> {
        GraphClient::recommend_by(self, name, attribute)
            .await
            .map_err(|e| e.in_operation("recommend_by"))
    }

    async fn count_people(&self) -> Result<i64> {
        GraphClient::count_people(self)
            .await
            .map_err(|e| e.in_operation("count_people"))
    }

    async fn count_directed_friend_edges(&self) -> Result<i64> {
        GraphClient::count_directed_friend_edges(self)
            .await
            .map_err(|e| e.in_operation("count_friendship_edges"))
    }
}
