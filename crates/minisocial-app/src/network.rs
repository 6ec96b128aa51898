//! User-facing social operations.
//!
//! Each operation is a thin pass-through to one adapter call. The store is
//! injected at construction; nothing here holds connection state of its own.
//! Names are trimmed the same way in every operation, so a person added as
//! `" Ana "` is reached again as `" Ana "` or `"Ana"`.

use minisocial_core::{Attribute, NetworkStats, Person, Result, SocialError};
use minisocial_graph::SocialStore;

/// The social operations, over any store backend.
pub struct SocialNetwork<S> {
    store: S,
}

impl<S: SocialStore> SocialNetwork<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a person. Every field is trimmed and must be non-empty.
    pub async fn add_person(&self, name: &str, city: &str, hobby: &str) -> Result<Person> {
        let person = Person::new(
            required("name", name)?,
            required("city", city)?,
            required("hobby", hobby)?,
        );
        self.store.create_person(&person).await?;
        tracing::info!(
            name = %person.name,
            city = %person.city,
            hobby = %person.hobby,
            "Person added"
        );
        Ok(person)
    }

    /// Everyone in the network, ordered by name.
    pub async fn list_people(&self) -> Result<Vec<Person>> {
        self.store.list_people().await
    }

    /// Exact-name lookup. `None` when nobody has that name.
    pub async fn search_person(&self, name: &str) -> Result<Option<Person>> {
        self.store.find_person(name.trim()).await
    }

    pub async fn add_friendship(&self, a: &str, b: &str) -> Result<()> {
        let (a, b) = (a.trim(), b.trim());
        self.store.create_friendship(a, b).await?;
        tracing::info!(a, b, "Friendship created");
        Ok(())
    }

    /// Friends of `name`, ordered by name.
    pub async fn friends_of(&self, name: &str) -> Result<Vec<Person>> {
        self.store.friends_of(name.trim()).await
    }

    pub async fn remove_friendship(&self, a: &str, b: &str) -> Result<()> {
        let (a, b) = (a.trim(), b.trim());
        self.store.delete_friendship(a, b).await?;
        tracing::info!(a, b, "Friendship deleted");
        Ok(())
    }

    /// People in the same city who are not already friends.
    pub async fn recommend_by_city(&self, name: &str) -> Result<Vec<Person>> {
        self.recommend(name, Attribute::City).await
    }

    /// People with the same hobby who are not already friends.
    pub async fn recommend_by_hobby(&self, name: &str) -> Result<Vec<Person>> {
        self.recommend(name, Attribute::Hobby).await
    }

    pub async fn recommend(&self, name: &str, attribute: Attribute) -> Result<Vec<Person>> {
        let name = name.trim();
        let people = self.store.recommend_by(name, attribute).await?;
        tracing::debug!(name, %attribute, count = people.len(), "Recommendations computed");
        Ok(people)
    }

    pub async fn statistics(&self) -> Result<NetworkStats> {
        Ok(NetworkStats {
            people: self.store.count_people().await?,
            friendships: self.store.count_friendship_edges().await?,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SocialError::InvalidArgument(format!("{field} is required")));
    }
    Ok(value.to_string())
}
