//! Core domain types for the social graph.
//!
//! A `Person` is a `:Person` node keyed by name; a friendship is a pair of
//! opposite `:FRIEND_OF` edges between two distinct people.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SocialError;

// ── Person ────────────────────────────────────────────────────────

/// A member of the network. `name` is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub city: String,
    pub hobby: String,
}

impl Person {
    pub fn new(name: impl Into<String>, city: impl Into<String>, hobby: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            hobby: hobby.into(),
        }
    }

    /// The value this person holds for the given attribute.
    pub fn attribute(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::City => &self.city,
            Attribute::Hobby => &self.hobby,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (City: {}, Hobby: {})", self.name, self.city, self.hobby)
    }
}

// ── Attribute ─────────────────────────────────────────────────────

/// A person property that recommendations can match on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    City,
    Hobby,
}

impl Attribute {
    /// Property key on the `Person` node.
    pub fn property(&self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Hobby => "hobby",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

impl FromStr for Attribute {
    type Err = SocialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "city" => Ok(Self::City),
            "hobby" => Ok(Self::Hobby),
            other => Err(SocialError::InvalidArgument(format!(
                "unknown attribute '{other}', expected city or hobby"
            ))),
        }
    }
}

// ── Statistics ────────────────────────────────────────────────────

/// Aggregate counts over the whole network.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkStats {
    pub people: i64,
    /// Undirected friendships (directed `FRIEND_OF` edges / 2).
    pub friendships: i64,
}
