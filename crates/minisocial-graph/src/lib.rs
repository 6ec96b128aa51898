//! minisocial Graph — store adapter for the social graph.
//!
//! This crate owns every query the client issues. All reads and writes flow
//! through the [`SocialStore`] trait, which is implemented by the Neo4j
//! [`GraphClient`] and by the in-memory [`MemoryStore`].

pub mod client;
pub mod memory;
pub mod mutations;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use memory::MemoryStore;
pub use store::SocialStore;
