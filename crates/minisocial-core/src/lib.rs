//! minisocial-core: Shared types and error handling for the minisocial client.
//!
//! This crate provides the foundational types used by every other crate:
//! - `Person` records and the `Attribute` a recommendation matches on
//! - `NetworkStats` aggregates
//! - The `SocialError` type surfaced by the adapter and operations layers

pub mod error;
pub mod types;

pub use error::{Result, SocialError};
pub use types::{Attribute, NetworkStats, Person};
