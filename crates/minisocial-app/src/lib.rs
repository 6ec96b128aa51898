//! minisocial-app: Social operations and console client for the minisocial graph.
//!
//! [`SocialNetwork`] wraps any [`SocialStore`](minisocial_graph::SocialStore)
//! and exposes the user-facing operations; the [`menu`] module drives them
//! from a numbered text menu and [`render`] formats their results.

pub mod config;
pub mod menu;
pub mod network;
pub mod render;

pub use network::SocialNetwork;
