use thiserror::Error;

/// Errors surfaced by the store adapter and the social operations.
#[derive(Error, Debug)]
pub enum SocialError {
    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{operation}: graph store unavailable: {message}")]
    StoreUnavailable {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: query failed: {message}")]
    QueryFailed {
        operation: &'static str,
        message: String,
    },
}

impl SocialError {
    pub fn person_exists(name: &str) -> Self {
        Self::AlreadyExists(format!("Person '{name}'"))
    }

    pub fn friendship_exists(a: &str, b: &str) -> Self {
        Self::AlreadyExists(format!("Friendship between '{a}' and '{b}'"))
    }

    pub fn friendship_not_found(a: &str, b: &str) -> Self {
        Self::NotFound(format!("Friendship between '{a}' and '{b}'"))
    }

    pub fn endpoints_not_found(a: &str, b: &str) -> Self {
        Self::NotFound(format!("One or both people ('{a}', '{b}')"))
    }
}

pub type Result<T> = std::result::Result<T, SocialError>;
