//! Typed store errors and their GraphQL mapping.

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Errors produced by [`MessageStore`](crate::store::MessageStore) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The supplied index is negative or past the end of the list.
    #[error("invalid index: {index}")]
    InvalidIndex { index: i64 },
}

impl StoreError {
    /// Stable machine-readable code exposed in GraphQL error extensions.
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidIndex { .. } => "INVALID_INDEX",
        }
    }
}

impl ErrorExtensions for StoreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", self.error_code());
            match self {
                Self::InvalidIndex { index } => ext.set("index", *index),
            }
        })
    }
}
