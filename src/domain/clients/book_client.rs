use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::book::{Book, BookInput};

/// Failure classes a [`BookClient`] call can resolve to
///
/// Every upstream outcome collapses into one of these terminal
/// conditions; transport-level detail never crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The requested book id does not exist upstream
    #[error("Book with id {0} not found")]
    NotFound(i64),

    /// The payload failed validation, one entry per violated constraint
    #[error("Input was malformed")]
    InvalidInput { errors: Vec<String> },

    /// Any other failure: connectivity, unexpected status, undecodable body
    #[error("An unknown error occurred.")]
    Unknown,
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Client trait for the upstream book API
///
/// Defines the contract for forwarding book operations to the backing
/// API. Implementations own URL construction and outcome classification;
/// callers only ever see [`ClientError`] terms. Each call is a single
/// independent request/response round trip.
#[async_trait]
pub trait BookClient: Send + Sync {
    /// Fetch every book
    async fn find_all(&self) -> ClientResult<Vec<Book>>;

    /// Fetch all books with the given title (possibly none)
    async fn find_by_title(&self, title: &str) -> ClientResult<Vec<Book>>;

    /// Fetch all books by the given author (possibly none)
    async fn find_by_author(&self, author: &str) -> ClientResult<Vec<Book>>;

    /// Fetch a single book by id
    async fn find_by_id(&self, id: i64) -> ClientResult<Book>;

    /// Create a new book; the upstream assigns the id
    async fn create(&self, input: BookInput) -> ClientResult<Book>;

    /// Replace the book with the given id
    async fn update(&self, id: i64, input: BookInput) -> ClientResult<Book>;

    /// Delete the book with the given id, returning it as the upstream
    /// last reported it
    async fn delete(&self, id: i64) -> ClientResult<Book>;
}

/// Shared client handle injected into the router as state
pub type DynBookClient = Arc<dyn BookClient>;
