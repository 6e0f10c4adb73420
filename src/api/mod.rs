use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::{Book, BookPayload};

mod client;
#[cfg(test)]
pub(crate) mod fake;

pub use client::BookClient;

/// The REST backend under `{url}/bookapi`.
#[async_trait]
pub trait BookApi: Send + Sync {
    /// `GET /all`
    async fn list_all(&self) -> Result<Vec<Book>, TransportError>;

    /// `POST /add`
    async fn create(&self, payload: &BookPayload) -> Result<(), TransportError>;

    /// `PUT /update`
    async fn update(&self, payload: &BookPayload) -> Result<(), TransportError>;

    /// `DELETE /delete/{id}`, returns the server's message.
    async fn delete(&self, id: i64) -> Result<String, TransportError>;

    /// `GET /get/{id}`
    async fn get(&self, id: i64) -> Result<Book, TransportError>;
}
