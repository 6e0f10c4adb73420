pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod stage;
pub mod view;

pub use api::{BookApi, BookClient};
pub use config::Config;
pub use controller::BookManager;
pub use error::{BookError, TransportError};
pub use models::{Book, BookPayload, Draft, Field};
