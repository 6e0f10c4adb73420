use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::BookApi;
use crate::error::TransportError;
use crate::models::{Book, BookPayload};

/// In-memory backend that records every request it receives.
#[derive(Clone, Default)]
pub(crate) struct FakeApi {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    books: Vec<Book>,
    requests: Vec<String>,
    payloads: Vec<BookPayload>,
    failing: HashSet<&'static str>,
}

impl FakeApi {
    pub fn with_books(books: Vec<Book>) -> FakeApi {
        let fake = FakeApi::default();
        fake.inner.lock().unwrap().books = books;
        fake
    }

    /// Every later request to `route` (e.g. `"/all"`) answers 503.
    pub fn fail_on(&self, route: &'static str) {
        self.inner.lock().unwrap().failing.insert(route);
    }

    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn payloads(&self) -> Vec<BookPayload> {
        self.inner.lock().unwrap().payloads.clone()
    }

    pub fn books(&self) -> Vec<Book> {
        self.inner.lock().unwrap().books.clone()
    }

    fn record(&self, method: &str, route: &'static str, suffix: &str) -> Result<(), TransportError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(format!("{} {}{}", method, route, suffix));

        if inner.failing.contains(route) {
            return Err(TransportError::Status {
                status: 503,
                body: String::new(),
            });
        }

        Ok(())
    }
}

fn not_found(id: i64) -> TransportError {
    TransportError::Status {
        status: 404,
        body: format!("Book with ID {} not found", id),
    }
}

fn to_book(payload: &BookPayload) -> Result<Book, TransportError> {
    match (payload.id, payload.price) {
        (Some(id), Some(price)) => Ok(Book {
            id,
            title: payload.title.clone(),
            author: payload.author.clone(),
            genre: payload.genre.clone(),
            isbn: payload.isbn.clone(),
            price,
            publisher: payload.publisher.clone(),
        }),
        _ => Err(TransportError::Status {
            status: 400,
            body: "Invalid book data".to_string(),
        }),
    }
}

#[async_trait]
impl BookApi for FakeApi {
    async fn list_all(&self) -> Result<Vec<Book>, TransportError> {
        self.record("GET", "/all", "")?;

        Ok(self.books())
    }

    async fn create(&self, payload: &BookPayload) -> Result<(), TransportError> {
        self.record("POST", "/add", "")?;

        let mut inner = self.inner.lock().unwrap();
        inner.payloads.push(payload.clone());

        let book = to_book(payload)?;
        if inner.books.iter().any(|b| b.id == book.id) {
            return Err(TransportError::Status {
                status: 409,
                body: format!("Book with ID {} already exists", book.id),
            });
        }

        inner.books.push(book);

        Ok(())
    }

    async fn update(&self, payload: &BookPayload) -> Result<(), TransportError> {
        self.record("PUT", "/update", "")?;

        let mut inner = self.inner.lock().unwrap();
        inner.payloads.push(payload.clone());

        let book = to_book(payload)?;
        match inner.books.iter_mut().find(|b| b.id == book.id) {
            Some(slot) => {
                *slot = book;
                Ok(())
            }
            None => Err(not_found(book.id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<String, TransportError> {
        self.record("DELETE", "/delete", &format!("/{}", id))?;

        let mut inner = self.inner.lock().unwrap();
        let before = inner.books.len();
        inner.books.retain(|b| b.id != id);

        if inner.books.len() == before {
            return Err(not_found(id));
        }

        Ok(format!("Book with ID {} deleted successfully", id))
    }

    async fn get(&self, id: i64) -> Result<Book, TransportError> {
        self.record("GET", "/get", &format!("/{}", id))?;

        self.books()
            .into_iter()
            .find(|b| b.id == id)
            .ok_or_else(|| not_found(id))
    }
}
