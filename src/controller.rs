use log::{debug, trace};

use crate::api::BookApi;
use crate::error::BookError;
use crate::models::{Book, Draft, Field};
use crate::stage::{self, Operation, Stage};

/// State behind the book management screen.
///
/// Holds the draft form, the edit flag, the last status message, the
/// record found by [`BookManager::lookup`] and the cached collection.
/// Every operation takes `&mut self`, so one manager never has two
/// requests in flight.
pub struct BookManager<A> {
    api: A,
    books: Vec<Book>,
    draft: Draft,
    edit_mode: bool,
    fetched: Option<Book>,
    message: String,
}

impl<A: BookApi> BookManager<A> {
    pub fn new(api: A) -> BookManager<A> {
        BookManager {
            api,
            books: vec![],
            draft: Draft::default(),
            edit_mode: false,
            fetched: None,
            message: String::new(),
        }
    }

    /// Creates a manager and loads the collection once.
    pub async fn mount(api: A) -> BookManager<A> {
        let mut manager = BookManager::new(api);

        if let Err(err) = manager.refresh().await {
            // already reported by `refresh`, the screen mounts with an empty collection
            debug!("mounted without books: {}", err);
        }

        manager
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn fetched(&self) -> Option<&Book> {
        self.fetched.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), BookError> {
        let field = name.parse::<Field>()?;
        self.update_field(field, value);

        Ok(())
    }

    pub fn validate(&mut self) -> Result<(), BookError> {
        if let Err(err) = self.draft.validate() {
            self.message = err.to_string();
            return Err(err);
        }

        Ok(())
    }

    /// Validates the draft, then creates or updates the book depending on
    /// the edit flag. A draft that fails validation is never sent.
    pub async fn submit(&mut self) -> Result<(), BookError> {
        let operation = if self.edit_mode {
            Operation::Update
        } else {
            Operation::Add
        };

        stage::update(operation, Stage::Validating);
        if let Err(err) = self.validate() {
            stage::update(operation, Stage::Failed(&err));
            return Err(err);
        }

        stage::update(operation, Stage::Submitting);
        let payload = self.draft.to_payload();

        let r = match operation {
            Operation::Update => self.api.update(&payload).await,
            _ => self.api.create(&payload).await,
        };

        match r {
            Ok(()) => {
                stage::update(operation, Stage::Succeeded);

                self.message = match operation {
                    Operation::Update => "Book updated successfully.",
                    _ => "Book added successfully.",
                }
                .to_string();

                self.reset();

                // failures land in the message
                let _ = self.refresh().await;

                Ok(())
            }
            Err(err) => {
                let err = BookError::from(err);
                stage::update(operation, Stage::Failed(&err));

                let prefix = match operation {
                    Operation::Update => "Error updating book.",
                    _ => "Error adding book.",
                };
                self.message = format!("{} {}", prefix, err.detail());

                Err(err)
            }
        }
    }

    pub fn begin_edit(&mut self, book: &Book) {
        trace!("BookManager::begin_edit()");
        self.draft = Draft::from(book);
        self.edit_mode = true;
        self.message = format!("Editing book with ID {}", book.id);
    }

    pub fn cancel_edit(&mut self) {
        trace!("BookManager::cancel_edit()");
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = Draft::default();
        self.edit_mode = false;
    }

    /// Replaces the collection with the backend's. On failure the previous
    /// contents stay.
    pub async fn refresh(&mut self) -> Result<(), BookError> {
        stage::update(Operation::Refresh, Stage::Submitting);

        match self.api.list_all().await {
            Ok(books) => {
                debug!("books = {}", books.len());
                stage::update(Operation::Refresh, Stage::Succeeded);
                self.books = books;

                Ok(())
            }
            Err(err) => {
                let err = BookError::from(err);
                stage::update(Operation::Refresh, Stage::Failed(&err));
                self.message = format!("Failed to fetch books. {}", err.detail());

                Err(err)
            }
        }
    }

    pub async fn remove(&mut self, id: i64) -> Result<(), BookError> {
        let operation = Operation::Delete(id);
        stage::update(operation, Stage::Submitting);

        match self.api.delete(id).await {
            Ok(message) => {
                stage::update(operation, Stage::Succeeded);
                self.message = message;

                // failures land in the message
                let _ = self.refresh().await;

                Ok(())
            }
            Err(err) => {
                let err = BookError::from(err);
                stage::update(operation, Stage::Failed(&err));
                self.message = "Error deleting book.".to_string();

                Err(err)
            }
        }
    }

    /// Fetches one book into [`BookManager::fetched`]. The collection is
    /// left alone either way.
    pub async fn lookup(&mut self, id: i64) -> Result<(), BookError> {
        let operation = Operation::Lookup(id);
        stage::update(operation, Stage::Submitting);

        match self.api.get(id).await {
            Ok(book) => {
                stage::update(operation, Stage::Succeeded);
                self.fetched = Some(book);
                self.message.clear();

                Ok(())
            }
            Err(err) => {
                let err = BookError::from(err);
                stage::update(operation, Stage::Failed(&err));
                self.fetched = None;
                self.message = "Book not found.".to_string();

                Err(err)
            }
        }
    }
}
