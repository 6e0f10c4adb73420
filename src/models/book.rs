use serde::{Deserialize, Serialize};

use super::Field;

/// A book record as the backend stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
    pub price: f64,
    pub publisher: String,
}

impl Book {
    /// Text shown for `field` in a table cell or a form input.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::ID => self.id.to_string(),
            Field::Title => self.title.clone(),
            Field::Author => self.author.clone(),
            Field::Genre => self.genre.clone(),
            Field::ISBN => self.isbn.clone(),
            Field::Price => self.price.to_string(),
            Field::Publisher => self.publisher.clone(),
        }
    }
}

/// Outbound body of a create or update request.
///
/// `id` and `price` are `None` when the draft text had no leading number,
/// which is sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookPayload {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
    pub price: Option<f64>,
    pub publisher: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Book, BookPayload};
    use crate::models::Field;

    #[test]
    fn deserialize_book() -> anyhow::Result<()> {
        let book = serde_json::from_value::<Book>(json!({
            "id": 1,
            "title": "A",
            "author": "B",
            "genre": "C",
            "isbn": "978-3-16-148410-0",
            "price": 12.5,
            "publisher": "D"
        }))?;

        assert_eq!(1, book.id);
        assert_eq!("12.5", book.value(Field::Price));
        assert_eq!("978-3-16-148410-0", book.value(Field::ISBN));

        Ok(())
    }

    #[test]
    fn whole_price_renders_without_fraction() -> anyhow::Result<()> {
        let book = Book {
            id: 3,
            title: "T".to_string(),
            author: "A".to_string(),
            genre: "G".to_string(),
            isbn: "I".to_string(),
            price: 10.0,
            publisher: "P".to_string(),
        };

        assert_eq!("10", book.value(Field::Price));

        Ok(())
    }

    #[test]
    fn serialize_uncoerced_payload_as_null() -> anyhow::Result<()> {
        let payload = BookPayload {
            id: None,
            title: "T".to_string(),
            author: "A".to_string(),
            genre: "G".to_string(),
            isbn: "I".to_string(),
            price: None,
            publisher: "P".to_string(),
        };

        let expected = json!({
            "id": null,
            "title": "T",
            "author": "A",
            "genre": "G",
            "isbn": "I",
            "price": null,
            "publisher": "P"
        });

        assert_eq!(expected, serde_json::to_value(&payload)?);

        Ok(())
    }
}
