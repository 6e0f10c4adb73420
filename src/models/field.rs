use std::fmt;
use std::str::FromStr;

use crate::error::BookError;

/// Fields of a book record, in declaration order.
///
/// Validation reports the first empty field in this order, and the
/// collection table uses it for its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ID,
    Title,
    Author,
    Genre,
    ISBN,
    Price,
    Publisher,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::ID,
        Field::Title,
        Field::Author,
        Field::Genre,
        Field::ISBN,
        Field::Price,
        Field::Publisher,
    ];

    /// Name used on the wire and in form inputs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ID => "id",
            Field::Title => "title",
            Field::Author => "author",
            Field::Genre => "genre",
            Field::ISBN => "isbn",
            Field::Price => "price",
            Field::Publisher => "publisher",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::ID => "ID",
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Genre => "Genre",
            Field::ISBN => "ISBN",
            Field::Price => "Price",
            Field::Publisher => "Publisher",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| BookError::UnknownField(s.to_string()))
    }
}
