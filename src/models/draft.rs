use log::debug;

use super::{Book, BookPayload, Field};
use crate::error::BookError;

/// Form inputs for one book. Every value is kept as typed text until
/// [`Draft::to_payload`] coerces the numeric fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
    pub price: String,
    pub publisher: String,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ID => &self.id,
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Genre => &self.genre,
            Field::ISBN => &self.isbn,
            Field::Price => &self.price,
            Field::Publisher => &self.publisher,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::ID => &mut self.id,
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Genre => &mut self.genre,
            Field::ISBN => &mut self.isbn,
            Field::Price => &mut self.price,
            Field::Publisher => &mut self.publisher,
        };

        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }

    /// Fails on the first field, in declaration order, that is blank
    /// after trimming. Numeric fields are only checked for presence.
    pub fn validate(&self) -> Result<(), BookError> {
        match Field::ALL
            .iter()
            .find(|field| self.get(**field).trim().is_empty())
        {
            Some(field) => Err(BookError::Validation(*field)),
            None => Ok(()),
        }
    }

    pub fn to_payload(&self) -> BookPayload {
        let payload = BookPayload {
            id: parse_int(&self.id),
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            isbn: self.isbn.clone(),
            price: parse_float(&self.price),
            publisher: self.publisher.clone(),
        };

        debug!("payload = {:?}", payload);

        payload
    }
}

impl From<&Book> for Draft {
    fn from(book: &Book) -> Self {
        let mut draft = Draft::default();

        for field in Field::ALL.iter() {
            draft.set(*field, book.value(*field));
        }

        draft
    }
}

/// Parses the leading integer of `s`, ignoring anything after it.
/// `"12abc"` and `"12.7"` both give `12`. Values outside `i64` give `None`.
pub(crate) fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        return None;
    }

    s[..end].parse::<i64>().ok()
}

/// Parses the leading decimal number of `s`, ignoring anything after it.
pub(crate) fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            Some(f64::NEG_INFINITY)
        } else {
            Some(f64::INFINITY)
        };
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }

    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }

        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }

        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].trim_end_matches('.').parse::<f64>().ok()
}
