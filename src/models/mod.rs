mod book;
mod draft;
mod field;

pub use book::{Book, BookPayload};
pub use draft::Draft;
pub use field::Field;
