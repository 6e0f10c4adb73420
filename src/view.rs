//! Plain-text rendering of the book management screen.

use std::fmt::Write;

use crate::api::BookApi;
use crate::controller::BookManager;
use crate::models::{Book, Field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

/// No banner for an empty message. Messages mentioning "error" in any case
/// are shown as errors.
pub fn banner(message: &str) -> Option<Banner> {
    if message.is_empty() {
        return None;
    }

    let kind = if message.to_lowercase().contains("error") {
        BannerKind::Error
    } else {
        BannerKind::Success
    };

    Some(Banner {
        kind,
        text: message.to_string(),
    })
}

pub fn heading(edit_mode: bool) -> &'static str {
    if edit_mode {
        "Edit Book"
    } else {
        "Add Book"
    }
}

pub fn render_fetched(book: &Book) -> serde_json::Result<String> {
    serde_json::to_string_pretty(book)
}

/// Columns are always [`Field::ALL`], whatever the records carry.
pub fn render_table(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.".to_string();
    }

    let rows = books
        .iter()
        .map(|book| {
            Field::ALL
                .iter()
                .map(|field| book.value(*field))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let widths = Field::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(field.as_str().len()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let header = Field::ALL
        .iter()
        .map(|field| field.as_str().to_string())
        .collect::<Vec<_>>();

    let mut lines = vec![format_row(&header, &widths)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));

    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// The whole screen: banner, form, lookup result and collection.
pub fn render<A: BookApi>(manager: &BookManager<A>) -> anyhow::Result<String> {
    let mut out = String::new();

    if let Some(banner) = banner(manager.message()) {
        let tag = match banner.kind {
            BannerKind::Success => "ok",
            BannerKind::Error => "error",
        };
        writeln!(out, "[{}] {}", tag, banner.text)?;
    }

    writeln!(out, "Book Management")?;
    writeln!(out)?;
    writeln!(out, "{}", heading(manager.edit_mode()))?;
    for field in Field::ALL.iter() {
        writeln!(out, "  {}: {}", field.label(), manager.draft().get(*field))?;
    }

    if let Some(book) = manager.fetched() {
        writeln!(out)?;
        writeln!(out, "Book Found:")?;
        writeln!(out, "{}", render_fetched(book)?)?;
    }

    writeln!(out)?;
    writeln!(out, "All Books")?;
    writeln!(out, "{}", render_table(manager.books()))?;

    Ok(out)
}
