use serde::{Deserialize, Serialize};

use super::{INVALID_CHOICE, INVALID_DATE, REQUIRED, cleaned, parse_date, present_text, required_text};
use crate::domain::{Book, BookInput, FieldErrors};

/// Submitted book fields
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct BookForm {
    pub category: Option<String>,
    pub published_date: Option<String>,
    pub title: Option<String>,
    pub hepburn: Option<String>,
    pub author: Option<String>,
    pub release: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

impl BookForm {
    /// Prefill from a stored book
    pub fn from_book(book: &Book) -> Self {
        Self {
            category: Some(book.category_id.to_string()),
            published_date: Some(book.published_date.format("%Y-%m-%d").to_string()),
            title: Some(book.title.clone()),
            hepburn: Some(book.hepburn.clone()),
            author: Some(book.author.clone()),
            release: Some(book.release.clone()),
            url: Some(book.url.clone()),
            summary: book.summary.clone(),
        }
    }

    /// Validate field shapes. Whether the category exists is checked by the
    /// service.
    pub fn clean(&self) -> Result<BookInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let category_id = match cleaned(&self.category) {
            Some(raw) => match raw.parse::<i32>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("category", INVALID_CHOICE);
                    None
                }
            },
            None => {
                errors.add("category", REQUIRED);
                None
            }
        };

        let published_date = match cleaned(&self.published_date) {
            Some(raw) => {
                let date = parse_date(&raw);
                if date.is_none() {
                    errors.add("published_date", INVALID_DATE);
                }
                date
            }
            None => {
                errors.add("published_date", REQUIRED);
                None
            }
        };

        let title = required_text(&mut errors, "title", &self.title);
        let hepburn = present_text(&mut errors, "hepburn", &self.hepburn);
        let author = required_text(&mut errors, "author", &self.author);
        let release = present_text(&mut errors, "release", &self.release);
        let url = present_text(&mut errors, "url", &self.url);

        match (category_id, published_date) {
            (Some(category_id), Some(published_date)) if errors.is_empty() => Ok(BookInput {
                category_id,
                published_date,
                title,
                hepburn,
                author,
                release,
                url,
                summary: cleaned(&self.summary),
            }),
            _ => Err(errors),
        }
    }
}
