//! Book form input

use thiserror::Error;

use crate::models::book::{Book, BookPayload};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("All fields are required")]
    MissingFields,

    #[error("{0} must be a whole number")]
    NotANumber(&'static str),

    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}

/// Raw text of the four form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub genre: String,
    pub published_year: String,
    pub rating: String,
}

fn parse_number(raw: &str, field: &'static str) -> Result<i64, FormError> {
    raw.parse::<i64>().map_err(|_| FormError::NotANumber(field))
}

impl BookForm {
    /// Trim and check the fields, producing a request body
    pub fn parse(&self) -> Result<BookPayload, FormError> {
        let title = self.title.trim();
        let genre = self.genre.trim();
        let year = self.published_year.trim();
        let rating = self.rating.trim();

        if [title, genre, year, rating].iter().any(|f| f.is_empty()) {
            return Err(FormError::MissingFields);
        }

        let published_year = parse_number(year, "Published year")?;
        let rating = parse_number(rating, "Rating")?;
        if !(1..=5).contains(&rating) {
            return Err(FormError::RatingOutOfRange);
        }

        Ok(BookPayload {
            book_title: Some(title.to_string()),
            book_genre: Some(genre.to_string()),
            published_year: Some(published_year),
            rating: Some(rating),
        })
    }

    /// Populate the fields from an existing book
    pub fn fill_from(&mut self, book: &Book) {
        self.title = book.book_title.clone();
        self.genre = book.book_genre.clone();
        self.published_year = book.published_year.to_string();
        self.rating = book.rating.to_string();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
