//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, NewBook},
};

pub const BOOK_NOT_FOUND: &str = "Book not found";

/// Columns coerced to the `Book` field types; NULL becomes `''` or `0` and
/// non-numeric text in a numeric column becomes `0`
const BOOK_COLUMNS: &str = r#"
    id,
    COALESCE(CAST(bookTitle AS TEXT), '') AS bookTitle,
    COALESCE(CAST(bookGenre AS TEXT), '') AS bookGenre,
    COALESCE(CAST(publishedYear AS INTEGER), 0) AS publishedYear,
    COALESCE(CAST(rating AS INTEGER), 0) AS rating
"#;

impl Repository {
    /// List all books in insertion order
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        let query = format!("SELECT {} FROM library ORDER BY id", BOOK_COLUMNS);
        let rows = sqlx::query_as::<_, Book>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i64) -> AppResult<Book> {
        let query = format!("SELECT {} FROM library WHERE id = ?", BOOK_COLUMNS);
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// Insert a book, returning the id assigned by SQLite
    pub async fn books_create(&self, data: &NewBook) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO library (bookTitle, bookGenre, publishedYear, rating) VALUES (?, ?, ?, ?)",
        )
        .bind(&data.book_title)
        .bind(&data.book_genre)
        .bind(data.published_year)
        .bind(data.rating)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Replace all fields of a book in one statement
    pub async fn books_update(&self, id: i64, data: &NewBook) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE library
            SET bookTitle = ?, bookGenre = ?, publishedYear = ?, rating = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.book_title)
        .bind(&data.book_genre)
        .bind(data.published_year)
        .bind(data.rating)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(BOOK_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    /// Delete a book
    pub async fn books_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM library WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(BOOK_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}
