//! Catalog management service

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload, NewBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    /// Validate and insert a book, returning its new id
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<i64> {
        let book = NewBook::try_from(payload)?;
        let id = self.repository.books_create(&book).await?;
        tracing::info!("Book added with ID: {}", id);
        Ok(id)
    }

    /// Validate and replace all fields of an existing book
    pub async fn update_book(&self, id: i64, payload: BookPayload) -> AppResult<()> {
        let book = NewBook::try_from(payload)?;
        self.repository.books_update(id, &book).await?;
        tracing::info!("Book updated with ID: {}", id);
        Ok(())
    }

    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        tracing::info!("DELETE request received for ID: {}", id);
        match self.repository.books_delete(id).await {
            Ok(()) => {
                tracing::info!("Book deleted successfully with ID: {}", id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Could not delete book with ID {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await?;
        Ok(())
    }
}
