//! Text rendering of the book list and form header

use super::state::{FormMode, FormState};
use crate::models::book::Book;

pub const EMPTY_LIST: &str = "No books in the catalog yet.";

/// Render the whole list from the latest List response
pub fn render_list(books: &[Book]) -> String {
    if books.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    books.iter().map(render_book).collect()
}

fn render_book(book: &Book) -> String {
    format!(
        "[{id}] {title}\n    Genre: {genre} | Year: {year} | Rating: {rating}/5\n    actions: edit {id} | delete {id}\n",
        id = book.id,
        title = book.book_title,
        genre = book.book_genre,
        year = book.published_year,
        rating = book.rating,
    )
}

/// Heading of the form, which doubles as the visible submit action
pub fn render_form_title(state: &FormState) -> String {
    match state.mode() {
        FormMode::Create => "Add Book".to_string(),
        FormMode::Edit(id) => format!("Update Book #{}", id),
    }
}
