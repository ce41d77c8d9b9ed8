//! Catalog client
//!
//! Lists books, submits the add/update form and deletes books through the
//! REST API. After every successful write the whole list is fetched again and
//! re-rendered; nothing from an earlier listing is reused.

pub mod api;
pub mod form;
pub mod render;
pub mod state;

pub use api::{ClientError, LibraryClient};
pub use form::{BookForm, FormError};
pub use state::{FormMode, FormState};

use crate::models::book::Book;

/// Shown for any failed request, whatever the status
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Asks the user to confirm a destructive action
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Dismissible message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

pub struct Controller {
    client: LibraryClient,
    state: FormState,
    form: BookForm,
    books: Vec<Book>,
    rendered: String,
    notice: Option<Notice>,
}

impl Controller {
    pub fn new(client: LibraryClient) -> Self {
        Self {
            client,
            state: FormState::new(),
            form: BookForm::default(),
            books: Vec::new(),
            rendered: render::render_list(&[]),
            notice: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Text of the last rendered list
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn form_title(&self) -> String {
        render::render_form_title(&self.state)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn fail(&mut self, action: &str, err: ClientError) {
        tracing::warn!("{} failed: {}", action, err);
        self.notice = Some(Notice::Error(GENERIC_ERROR.to_string()));
    }

    /// Fetch the full list and re-render it
    pub async fn refresh(&mut self) -> bool {
        match self.client.list().await {
            Ok(books) => {
                self.rendered = render::render_list(&books);
                self.books = books;
                true
            }
            Err(e) => {
                self.fail("Fetching books", e);
                false
            }
        }
    }

    /// Submit the form: add in create mode, update in edit mode.
    ///
    /// Taking `&mut self` keeps a second submission from starting while one
    /// is in flight.
    pub async fn submit(&mut self) -> bool {
        let payload = match self.form.parse() {
            Ok(payload) => payload,
            Err(e) => {
                self.notice = Some(Notice::Error(e.to_string()));
                return false;
            }
        };

        let result = match self.state.mode() {
            FormMode::Create => self
                .client
                .create(&payload)
                .await
                .map(|created| created.message),
            FormMode::Edit(id) => self
                .client
                .update(id, &payload)
                .await
                .map(|updated| updated.message),
        };

        match result {
            Ok(message) => {
                self.form.clear();
                self.state.finish();
                self.notice = Some(Notice::Success(message));
                self.refresh().await;
                true
            }
            Err(e) => {
                self.fail("Saving book", e);
                false
            }
        }
    }

    /// Load a book into the form and switch to edit mode
    pub async fn begin_update(&mut self, id: i64) -> bool {
        match self.client.get(id).await {
            Ok(book) => {
                self.form.fill_from(&book);
                self.state.begin_edit(id);
                true
            }
            Err(e) => {
                self.fail("Fetching book", e);
                false
            }
        }
    }

    pub fn cancel_update(&mut self) {
        self.form.clear();
        self.state.finish();
    }

    /// Delete a book once the user confirms. The form mode is left alone.
    pub async fn delete(&mut self, id: i64, confirm: &mut impl Confirm) -> bool {
        let prompt = match self.books.iter().find(|b| b.id == id) {
            Some(book) => format!(
                "Are you sure you want to delete the book \"{}\"?",
                book.book_title
            ),
            None => format!("Are you sure you want to delete book #{}?", id),
        };
        if !confirm.confirm(&prompt) {
            return false;
        }

        match self.client.delete(id).await {
            Ok(deleted) => {
                self.notice = Some(Notice::Success(deleted.message));
                self.refresh().await;
                true
            }
            Err(e) => {
                self.fail("Deleting book", e);
                false
            }
        }
    }
}
