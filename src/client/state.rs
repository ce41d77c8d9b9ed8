//! Form mode state machine

/// What submitting the form does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submit adds a new book
    #[default]
    Create,
    /// Submit replaces the fields of the given book
    Edit(i64),
}

/// Client-side form state.
///
/// Starts in [`FormMode::Create`]; [`FormState::begin_edit`] switches to
/// editing one book and [`FormState::finish`] returns to create mode after a
/// successful update or a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormState {
    mode: FormMode,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_updating(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn updating_book_id(&self) -> Option<i64> {
        match self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    /// Enter edit mode for `id`, replacing any edit in progress
    pub fn begin_edit(&mut self, id: i64) {
        self.mode = FormMode::Edit(id);
    }

    pub fn finish(&mut self) {
        self.mode = FormMode::Create;
    }
}
