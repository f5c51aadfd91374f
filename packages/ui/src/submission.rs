use std::cell::Cell;
use std::rc::Rc;

use api::{ApiError, UserDraft, UserRecord, UserService};
use thiserror::Error;

use crate::validation::{validate, ValidationErrors};

/// Whether the user form creates a new record or edits an existing one.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(UserRecord),
}

impl FormMode {
    pub fn initial_draft(&self) -> UserDraft {
        match self {
            FormMode::Create => UserDraft::default(),
            FormMode::Edit(record) => record.draft(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New User",
            FormMode::Edit(_) => "Edit User",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add User",
            FormMode::Edit(_) => "Save Changes",
        }
    }

    pub fn pending_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Adding...",
            FormMode::Edit(_) => "Saving...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormMode::Create => "User added successfully!",
            FormMode::Edit(_) => "User updated successfully!",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Please fix the highlighted fields")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Validate `draft` and, only if it passes, create or update through `service`.
pub async fn submit_user<S: UserService>(
    service: &S,
    mode: &FormMode,
    draft: &UserDraft,
) -> Result<UserRecord, SubmitError> {
    let draft = validate(draft).map_err(SubmitError::Invalid)?;
    let record = match mode {
        FormMode::Create => service.create_user(&draft).await?,
        FormMode::Edit(existing) => service.update_user(&existing.id, &draft).await?,
    };
    Ok(record)
}

/// Drops re-entrant submits while one is outstanding.
#[derive(Clone, Debug, Default)]
pub struct SubmitGuard {
    pending: Rc<Cell<bool>>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission, or `None` if one is already running.
    /// The submission ends when the returned [`PendingSubmit`] is dropped.
    pub fn try_begin(&self) -> Option<PendingSubmit> {
        if self.pending.replace(true) {
            return None;
        }
        Some(PendingSubmit {
            pending: self.pending.clone(),
        })
    }
}

impl PartialEq for SubmitGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pending, &other.pending)
    }
}

#[derive(Debug)]
pub struct PendingSubmit {
    pending: Rc<Cell<bool>>,
}

impl Drop for PendingSubmit {
    fn drop(&mut self) {
        self.pending.set(false);
    }
}
