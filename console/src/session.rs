//! Transient state of one create/edit dialog.

use crate::forms::{EditForm, Form, FormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind<Id> {
    Create,
    Edit(Id),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenSession<F: Form> {
    pub kind: SessionKind<F::Id>,
    pub fields: F,
    /// A submission is in flight.
    pub pending: bool,
    epoch: u64,
}

/// A validated submission, ready to be sent.
#[derive(Debug, Clone)]
pub struct Submission<F: Form> {
    pub kind: SessionKind<F::Id>,
    pub payload: F::Payload,
    epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("no dialog is open")]
    NotOpen,
    #[error("a submission is already in flight")]
    Pending,
    #[error(transparent)]
    Invalid(#[from] FormError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<F: Form> {
    open: Option<OpenSession<F>>,
    epoch: u64,
}

impl<F: Form> Default for EditSession<F> {
    fn default() -> Self {
        Self {
            open: None,
            epoch: 0,
        }
    }
}

impl<F: Form> EditSession<F> {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&OpenSession<F>> {
        self.open.as_ref()
    }

    pub fn fields(&self) -> Option<&F> {
        self.open.as_ref().map(|session| &session.fields)
    }

    pub fn kind(&self) -> Option<SessionKind<F::Id>> {
        self.open.as_ref().map(|session| session.kind)
    }

    pub fn is_pending(&self) -> bool {
        self.open.as_ref().is_some_and(|session| session.pending)
    }

    fn open_with(&mut self, kind: SessionKind<F::Id>, fields: F) {
        self.epoch += 1;
        self.open = Some(OpenSession {
            kind,
            fields,
            pending: false,
            epoch: self.epoch,
        });
    }

    /// Open a blank dialog. Any previous input is discarded.
    pub fn open_create(&mut self) {
        self.open_with(SessionKind::Create, F::default());
    }

    /// Change field values. Does nothing when no dialog is open.
    pub fn update(&mut self, edit: impl FnOnce(&mut F)) {
        if let Some(session) = self.open.as_mut() {
            edit(&mut session.fields);
        }
    }

    pub fn cancel(&mut self) {
        self.open = None;
    }

    /// Validate the fields and mark the session pending.
    ///
    /// Nothing changes when validation fails, so the invalid input stays
    /// visible for correction.
    pub fn begin_submit(&mut self) -> Result<Submission<F>, SubmitError> {
        let session = self.open.as_mut().ok_or(SubmitError::NotOpen)?;
        if session.pending {
            return Err(SubmitError::Pending);
        }
        let payload = session.fields.validate()?;
        session.pending = true;
        Ok(Submission {
            kind: session.kind,
            payload,
            epoch: session.epoch,
        })
    }

    /// Record how a submission ended. On success the dialog closes and its
    /// fields are dropped; on failure it stays open with the input intact.
    ///
    /// Returns false if the dialog was cancelled or reopened meanwhile, in
    /// which case nothing is touched.
    pub fn finish_submit(
        &mut self,
        submission: &Submission<F>,
        succeeded: bool,
    ) -> bool {
        match self.open.as_mut() {
            Some(session) if session.epoch == submission.epoch => {
                if succeeded {
                    self.open = None;
                } else {
                    session.pending = false;
                }
                true
            }
            _ => false,
        }
    }
}

impl<F: EditForm> EditSession<F> {
    /// Open a dialog bound to an existing record, pre-populated with its
    /// values.
    pub fn open_edit(&mut self, entity: &F::Entity) {
        let (id, fields) = F::from_entity(entity);
        self.open_with(SessionKind::Edit(id), fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{AuthorForm, Field, LoanForm};
    use payloads::{Author, AuthorId};

    fn tolkien() -> Author {
        Author {
            id: AuthorId(1),
            name: "J. R. R. Tolkien".into(),
            nationality: "British".into(),
        }
    }

    #[test]
    fn create_session_lifecycle() {
        let mut session = EditSession::<AuthorForm>::default();
        assert!(!session.is_open());
        assert_eq!(session.begin_submit().unwrap_err(), SubmitError::NotOpen);

        session.open_create();
        assert_eq!(session.kind(), Some(SessionKind::Create));
        session.update(|f| {
            f.name = "Ursula K. Le Guin".into();
            f.nationality = "American".into();
        });

        let submission = session.begin_submit().unwrap();
        assert!(session.is_pending());
        assert_eq!(submission.payload.name, "Ursula K. Le Guin");

        assert!(session.finish_submit(&submission, true));
        assert!(!session.is_open());

        // Reopening starts from a blank form.
        session.open_create();
        assert_eq!(session.fields(), Some(&AuthorForm::default()));
    }

    #[test]
    fn failed_submission_keeps_input() {
        let mut session = EditSession::<AuthorForm>::default();
        session.open_edit(&tolkien());
        assert_eq!(session.kind(), Some(SessionKind::Edit(AuthorId(1))));

        let submission = session.begin_submit().unwrap();
        assert!(session.finish_submit(&submission, false));
        assert!(session.is_open());
        assert!(!session.is_pending());
        assert_eq!(session.fields().unwrap().name, "J. R. R. Tolkien");
    }

    #[test]
    fn second_submit_is_rejected_while_pending() {
        let mut session = EditSession::<AuthorForm>::default();
        session.open_edit(&tolkien());
        let _first = session.begin_submit().unwrap();
        assert_eq!(session.begin_submit().unwrap_err(), SubmitError::Pending);
    }

    #[test]
    fn invalid_input_blocks_submission() {
        let mut session = EditSession::<LoanForm>::default();
        session.open_create();
        session.update(|f| f.book_id = "2".into());

        let err = session.begin_submit().unwrap_err();
        assert_eq!(err, SubmitError::Invalid(FormError::Missing(Field::Borrower)));
        assert!(!session.is_pending());
        assert_eq!(session.fields().unwrap().book_id, "2");
    }

    #[test]
    fn late_result_does_not_touch_a_reopened_dialog() {
        let mut session = EditSession::<AuthorForm>::default();
        session.open_edit(&tolkien());
        let submission = session.begin_submit().unwrap();

        session.cancel();
        session.open_create();
        assert!(!session.finish_submit(&submission, true));
        assert!(session.is_open());
        assert_eq!(session.kind(), Some(SessionKind::Create));
    }

    #[test]
    fn cancel_discards_everything() {
        let mut session = EditSession::<AuthorForm>::default();
        session.open_edit(&tolkien());
        session.cancel();
        assert!(!session.is_open());
        assert_eq!(session.fields(), None);
    }
}
