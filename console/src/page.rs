//! Shared plumbing for the page controllers.

use crate::{
    collection::{CollectionState, LoadOutcome},
    forms::Form,
    i18n::Messages,
    notify::{Notice, Notifier},
    session::{EditSession, SessionKind, SubmitError},
};
use payloads::ClientError;
use std::{cell::RefCell, future::Future, rc::Rc};

type Listener = Rc<dyn Fn()>;

/// State owned by one mounted page, shared between the controller and
/// whatever renders it.
///
/// Borrows never outlive a single synchronous update, so a controller can
/// hold a clone across awaits without conflicting with the renderer.
pub struct PageCell<S> {
    state: Rc<RefCell<S>>,
    listener: Rc<RefCell<Option<Listener>>>,
}

impl<S> Clone for PageCell<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            listener: self.listener.clone(),
        }
    }
}

impl<S> PartialEq for PageCell<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<S: Clone> PageCell<S> {
    pub fn new(state: S) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            listener: Rc::new(RefCell::new(None)),
        }
    }

    pub fn snapshot(&self) -> S {
        self.state.borrow().clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Mutate the state, then tell the listener about it.
    pub fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        self.changed();
        result
    }

    /// Replace the change listener. There is at most one per page.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn unsubscribe(&self) {
        self.listener.borrow_mut().take();
    }

    fn changed(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}

/// A page controller: owns its state and knows how to load it.
pub trait Page: Clone + 'static {
    type State: Clone;

    fn cell(&self) -> &PageCell<Self::State>;

    /// Initial fetch of everything the page shows.
    fn mount(&self) -> impl Future<Output = ()>;

    /// Drop interest in anything still in flight.
    fn unmount(&self);

    fn state(&self) -> Self::State {
        self.cell().snapshot()
    }
}

/// Fetch one collection and write the result back if it is still wanted.
///
/// Returns true when the items were replaced.
pub(crate) async fn refresh<S, T, Fut>(
    cell: &PageCell<S>,
    notifier: &dyn Notifier,
    select: fn(&mut S) -> &mut CollectionState<T>,
    fetch: Fut,
    failure: &str,
) -> bool
where
    S: Clone,
    Fut: Future<Output = Result<Vec<T>, ClientError>>,
{
    let ticket = cell.update(|state| select(state).begin_load());
    let result = fetch.await;
    match cell.update(|state| select(state).finish_load(ticket, result)) {
        LoadOutcome::Applied => true,
        LoadOutcome::Failed(e) => {
            tracing::error!("{failure}: {e}");
            notifier.notify(Notice::error(format!("{failure}: {e}")));
            false
        }
        LoadOutcome::Stale(e) => {
            tracing::debug!(error = ?e, "dropped superseded result");
            false
        }
    }
}

/// Run a single mutation that has no dialog attached, such as a delete.
pub(crate) async fn mutate<R>(
    notifier: &dyn Notifier,
    request: impl Future<Output = Result<R, ClientError>>,
    success: &str,
    failure: &str,
) -> bool {
    match request.await {
        Ok(_) => {
            tracing::debug!("{success}");
            notifier.notify(Notice::success(success));
            true
        }
        Err(e) => {
            tracing::error!("{failure}: {e}");
            notifier.notify(Notice::error(format!("{failure}: {e}")));
            false
        }
    }
}

/// Labels reported after a dialog submission.
pub(crate) struct SubmitLabels {
    pub created: &'static str,
    pub updated: &'static str,
    pub failure: &'static str,
}

/// Validate and send the open dialog of `select`.
///
/// Returns true when the backend accepted it, in which case the caller
/// refetches the owning collection.
pub(crate) async fn submit<S, F, R, Fut>(
    cell: &PageCell<S>,
    notifier: &dyn Notifier,
    messages: &Messages,
    select: fn(&mut S) -> &mut EditSession<F>,
    send: impl FnOnce(SessionKind<F::Id>, F::Payload) -> Fut,
    labels: SubmitLabels,
) -> bool
where
    S: Clone,
    F: Form,
    Fut: Future<Output = Result<R, ClientError>>,
{
    let submission = match cell.update(|state| select(state).begin_submit()) {
        Ok(submission) => submission,
        Err(SubmitError::Invalid(e)) => {
            tracing::debug!(error = %e, "form rejected");
            notifier.notify(Notice::error(messages.form_error(&e)));
            return false;
        }
        Err(e) => {
            tracing::debug!(error = %e, "submit ignored");
            return false;
        }
    };

    let kind = submission.kind;
    let result = send(kind, submission.payload.clone()).await;
    let succeeded = result.is_ok();
    if !cell.update(|state| select(state).finish_submit(&submission, succeeded))
    {
        tracing::debug!("dialog changed while the submission was in flight");
    }

    match result {
        Ok(_) => {
            let message = match kind {
                SessionKind::Create => labels.created,
                SessionKind::Edit(_) => labels.updated,
            };
            tracing::debug!("{message}");
            notifier.notify(Notice::success(message));
            true
        }
        Err(e) => {
            tracing::error!("{}: {e}", labels.failure);
            notifier.notify(Notice::error(format!("{}: {e}", labels.failure)));
            false
        }
    }
}
