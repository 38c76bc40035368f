//! Client-side orchestration for the library console: collection state,
//! edit dialogs and the page controllers that keep them in sync with the
//! book, loan and recommendation services.
//!
//! Nothing in here depends on a UI framework. The web UI renders
//! [`page::Page`] state and forwards user actions to the controllers; the
//! integration tests drive the same controllers directly.

pub mod collection;
pub mod forms;
pub mod i18n;
pub mod notify;
pub mod page;
pub mod pages;
pub mod session;

pub use collection::{CollectionState, CollectionView, LoadOutcome, LoadTicket};
pub use forms::{AuthorForm, BookForm, Field, Form, FormError, LoanForm};
pub use i18n::{Locale, Messages};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use page::{Page, PageCell};
pub use session::{EditSession, SessionKind, SubmitError};
