//! Books and authors: two collections on one page, each with its own dialog.

use crate::{
    collection::CollectionState,
    forms::{AuthorForm, BookForm},
    i18n::{Locale, Messages},
    notify::Notifier,
    page::{self, Page, PageCell, SubmitLabels},
    session::{EditSession, SessionKind},
};
use payloads::{APIClient, Author, AuthorId, Book, BookId};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct BooksState {
    pub books: CollectionState<Book>,
    pub authors: CollectionState<Author>,
    pub book_session: EditSession<BookForm>,
    pub author_session: EditSession<AuthorForm>,
}

impl Default for BooksState {
    fn default() -> Self {
        Self {
            books: CollectionState::pending(),
            authors: CollectionState::pending(),
            book_session: EditSession::default(),
            author_session: EditSession::default(),
        }
    }
}

impl BooksState {
    /// Name of a book's author as resolved from the loaded authors, or
    /// `unknown` if the author is not among them.
    pub fn author_label<'a>(&'a self, book: &Book, unknown: &'a str) -> &'a str {
        payloads::author_name(self.authors.items(), book.author_id)
            .unwrap_or(unknown)
    }
}

fn books(state: &mut BooksState) -> &mut CollectionState<Book> {
    &mut state.books
}

fn authors(state: &mut BooksState) -> &mut CollectionState<Author> {
    &mut state.authors
}

fn book_session(state: &mut BooksState) -> &mut EditSession<BookForm> {
    &mut state.book_session
}

fn author_session(state: &mut BooksState) -> &mut EditSession<AuthorForm> {
    &mut state.author_session
}

#[derive(Clone)]
pub struct BooksPage {
    api: APIClient,
    notifier: Rc<dyn Notifier>,
    messages: &'static Messages,
    cell: PageCell<BooksState>,
}

impl BooksPage {
    pub fn new(api: APIClient, notifier: Rc<dyn Notifier>, locale: Locale) -> Self {
        Self {
            api,
            notifier,
            messages: locale.messages(),
            cell: PageCell::new(BooksState::default()),
        }
    }

    pub async fn refresh_books(&self) -> bool {
        page::refresh(
            &self.cell,
            self.notifier.as_ref(),
            books,
            self.api.list_books(),
            self.messages.load_books_failed,
        )
        .await
    }

    pub async fn refresh_authors(&self) -> bool {
        page::refresh(
            &self.cell,
            self.notifier.as_ref(),
            authors,
            self.api.list_authors(),
            self.messages.load_authors_failed,
        )
        .await
    }

    pub fn open_new_book(&self) {
        self.cell.update(|state| state.book_session.open_create());
    }

    pub fn edit_book(&self, book: &Book) {
        self.cell.update(|state| state.book_session.open_edit(book));
    }

    pub fn update_book_form(&self, edit: impl FnOnce(&mut BookForm)) {
        self.cell.update(|state| state.book_session.update(edit));
    }

    pub fn cancel_book(&self) {
        self.cell.update(|state| state.book_session.cancel());
    }

    /// Create or update depending on how the dialog was opened. Refetches
    /// the books on success.
    pub async fn submit_book(&self) -> bool {
        let api = &self.api;
        let saved = page::submit(
            &self.cell,
            self.notifier.as_ref(),
            self.messages,
            book_session,
            |kind, details| async move {
                match kind {
                    SessionKind::Create => api.create_book(&details).await,
                    SessionKind::Edit(id) => api.update_book(id, &details).await,
                }
            },
            SubmitLabels {
                created: self.messages.book_created,
                updated: self.messages.book_updated,
                failure: self.messages.save_book_failed,
            },
        )
        .await;
        if saved {
            self.refresh_books().await;
        }
        saved
    }

    pub async fn delete_book(&self, id: BookId) -> bool {
        let deleted = page::mutate(
            self.notifier.as_ref(),
            self.api.delete_book(id),
            self.messages.book_deleted,
            self.messages.delete_book_failed,
        )
        .await;
        if deleted {
            self.refresh_books().await;
        }
        deleted
    }

    pub fn open_new_author(&self) {
        self.cell.update(|state| state.author_session.open_create());
    }

    pub fn edit_author(&self, author: &Author) {
        self.cell.update(|state| state.author_session.open_edit(author));
    }

    pub fn update_author_form(&self, edit: impl FnOnce(&mut AuthorForm)) {
        self.cell.update(|state| state.author_session.update(edit));
    }

    pub fn cancel_author(&self) {
        self.cell.update(|state| state.author_session.cancel());
    }

    /// Author changes only refetch the authors. Book rows pick up renamed
    /// authors through the lookup at render time.
    pub async fn submit_author(&self) -> bool {
        let api = &self.api;
        let saved = page::submit(
            &self.cell,
            self.notifier.as_ref(),
            self.messages,
            author_session,
            |kind, details| async move {
                match kind {
                    SessionKind::Create => api.create_author(&details).await,
                    SessionKind::Edit(id) => {
                        api.update_author(id, &details).await
                    }
                }
            },
            SubmitLabels {
                created: self.messages.author_created,
                updated: self.messages.author_updated,
                failure: self.messages.save_author_failed,
            },
        )
        .await;
        if saved {
            self.refresh_authors().await;
        }
        saved
    }

    pub async fn delete_author(&self, id: AuthorId) -> bool {
        let deleted = page::mutate(
            self.notifier.as_ref(),
            self.api.delete_author(id),
            self.messages.author_deleted,
            self.messages.delete_author_failed,
        )
        .await;
        if deleted {
            self.refresh_authors().await;
        }
        deleted
    }
}

impl Page for BooksPage {
    type State = BooksState;

    fn cell(&self) -> &PageCell<BooksState> {
        &self.cell
    }

    async fn mount(&self) {
        futures::join!(self.refresh_books(), self.refresh_authors());
    }

    fn unmount(&self) {
        self.cell.unsubscribe();
        self.cell.update(|state| {
            state.books.close();
            state.authors.close();
        });
    }
}
