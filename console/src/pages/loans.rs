use crate::{
    collection::CollectionState,
    forms::LoanForm,
    i18n::{Locale, Messages},
    notify::Notifier,
    page::{self, Page, PageCell, SubmitLabels},
    session::EditSession,
};
use payloads::{APIClient, Book, Loan, LoanId};
use std::rc::Rc;

/// Which loans the register lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoanFilter {
    #[default]
    All,
    /// Only loans without a return date.
    Active,
}

impl LoanFilter {
    pub fn toggled(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoansState {
    pub loans: CollectionState<Loan>,
    /// Loaded for the book picker and to resolve titles.
    pub books: CollectionState<Book>,
    pub filter: LoanFilter,
    pub session: EditSession<LoanForm>,
}

impl Default for LoansState {
    fn default() -> Self {
        Self {
            loans: CollectionState::pending(),
            books: CollectionState::pending(),
            filter: LoanFilter::default(),
            session: EditSession::default(),
        }
    }
}

impl LoansState {
    pub fn book_label<'a>(&'a self, loan: &'a Loan, unknown: &'a str) -> &'a str {
        payloads::book_title(self.books.items(), loan.book_id)
            .or(loan.book_title.as_deref())
            .unwrap_or(unknown)
    }
}

fn loans(state: &mut LoansState) -> &mut CollectionState<Loan> {
    &mut state.loans
}

fn books(state: &mut LoansState) -> &mut CollectionState<Book> {
    &mut state.books
}

fn session(state: &mut LoansState) -> &mut EditSession<LoanForm> {
    &mut state.session
}

#[derive(Clone)]
pub struct LoansPage {
    api: APIClient,
    notifier: Rc<dyn Notifier>,
    messages: &'static Messages,
    cell: PageCell<LoansState>,
}

impl LoansPage {
    pub fn new(api: APIClient, notifier: Rc<dyn Notifier>, locale: Locale) -> Self {
        Self {
            api,
            notifier,
            messages: locale.messages(),
            cell: PageCell::new(LoansState::default()),
        }
    }

    /// Refetch the loans with the current filter.
    pub async fn refresh_loans(&self) -> bool {
        let filter = self.cell.read(|state| state.filter);
        let api = &self.api;
        let fetch = async move {
            match filter {
                LoanFilter::All => api.list_loans().await,
                LoanFilter::Active => api.active_loans().await,
            }
        };
        page::refresh(
            &self.cell,
            self.notifier.as_ref(),
            loans,
            fetch,
            self.messages.load_loans_failed,
        )
        .await
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

    pub async fn set_filter(&self, filter: LoanFilter) {
        self.cell.update(|state| state.filter = filter);
        futures::join!(self.refresh_loans(), self.refresh_books());
    }

    pub async fn toggle_filter(&self) {
        let filter = self.cell.read(|state| state.filter.toggled());
        self.set_filter(filter).await;
    }

    pub fn open_new_loan(&self) {
        self.cell.update(|state| state.session.open_create());
    }

    pub fn update_loan_form(&self, edit: impl FnOnce(&mut LoanForm)) {
        self.cell.update(|state| state.session.update(edit));
    }

    pub fn cancel_loan(&self) {
        self.cell.update(|state| state.session.cancel());
    }

    pub async fn submit_loan(&self) -> bool {
        let api = &self.api;
        let created = page::submit(
            &self.cell,
            self.notifier.as_ref(),
            self.messages,
            session,
            |_, loan| async move { api.create_loan(&loan).await },
            SubmitLabels {
                created: self.messages.loan_created,
                updated: self.messages.loan_created,
                failure: self.messages.create_loan_failed,
            },
        )
        .await;
        if created {
            self.refresh_loans().await;
        }
        created
    }

    pub async fn return_loan(&self, id: LoanId) -> bool {
        let returned = page::mutate(
            self.notifier.as_ref(),
            self.api.return_loan(id),
            self.messages.loan_returned,
            self.messages.return_loan_failed,
        )
        .await;
        if returned {
            self.refresh_loans().await;
        }
        returned
    }

    pub async fn delete_loan(&self, id: LoanId) -> bool {
        let deleted = page::mutate(
            self.notifier.as_ref(),
            self.api.delete_loan(id),
            self.messages.loan_deleted,
            self.messages.delete_loan_failed,
        )
        .await;
        if deleted {
            self.refresh_loans().await;
        }
        deleted
    }
}

impl Page for LoansPage {
    type State = LoansState;

    fn cell(&self) -> &PageCell<LoansState> {
        &self.cell
    }

    async fn mount(&self) {
        futures::join!(self.refresh_loans(), self.refresh_books());
    }

    fn unmount(&self) {
        self.cell.unsubscribe();
        self.cell.update(|state| {
            state.loans.close();
            state.books.close();
        });
    }
}
