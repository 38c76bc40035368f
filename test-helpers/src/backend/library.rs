//! The records held by the mock services.

use jiff::{ToSpan, civil::Date};
use payloads::{
    Author, AuthorId, Book, BookId, Loan, LoanId,
    requests::{AuthorDetails, BookDetails, CreateLoan},
};
use std::collections::BTreeMap;

/// How long a new loan runs before it is due.
pub const LOAN_DAYS: i64 = 14;

/// Books published within this many years count as recent.
pub const RECENT_YEARS: i32 = 10;

/// Size of a random selection when the caller gives no count.
pub const DEFAULT_RANDOM_COUNT: usize = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Book not found: {0}")]
    BookNotFound(BookId),
    #[error("Author not found: {0}")]
    AuthorNotFound(AuthorId),
    #[error("Loan not found: {0}")]
    LoanNotFound(LoanId),
    #[error("A book with ISBN {0} already exists")]
    DuplicateIsbn(String),
    #[error("Loan {0} has already been returned")]
    AlreadyReturned(LoanId),
}

#[derive(Debug, Clone)]
pub struct Library {
    books: BTreeMap<BookId, Book>,
    authors: BTreeMap<AuthorId, Author>,
    loans: BTreeMap<LoanId, Loan>,
    last_id: i64,
    today: Date,
}

impl Library {
    pub fn new(today: Date) -> Self {
        Self {
            books: BTreeMap::new(),
            authors: BTreeMap::new(),
            loans: BTreeMap::new(),
            last_id: 0,
            today,
        }
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn set_today(&mut self, today: Date) {
        self.today = today;
    }

    /// Ids are shared between all record kinds and never reused.
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn claim_id(&mut self, id: i64) {
        self.last_id = self.last_id.max(id);
    }

    /// Books are served with the author name filled in.
    fn with_author_name(&self, book: &Book) -> Book {
        Book {
            author_name: self
                .authors
                .get(&book.author_id)
                .map(|author| author.name.clone()),
            ..book.clone()
        }
    }

    /// Loans are served with the book title filled in.
    fn with_book_title(&self, loan: &Loan) -> Loan {
        Loan {
            book_title: self.books.get(&loan.book_id).map(|b| b.title.clone()),
            ..loan.clone()
        }
    }

    fn check_isbn(
        &self,
        isbn: &str,
        except: Option<BookId>,
    ) -> Result<(), StoreError> {
        let taken = self
            .books
            .values()
            .any(|book| book.isbn == isbn && Some(book.id) != except);
        if taken {
            Err(StoreError::DuplicateIsbn(isbn.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn books(&self) -> Vec<Book> {
        self.books
            .values()
            .map(|book| self.with_author_name(book))
            .collect()
    }

    pub fn book(&self, id: BookId) -> Result<Book, StoreError> {
        self.books
            .get(&id)
            .map(|book| self.with_author_name(book))
            .ok_or(StoreError::BookNotFound(id))
    }

    pub fn create_book(
        &mut self,
        details: &BookDetails,
    ) -> Result<Book, StoreError> {
        self.check_isbn(&details.isbn, None)?;
        let id = BookId(self.next_id());
        Ok(self.put_book(id, details))
    }

    pub fn update_book(
        &mut self,
        id: BookId,
        details: &BookDetails,
    ) -> Result<Book, StoreError> {
        if !self.books.contains_key(&id) {
            return Err(StoreError::BookNotFound(id));
        }
        self.check_isbn(&details.isbn, Some(id))?;
        Ok(self.put_book(id, details))
    }

    fn put_book(&mut self, id: BookId, details: &BookDetails) -> Book {
        let book = Book {
            id,
            title: details.title.clone(),
            isbn: details.isbn.clone(),
            publication_year: details.publication_year,
            author_id: details.author_id,
            author_name: None,
        };
        self.books.insert(id, book.clone());
        self.with_author_name(&book)
    }

    pub fn delete_book(&mut self, id: BookId) -> Result<(), StoreError> {
        self.books
            .remove(&id)
            .map(drop)
            .ok_or(StoreError::BookNotFound(id))
    }

    pub fn authors(&self) -> Vec<Author> {
        self.authors.values().cloned().collect()
    }

    pub fn author(&self, id: AuthorId) -> Result<Author, StoreError> {
        self.authors
            .get(&id)
            .cloned()
            .ok_or(StoreError::AuthorNotFound(id))
    }

    pub fn create_author(&mut self, details: &AuthorDetails) -> Author {
        let id = AuthorId(self.next_id());
        self.put_author(id, details)
    }

    pub fn update_author(
        &mut self,
        id: AuthorId,
        details: &AuthorDetails,
    ) -> Result<Author, StoreError> {
        if !self.authors.contains_key(&id) {
            return Err(StoreError::AuthorNotFound(id));
        }
        Ok(self.put_author(id, details))
    }

    fn put_author(&mut self, id: AuthorId, details: &AuthorDetails) -> Author {
        let author = Author {
            id,
            name: details.name.clone(),
            nationality: details.nationality.clone(),
        };
        self.authors.insert(id, author.clone());
        author
    }

    /// Books keep their author id after the author is gone; clients show
    /// them with an unknown author.
    pub fn delete_author(&mut self, id: AuthorId) -> Result<(), StoreError> {
        self.authors
            .remove(&id)
            .map(drop)
            .ok_or(StoreError::AuthorNotFound(id))
    }

    pub fn loans(&self) -> Vec<Loan> {
        self.loans
            .values()
            .map(|loan| self.with_book_title(loan))
            .collect()
    }

    pub fn active_loans(&self) -> Vec<Loan> {
        self.loans
            .values()
            .filter(|loan| loan.return_date.is_none())
            .map(|loan| self.with_book_title(loan))
            .collect()
    }

    pub fn loans_by_borrower(&self, borrower_name: &str) -> Vec<Loan> {
        self.loans
            .values()
            .filter(|loan| loan.borrower_name == borrower_name)
            .map(|loan| self.with_book_title(loan))
            .collect()
    }

    pub fn loan(&self, id: LoanId) -> Result<Loan, StoreError> {
        self.loans
            .get(&id)
            .map(|loan| self.with_book_title(loan))
            .ok_or(StoreError::LoanNotFound(id))
    }

    /// Lend a book from today, due [`LOAN_DAYS`] later.
    pub fn create_loan(
        &mut self,
        details: &CreateLoan,
    ) -> Result<Loan, StoreError> {
        if !self.books.contains_key(&details.book_id) {
            return Err(StoreError::BookNotFound(details.book_id));
        }
        let loan = Loan {
            id: LoanId(self.next_id()),
            book_id: details.book_id,
            borrower_name: details.borrower_name.clone(),
            loan_date: self.today,
            due_date: Some(self.today.saturating_add(LOAN_DAYS.days())),
            return_date: None,
            book_title: None,
        };
        self.loans.insert(loan.id, loan.clone());
        Ok(self.with_book_title(&loan))
    }

    pub fn return_loan(&mut self, id: LoanId) -> Result<Loan, StoreError> {
        let today = self.today;
        let loan = self.loans.get_mut(&id).ok_or(StoreError::LoanNotFound(id))?;
        if loan.return_date.is_some() {
            return Err(StoreError::AlreadyReturned(id));
        }
        loan.return_date = Some(today);
        let loan = loan.clone();
        Ok(self.with_book_title(&loan))
    }

    pub fn delete_loan(&mut self, id: LoanId) -> Result<(), StoreError> {
        self.loans
            .remove(&id)
            .map(drop)
            .ok_or(StoreError::LoanNotFound(id))
    }

    /// A selection of `count` books. The mock picks the lowest ids so test
    /// outcomes are stable.
    pub fn random_books(&self, count: Option<usize>) -> Vec<Book> {
        self.books()
            .into_iter()
            .take(count.unwrap_or(DEFAULT_RANDOM_COUNT))
            .collect()
    }

    pub fn recent_books(&self) -> Vec<Book> {
        let cutoff = i32::from(self.today.year()) - RECENT_YEARS;
        self.books()
            .into_iter()
            .filter(|book| book.publication_year >= cutoff)
            .collect()
    }

    /// Case-insensitive substring match on the author's name.
    pub fn books_by_author(&self, name: &str) -> Vec<Book> {
        let needle = name.to_lowercase();
        self.books()
            .into_iter()
            .filter(|book| {
                book.author_name
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Insert records with fixed ids, bypassing validation. Later records
    /// created through the API get ids above every seeded one.
    pub fn seed_author(&mut self, author: Author) {
        self.claim_id(author.id.0);
        self.authors.insert(author.id, author);
    }

    pub fn seed_book(&mut self, book: Book) {
        self.claim_id(book.id.0);
        self.books.insert(book.id, book);
    }

    pub fn seed_loan(&mut self, loan: Loan) {
        self.claim_id(loan.id.0);
        self.loans.insert(loan.id, loan);
    }
}
