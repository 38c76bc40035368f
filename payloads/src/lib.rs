pub mod api_client;
pub mod requests;

pub use api_client::{
    APIClient, ApiConfig, BASE_URL_ENV, ClientError, DEFAULT_BASE_URL, Service,
};
pub use reqwest::StatusCode;

use derive_more::Display;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Id type wrappers help ensure we don't mix up ids of different services.
///
/// Ids are always assigned by the backend; the console never mints one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct BookId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct AuthorId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct LoanId(pub i64);

/// A book as returned by the book service and the recommendation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub isbn: String,
    pub publication_year: i32,
    pub author_id: AuthorId,
    /// Denormalized by the backend for display; not always present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub nationality: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: LoanId,
    pub book_id: BookId,
    pub borrower_name: String,
    pub loan_date: Date,
    /// The loan listing of some backend versions omits the due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,
    /// Set once by the backend when the book comes back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
}

/// Display status of a loan, computed on the client from its dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanStatus {
    Active,
    Overdue,
    Returned,
}

impl Loan {
    /// Status of the loan as of `today`.
    ///
    /// A return date always wins, regardless of the due date. An open loan
    /// is overdue from its due date onward.
    pub fn status_on(&self, today: Date) -> LoanStatus {
        if self.return_date.is_some() {
            LoanStatus::Returned
        } else if self.due_date.is_some_and(|due| due <= today) {
            LoanStatus::Overdue
        } else {
            LoanStatus::Active
        }
    }

    /// Whether the "return" action applies. There is no way back once a
    /// return date is recorded.
    pub fn is_returnable(&self) -> bool {
        self.return_date.is_none()
    }
}

/// Find an author's name in a loaded collection.
pub fn author_name(authors: &[Author], author_id: AuthorId) -> Option<&str> {
    authors
        .iter()
        .find(|author| author.id == author_id)
        .map(|author| author.name.as_str())
}

/// Find a book's title in a loaded collection.
pub fn book_title(books: &[Book], book_id: BookId) -> Option<&str> {
    books
        .iter()
        .find(|book| book.id == book_id)
        .map(|book| book.title.as_str())
}
