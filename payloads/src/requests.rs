use crate::{AuthorId, BookId};
use serde::{Deserialize, Serialize};

/// Body for creating or updating a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    pub title: String,
    pub isbn: String,
    pub publication_year: i32,
    pub author_id: AuthorId,
}

/// Body for creating or updating an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDetails {
    pub name: String,
    pub nationality: String,
}

/// Body for opening a loan. Dates are assigned by the loan service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoan {
    pub book_id: BookId,
    pub borrower_name: String,
}
