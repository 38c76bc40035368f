//! Seed data for the development server.
//!
//! A small catalogue with a mix of classic and recent books, plus loans in
//! each display state: active, overdue and returned.

use crate::TestApp;
use anyhow::Result;
use jiff::ToSpan;
use payloads::{Author, Book, Loan, requests};

const AUTHORS: &[(&str, &str)] = &[
    ("Jane Austen", "British"),
    ("Frank Herbert", "American"),
    ("Victor Hugo", "French"),
    ("Chimamanda Ngozi Adichie", "Nigerian"),
    ("Sally Rooney", "Irish"),
];

/// Title, ISBN, publication year and index into [`AUTHORS`].
const BOOKS: &[(&str, &str, i32, usize)] = &[
    ("Pride and Prejudice", "9780141439518", 1813, 0),
    ("Emma", "9780141439587", 1815, 0),
    ("Persuasion", "9780141439686", 1817, 0),
    ("Dune", "9780441013593", 1965, 1),
    ("Les Misérables", "9782253096337", 1862, 2),
    ("Notre-Dame de Paris", "9782253009689", 1831, 2),
    ("Americanah", "9780307455925", 2013, 3),
    ("Normal People", "9780571334650", 2018, 4),
    ("Intermezzo", "9780571365456", 2024, 4),
];

/// Well above the ids handed out while creating the catalogue.
const BACKDATED_LOAN_ID: i64 = 100;

pub struct DevDataset {
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
    pub loans: Vec<Loan>,
}

impl DevDataset {
    /// Create the catalogue through the services' own endpoints, then
    /// backdate a couple of loans so every loan state is on screen.
    pub async fn create(app: &TestApp) -> Result<Self> {
        tracing::info!("📚 Creating authors and books");
        for (name, nationality) in AUTHORS {
            app.client
                .create_author(&requests::AuthorDetails {
                    name: name.to_string(),
                    nationality: nationality.to_string(),
                })
                .await?;
        }
        let authors = app.client.list_authors().await?;

        for (title, isbn, publication_year, author) in BOOKS {
            let author_id = authors
                .get(*author)
                .map(|author| author.id)
                .ok_or_else(|| anyhow::anyhow!("missing author for {title}"))?;
            app.client
                .create_book(&requests::BookDetails {
                    title: title.to_string(),
                    isbn: isbn.to_string(),
                    publication_year: *publication_year,
                    author_id,
                })
                .await?;
        }
        let books = app.client.list_books().await?;

        tracing::info!("📖 Lending books");
        for (book, borrower) in books.iter().zip(["Ada Lovelace", "Alan Turing"]) {
            app.client
                .create_loan(&requests::CreateLoan {
                    book_id: book.id,
                    borrower_name: borrower.to_string(),
                })
                .await?;
        }

        let today = app.today();
        if let Some(book) = books.get(3) {
            let lent = today.saturating_sub(30.days());
            app.seed_loan(
                BACKDATED_LOAN_ID,
                book.id.0,
                "Grace Hopper",
                lent,
                lent.saturating_add(14.days()),
            );
        }
        if let Some(loan) = app.client.list_loans().await?.first() {
            app.client.return_loan(loan.id).await?;
        }
        let loans = app.client.list_loans().await?;

        Ok(Self {
            authors,
            books,
            loans,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Development dataset:");
        tracing::info!("   {} authors", self.authors.len());
        tracing::info!("   {} books", self.books.len());
        tracing::info!("   {} loans", self.loans.len());
        let today = jiff::Zoned::now().date();
        for loan in &self.loans {
            tracing::info!(
                "     #{} {} → {} ({:?})",
                loan.id,
                loan.book_title.as_deref().unwrap_or("?"),
                loan.borrower_name,
                loan.status_on(today),
            );
        }
    }
}
