use actix_web::{
    HttpResponse, ResponseError, body::BoxBody, delete, dev::HttpServiceFactory,
    get, post, put, web,
};
use payloads::{AuthorId, BookId, LoanId, requests};
use serde::Deserialize;
use std::sync::{Mutex, MutexGuard};

use super::library::{Library, StoreError};

type Records = web::Data<Mutex<Library>>;

pub fn book_services() -> impl HttpServiceFactory {
    web::scope("/book-service/api")
        .service(list_books)
        .service(get_book)
        .service(create_book)
        .service(update_book)
        .service(delete_book)
        .service(list_authors)
        .service(get_author)
        .service(create_author)
        .service(update_author)
        .service(delete_author)
}

pub fn loan_services() -> impl HttpServiceFactory {
    // fixed segments first so they are not taken for ids
    web::scope("/loan-service/api")
        .service(list_loans)
        .service(active_loans)
        .service(loans_by_borrower)
        .service(get_loan)
        .service(create_loan)
        .service(return_loan)
        .service(delete_loan)
}

pub fn recommendation_services() -> impl HttpServiceFactory {
    web::scope("/recommendation-service/api")
        .service(random_recommendations)
        .service(recent_recommendations)
        .service(recommendations_by_author)
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::UnexpectedError(_) => {
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::BookNotFound(_)
            | StoreError::AuthorNotFound(_)
            | StoreError::LoanNotFound(_) => APIError::NotFound(e.into()),
            StoreError::DuplicateIsbn(_) | StoreError::AlreadyReturned(_) => {
                APIError::BadRequest(e.into())
            }
        }
    }
}

fn lock(records: &Records) -> Result<MutexGuard<'_, Library>, APIError> {
    records
        .lock()
        .map_err(|_| anyhow::anyhow!("record store poisoned").into())
}

#[tracing::instrument(skip(records), ret)]
#[get("/books")]
pub async fn list_books(records: Records) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(lock(&records)?.books()))
}

#[tracing::instrument(skip(records), ret)]
#[get("/books/{id}")]
pub async fn get_book(
    id: web::Path<i64>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    let book = lock(&records)?.book(BookId(*id))?;
    Ok(HttpResponse::Ok().json(book))
}

#[tracing::instrument(skip(records), ret)]
#[post("/books")]
pub async fn create_book(
    details: web::Json<requests::BookDetails>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    let book = lock(&records)?.create_book(&details)?;
    Ok(HttpResponse::Created().json(book))
}

#[tracing::instrument(skip(records), ret)]
#[put("/books/{id}")]
pub async fn update_book(
    id: web::Path<i64>,
    details: web::Json<requests::BookDetails>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    let book = lock(&records)?.update_book(BookId(*id), &details)?;
    Ok(HttpResponse::Ok().json(book))
}

#[tracing::instrument(skip(records), ret)]
#[delete("/books/{id}")]
pub async fn delete_book(
    id: web::Path<i64>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    lock(&records)?.delete_book(BookId(*id))?;
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(records), ret)]
#[get("/authors")]
pub async fn list_authors(records: Records) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(lock(&records)?.authors()))
}

#[tracing::instrument(skip(records), ret)]
#[get("/authors/{id}")]
pub async fn get_author(
    id: web::Path<i64>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    let author = lock(&records)?.author(AuthorId(*id))?;
    Ok(HttpResponse::Ok().json(author))
}

#[tracing::instrument(skip(records), ret)]
#[post("/authors")]
pub async fn create_author(
    details: web::Json<requests::AuthorDetails>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    let author = lock(&records)?.create_author(&details);
    Ok(HttpResponse::Created().json(author))
}

#[tracing::instrument(skip(records), ret)]
#[put("/authors/{id}")]
pub async fn update_author(
    id: web::Path<i64>,
    details: web::Json<requests::AuthorDetails>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    let author = lock(&records)?.update_author(AuthorId(*id), &details)?;
    Ok(HttpResponse::Ok().json(author))
}

#[tracing::instrument(skip(records), ret)]
#[delete("/authors/{id}")]
pub async fn delete_author(
    id: web::Path<i64>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    lock(&records)?.delete_author(AuthorId(*id))?;
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(records), ret)]
#[get("/loans")]
pub async fn list_loans(records: Records) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(lock(&records)?.loans()))
}

#[tracing::instrument(skip(records), ret)]
#[get("/loans/active")]
pub async fn active_loans(records: Records) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(lock(&records)?.active_loans()))
}

#[tracing::instrument(skip(records), ret)]
#[get("/loans/borrower/{name}")]
pub async fn loans_by_borrower(
    name: web::Path<String>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(lock(&records)?.loans_by_borrower(&name)))
}

#[tracing::instrument(skip(records), ret)]
#[get("/loans/{id}")]
pub async fn get_loan(
    id: web::Path<i64>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    let loan = lock(&records)?.loan(LoanId(*id))?;
    Ok(HttpResponse::Ok().json(loan))
}

/// A loan for a book the book service does not know is a bad request, not a
/// missing resource.
#[tracing::instrument(skip(records), ret)]
#[post("/loans")]
pub async fn create_loan(
    details: web::Json<requests::CreateLoan>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    let loan = lock(&records)?
        .create_loan(&details)
        .map_err(|e| APIError::BadRequest(e.into()))?;
    Ok(HttpResponse::Created().json(loan))
}

#[tracing::instrument(skip(records), ret)]
#[put("/loans/{id}/return")]
pub async fn return_loan(
    id: web::Path<i64>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    let loan = lock(&records)?.return_loan(LoanId(*id))?;
    Ok(HttpResponse::Ok().json(loan))
}

#[tracing::instrument(skip(records), ret)]
#[delete("/loans/{id}")]
pub async fn delete_loan(
    id: web::Path<i64>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    lock(&records)?.delete_loan(LoanId(*id))?;
    Ok(HttpResponse::Ok().finish())
}

#[derive(Debug, Deserialize)]
pub struct CountQuery {
    count: Option<usize>,
}

#[tracing::instrument(skip(records), ret)]
#[get("/recommendations")]
pub async fn random_recommendations(
    query: web::Query<CountQuery>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    let books = lock(&records)?.random_books(query.count);
    Ok(HttpResponse::Ok().json(books))
}

#[tracing::instrument(skip(records), ret)]
#[get("/recommendations/recent")]
pub async fn recent_recommendations(
    records: Records,
) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(lock(&records)?.recent_books()))
}

#[tracing::instrument(skip(records), ret)]
#[get("/recommendations/author/{name}")]
pub async fn recommendations_by_author(
    name: web::Path<String>,
    records: Records,
) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(lock(&records)?.books_by_author(&name)))
}
