use crate::{
    Author, AuthorId, Book, BookId, Loan, LoanId, requests,
};
use reqwest::StatusCode;
use serde::Serialize;
use std::sync::Arc;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Where the three services live when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "LIBRARY_API_BASE_URL";

/// The backend services the console talks to. Each one is mounted under a
/// fixed prefix of the shared base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Book,
    Loan,
    Recommendation,
}

impl Service {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Book => "book-service/api",
            Self::Loan => "loan-service/api",
            Self::Recommendation => "recommendation-service/api",
        }
    }
}

/// Immutable endpoint configuration, resolved once at startup and shared by
/// every client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `LIBRARY_API_BASE_URL`, falling back to the
    /// local development host.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn service_url(&self, service: Service) -> String {
        format!("{}/{}", self.base_url, service.prefix())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// An API client for the book, loan and recommendation services.
#[derive(Clone)]
pub struct APIClient {
    pub config: Arc<ApiConfig>,
    pub inner_client: reqwest::Client,
}

impl PartialEq for APIClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
    }
}

impl APIClient {
    pub fn new(config: Arc<ApiConfig>) -> Self {
        Self {
            config,
            inner_client: reqwest::Client::new(),
        }
    }
}

/// Helper methods for http actions
impl APIClient {
    pub fn format_url(&self, service: Service, path: &str) -> String {
        format!("{}/{path}", self.config.service_url(service))
    }

    async fn get(&self, service: Service, path: &str) -> ReqwestResult {
        let url = self.format_url(service, path);
        tracing::debug!("GET {url}");
        self.inner_client.get(url).send().await
    }

    async fn post(
        &self,
        service: Service,
        path: &str,
        body: &impl Serialize,
    ) -> ReqwestResult {
        let url = self.format_url(service, path);
        tracing::debug!("POST {url}");
        self.inner_client.post(url).json(body).send().await
    }

    async fn put(
        &self,
        service: Service,
        path: &str,
        body: &impl Serialize,
    ) -> ReqwestResult {
        let url = self.format_url(service, path);
        tracing::debug!("PUT {url}");
        self.inner_client.put(url).json(body).send().await
    }

    async fn empty_put(&self, service: Service, path: &str) -> ReqwestResult {
        let url = self.format_url(service, path);
        tracing::debug!("PUT {url}");
        self.inner_client.put(url).send().await
    }

    async fn delete(&self, service: Service, path: &str) -> ReqwestResult {
        let url = self.format_url(service, path);
        tracing::debug!("DELETE {url}");
        self.inner_client.delete(url).send().await
    }
}

/// Book service: books
impl APIClient {
    pub async fn list_books(&self) -> Result<Vec<Book>, ClientError> {
        let response = self.get(Service::Book, "books").await?;
        ok_body(response).await
    }

    pub async fn get_book(&self, book_id: BookId) -> Result<Book, ClientError> {
        let response =
            self.get(Service::Book, &format!("books/{book_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_book(
        &self,
        details: &requests::BookDetails,
    ) -> Result<(), ClientError> {
        let response = self.post(Service::Book, "books", details).await?;
        ok_empty(response).await
    }

    pub async fn update_book(
        &self,
        book_id: BookId,
        details: &requests::BookDetails,
    ) -> Result<(), ClientError> {
        let response = self
            .put(Service::Book, &format!("books/{book_id}"), details)
            .await?;
        ok_empty(response).await
    }

    pub async fn delete_book(&self, book_id: BookId) -> Result<(), ClientError> {
        let response = self
            .delete(Service::Book, &format!("books/{book_id}"))
            .await?;
        ok_empty(response).await
    }
}

/// Book service: authors
impl APIClient {
    pub async fn list_authors(&self) -> Result<Vec<Author>, ClientError> {
        let response = self.get(Service::Book, "authors").await?;
        ok_body(response).await
    }

    pub async fn get_author(
        &self,
        author_id: AuthorId,
    ) -> Result<Author, ClientError> {
        let response = self
            .get(Service::Book, &format!("authors/{author_id}"))
            .await?;
        ok_body(response).await
    }

    pub async fn create_author(
        &self,
        details: &requests::AuthorDetails,
    ) -> Result<(), ClientError> {
        let response = self.post(Service::Book, "authors", details).await?;
        ok_empty(response).await
    }

    pub async fn update_author(
        &self,
        author_id: AuthorId,
        details: &requests::AuthorDetails,
    ) -> Result<(), ClientError> {
        let response = self
            .put(Service::Book, &format!("authors/{author_id}"), details)
            .await?;
        ok_empty(response).await
    }

    pub async fn delete_author(
        &self,
        author_id: AuthorId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(Service::Book, &format!("authors/{author_id}"))
            .await?;
        ok_empty(response).await
    }
}

/// Loan service
impl APIClient {
    pub async fn list_loans(&self) -> Result<Vec<Loan>, ClientError> {
        let response = self.get(Service::Loan, "loans").await?;
        ok_body(response).await
    }

    /// Loans that have not been returned yet.
    pub async fn active_loans(&self) -> Result<Vec<Loan>, ClientError> {
        let response = self.get(Service::Loan, "loans/active").await?;
        ok_body(response).await
    }

    pub async fn get_loan(&self, loan_id: LoanId) -> Result<Loan, ClientError> {
        let response =
            self.get(Service::Loan, &format!("loans/{loan_id}")).await?;
        ok_body(response).await
    }

    pub async fn loans_by_borrower(
        &self,
        borrower_name: &str,
    ) -> Result<Vec<Loan>, ClientError> {
        let path =
            format!("loans/borrower/{}", urlencoding::encode(borrower_name));
        let response = self.get(Service::Loan, &path).await?;
        ok_body(response).await
    }

    pub async fn create_loan(
        &self,
        details: &requests::CreateLoan,
    ) -> Result<(), ClientError> {
        let response = self.post(Service::Loan, "loans", details).await?;
        ok_empty(response).await
    }

    /// Mark a loan as returned. The loan service records today's date.
    pub async fn return_loan(&self, loan_id: LoanId) -> Result<(), ClientError> {
        let response = self
            .empty_put(Service::Loan, &format!("loans/{loan_id}/return"))
            .await?;
        ok_empty(response).await
    }

    pub async fn delete_loan(&self, loan_id: LoanId) -> Result<(), ClientError> {
        let response = self
            .delete(Service::Loan, &format!("loans/{loan_id}"))
            .await?;
        ok_empty(response).await
    }
}

/// Recommendation service
impl APIClient {
    /// A random selection of books. Without a count, or with a count of
    /// zero, the service picks its own default.
    pub async fn random_recommendations(
        &self,
        count: Option<u32>,
    ) -> Result<Vec<Book>, ClientError> {
        let path = match count.filter(|count| *count > 0) {
            Some(count) => format!("recommendations?count={count}"),
            None => "recommendations".to_string(),
        };
        let response = self.get(Service::Recommendation, &path).await?;
        ok_body(response).await
    }

    pub async fn recent_recommendations(
        &self,
    ) -> Result<Vec<Book>, ClientError> {
        let response = self
            .get(Service::Recommendation, "recommendations/recent")
            .await?;
        ok_body(response).await
    }

    pub async fn recommendations_by_author(
        &self,
        author_name: &str,
    ) -> Result<Vec<Book>, ClientError> {
        let response = self
            .get(Service::Recommendation, &by_author_path(author_name))
            .await?;
        ok_body(response).await
    }
}

fn by_author_path(author_name: &str) -> String {
    format!(
        "recommendations/author/{}",
        urlencoding::encode(author_name)
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-success status, containing the response text.
    #[error("{}", api_error_message(.0, .1))]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// The body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
            Self::Decode(_) => None,
        }
    }
}

fn api_error_message(status: &StatusCode, text: &str) -> String {
    if text.trim().is_empty() {
        format!("HTTP error: {}", status.as_u16())
    } else {
        text.to_string()
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice::<T>(&bytes)?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
