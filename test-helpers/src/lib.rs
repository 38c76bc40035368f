pub mod backend;
pub mod mock;
pub mod telemetry;

use backend::{Backend, MockConfig};
use console::{Notice, NoticeLevel, Notifier};
use jiff::civil::{Date, date};
use payloads::{
    APIClient, ApiConfig, Author, AuthorId, Book, BookId, Loan, LoanId,
    StatusCode,
};
use std::{cell::RefCell, rc::Rc, sync::Arc};

/// The date the mock services treat as today in tests.
pub const TEST_TODAY: Date = date(2025, 1, 15);

pub struct TestApp {
    pub port: u16,
    pub client: APIClient,
    pub backend: Backend,
}

impl TestApp {
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn today(&self) -> Date {
        self.backend.library().today()
    }

    pub fn seed_author(&self, id: i64, name: &str, nationality: &str) -> Author {
        let author = Author {
            id: AuthorId(id),
            name: name.into(),
            nationality: nationality.into(),
        };
        self.backend.library().seed_author(author.clone());
        author
    }

    pub fn seed_book(
        &self,
        id: i64,
        title: &str,
        isbn: &str,
        publication_year: i32,
        author_id: i64,
    ) -> Book {
        let book = Book {
            id: BookId(id),
            title: title.into(),
            isbn: isbn.into(),
            publication_year,
            author_id: AuthorId(author_id),
            author_name: None,
        };
        self.backend.library().seed_book(book.clone());
        book
    }

    /// Seed an open loan with explicit dates.
    pub fn seed_loan(
        &self,
        id: i64,
        book_id: i64,
        borrower_name: &str,
        loan_date: Date,
        due_date: Date,
    ) -> Loan {
        let loan = Loan {
            id: LoanId(id),
            book_id: BookId(book_id),
            borrower_name: borrower_name.into(),
            loan_date,
            due_date: Some(due_date),
            return_date: None,
            book_title: None,
        };
        self.backend.library().seed_loan(loan.clone());
        loan
    }
}

/// Start the mock services on `port` with [`TEST_TODAY`] as the date.
pub async fn spawn_app_on_port(port: u16) -> TestApp {
    spawn_app_with(MockConfig {
        ip: "127.0.0.1".into(),
        port,
        today: TEST_TODAY,
    })
    .await
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

pub async fn spawn_app_with(mut config: MockConfig) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    telemetry::try_init_subscriber(subscriber);

    let backend = Backend::new(config.today);
    let server = backend::build(&mut config, backend.clone()).unwrap();
    tokio::spawn(server);

    let api_config =
        ApiConfig::new(format!("http://{}:{}", config.ip, config.port));
    TestApp {
        port: config.port,
        client: APIClient::new(Arc::new(api_config)),
        backend,
    }
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

/// Collects everything a page reports so tests can assert on it.
#[derive(Clone, Default)]
pub struct NoticeLog(Rc<RefCell<Vec<Notice>>>);

impl NoticeLog {
    pub fn notices(&self) -> Vec<Notice> {
        self.0.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(NoticeLevel::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages(NoticeLevel::Success)
    }

    fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter(|notice| notice.level == level)
            .map(|notice| notice.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        self.0.borrow_mut().push(notice);
    }
}
