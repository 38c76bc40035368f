//! An in-memory stand-in for the book, loan and recommendation services,
//! served over real HTTP so the console can be exercised end to end.

pub mod library;
pub mod routes;

use actix_cors::Cors;
use actix_web::dev::{Server, Service};
use actix_web::{App, HttpResponse, HttpServer, http::StatusCode, web};
use futures::future::Either;
use jiff::civil::Date;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

pub use library::{Library, StoreError};

pub struct MockConfig {
    /// "127.0.0.1" for local use, "0.0.0.0" for public access
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// The date the services treat as today when lending and returning.
    pub today: Date,
}

impl MockConfig {
    pub fn local(port: u16) -> Self {
        Self {
            ip: "127.0.0.1".into(),
            port,
            today: jiff::Zoned::now().date(),
        }
    }
}

/// One request as it reached the services. The path is kept exactly as
/// sent, percent-encoding included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
}

impl RecordedRequest {
    pub fn is(&self, method: &str, path: &str) -> bool {
        self.method.eq_ignore_ascii_case(method) && self.path == path
    }
}

/// Body served in place of a record list by [`Backend::garble_next`].
pub const GARBLED_BODY: &str = r#"{"oops":true}"#;

/// An answer given instead of running the handler.
#[derive(Debug, Clone, Copy)]
enum Reply {
    Status(StatusCode),
    /// 200 with a JSON body of the wrong shape.
    Garbled,
}

/// A one-shot interference with the next matching request.
#[derive(Debug, Clone)]
struct Fault {
    method: String,
    path: String,
    reply: Option<Reply>,
    /// Hold the response back for this long.
    delay: Option<Duration>,
}

/// Handles onto the running mock, shared with whoever spawned it.
#[derive(Clone)]
pub struct Backend {
    library: Arc<Mutex<Library>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    faults: Arc<Mutex<Vec<Fault>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Backend {
    pub fn new(today: Date) -> Self {
        Self {
            library: Arc::new(Mutex::new(Library::new(today))),
            requests: Arc::new(Mutex::new(Vec::new())),
            faults: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Direct access to the stored records, for seeding and inspection.
    pub fn library(&self) -> MutexGuard<'_, Library> {
        lock(&self.library)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// How many `method` requests hit exactly `path`.
    pub fn count(&self, method: &str, path: &str) -> usize {
        lock(&self.requests)
            .iter()
            .filter(|request| request.is(method, path))
            .count()
    }

    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    /// Make the next `method path` request fail with `status`.
    pub fn fail_next(&self, method: &str, path: &str, status: u16) {
        let status = StatusCode::from_u16(status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        lock(&self.faults).push(Fault {
            method: method.to_string(),
            path: path.to_string(),
            reply: Some(Reply::Status(status)),
            delay: None,
        });
    }

    /// Make the next `method path` request succeed with a body that is
    /// valid JSON but not what the endpoint returns.
    pub fn garble_next(&self, method: &str, path: &str) {
        lock(&self.faults).push(Fault {
            method: method.to_string(),
            path: path.to_string(),
            reply: Some(Reply::Garbled),
            delay: None,
        });
    }

    /// Make the response to the next `method path` request arrive `delay`
    /// late. The handler runs immediately, so the response reflects the
    /// records as they were when the request arrived.
    pub fn delay_next(&self, method: &str, path: &str, delay: Duration) {
        lock(&self.faults).push(Fault {
            method: method.to_string(),
            path: path.to_string(),
            reply: None,
            delay: Some(delay),
        });
    }

    fn record(&self, method: &str, uri: &actix_web::http::Uri) -> Option<Fault> {
        lock(&self.requests).push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
        });

        let mut faults = lock(&self.faults);
        let index = faults.iter().position(|fault| {
            fault.method.eq_ignore_ascii_case(method) && fault.path == uri.path()
        })?;
        Some(faults.remove(index))
    }
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut MockConfig, backend: Backend) -> std::io::Result<Server> {
    backend.library().set_today(config.today);

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();

    let library = web::Data::from(backend.library.clone());
    let server = HttpServer::new(move || {
        let backend = backend.clone();
        App::new()
            .wrap_fn(move |req, srv| {
                let fault = backend.record(req.method().as_str(), req.uri());
                let delay = fault.as_ref().and_then(|fault| fault.delay);
                let response = match fault.and_then(|fault| fault.reply) {
                    Some(Reply::Status(status)) => {
                        tracing::debug!(%status, path = req.path(), "injected failure");
                        Either::Left(req.into_response(
                            HttpResponse::build(status).body("injected failure"),
                        ))
                    }
                    Some(Reply::Garbled) => {
                        tracing::debug!(path = req.path(), "injected garbled body");
                        Either::Left(req.into_response(
                            HttpResponse::Ok()
                                .content_type("application/json")
                                .body(GARBLED_BODY),
                        ))
                    }
                    None => Either::Right(srv.call(req)),
                };
                async move {
                    let response = match response {
                        Either::Left(response) => response,
                        Either::Right(call) => call.await?,
                    };
                    if let Some(delay) = delay {
                        tokio::time::sleep(delay).await;
                    }
                    Ok::<_, actix_web::Error>(response)
                }
            })
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .service(routes::book_services())
            .service(routes::loan_services())
            .service(routes::recommendation_services())
            .app_data(library.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
