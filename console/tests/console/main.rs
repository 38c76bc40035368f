mod api_client;
mod books;
mod loans;
mod recommendations;

use console::{Locale, Notifier};
use std::{rc::Rc, time::Duration};
use test_helpers::{NoticeLog, TestApp};

/// Long enough for a concurrent request to overtake a delayed one.
const SLOW: Duration = Duration::from_millis(300);
const HEAD_START: Duration = Duration::from_millis(50);

/// Build a page controller wired to the app's client and a fresh notice log.
fn open_page<P>(
    app: &TestApp,
    locale: Locale,
    new: impl FnOnce(payloads::APIClient, Rc<dyn Notifier>, Locale) -> P,
) -> (P, NoticeLog) {
    let log = NoticeLog::default();
    let page = new(app.client.clone(), Rc::new(log.clone()), locale);
    (page, log)
}
