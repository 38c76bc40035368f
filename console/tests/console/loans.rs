use console::{
    CollectionView, Locale, Page,
    pages::{LoanFilter, LoansPage},
};
use jiff::ToSpan;
use payloads::{LoanId, LoanStatus};
use test_helpers::{TestApp, spawn_app};

use crate::open_page;

const LOANS: &str = "/loan-service/api/loans";
const BOOKS: &str = "/book-service/api/books";

fn seed_catalogue(app: &TestApp) {
    app.seed_author(1, "Jane Austen", "British");
    app.seed_book(2, "Emma", "9780141439587", 1815, 1);
    app.seed_book(3, "Persuasion", "9780141439686", 1817, 1);
}

#[tokio::test]
async fn returned_loan_is_no_longer_returnable() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let today = app.today();
    let lent = today.saturating_sub(20.days());
    app.seed_loan(42, 2, "Ada Lovelace", lent, lent.saturating_add(14.days()));
    let (page, log) = open_page(&app, Locale::English, LoansPage::new);
    page.mount().await;

    let state = page.state();
    let loan = &state.loans.items()[0];
    assert_eq!(loan.status_on(today), LoanStatus::Overdue);
    assert!(loan.is_returnable());
    assert_eq!(state.book_label(loan, "Unknown"), "Emma");

    app.backend.clear_requests();
    assert!(page.return_loan(LoanId(42)).await);

    let requests = app.backend.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].is("PUT", "/loan-service/api/loans/42/return"));
    assert!(requests[1].is("GET", LOANS));

    let state = page.state();
    let loan = &state.loans.items()[0];
    assert_eq!(loan.id, LoanId(42));
    assert_eq!(loan.return_date, Some(today));
    assert_eq!(loan.status_on(today), LoanStatus::Returned);
    assert!(!loan.is_returnable());
    assert_eq!(log.successes(), vec!["Book returned successfully"]);
    Ok(())
}

#[tokio::test]
async fn new_loan_is_created_and_listed() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let (page, log) = open_page(&app, Locale::English, LoansPage::new);
    page.mount().await;
    assert_eq!(page.state().loans.view(), CollectionView::Empty);
    assert_eq!(page.state().books.items().len(), 2);

    page.open_new_loan();
    page.update_loan_form(|form| {
        form.book_id = "3".into();
        form.borrower_name = "  Alan Turing ".into();
    });
    app.backend.clear_requests();
    assert!(page.submit_loan().await);
    assert_eq!(app.backend.count("POST", LOANS), 1);
    assert_eq!(app.backend.count("GET", LOANS), 1);

    let state = page.state();
    assert!(!state.session.is_open());
    let loan = &state.loans.items()[0];
    assert_eq!(loan.borrower_name, "Alan Turing");
    assert_eq!(loan.loan_date, app.today());
    assert_eq!(loan.due_date, Some(app.today().saturating_add(14.days())));
    assert_eq!(loan.status_on(app.today()), LoanStatus::Active);
    assert_eq!(state.book_label(loan, "Unknown"), "Persuasion");
    assert_eq!(log.successes(), vec!["Loan created successfully"]);
    Ok(())
}

#[tokio::test]
async fn blank_borrower_is_rejected_before_any_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let (page, log) = open_page(&app, Locale::French, LoansPage::new);
    page.mount().await;

    page.open_new_loan();
    page.update_loan_form(|form| {
        form.book_id = "2".into();
        form.borrower_name = "   ".into();
    });
    app.backend.clear_requests();
    assert!(!page.submit_loan().await);

    page.update_loan_form(|form| form.book_id = String::new());
    assert!(!page.submit_loan().await);

    assert!(app.backend.requests().is_empty());
    assert!(page.state().session.is_open());
    assert_eq!(
        log.errors(),
        vec![
            "Le nom de l'emprunteur est requis",
            "Veuillez sélectionner un livre valide",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn rejected_loan_keeps_the_dialog() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let (page, log) = open_page(&app, Locale::English, LoansPage::new);
    page.mount().await;

    page.open_new_loan();
    page.update_loan_form(|form| {
        form.book_id = "999".into();
        form.borrower_name = "Ada".into();
    });
    app.backend.clear_requests();
    assert!(!page.submit_loan().await);

    assert_eq!(app.backend.count("GET", LOANS), 0);
    let state = page.state();
    assert_eq!(state.session.fields().unwrap().book_id, "999");
    let errors = log.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Failed to create the loan"));
    Ok(())
}

#[tokio::test]
async fn active_filter_lists_open_loans_only() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let today = app.today();
    app.seed_loan(10, 2, "Ada", today, today.saturating_add(14.days()));
    app.seed_loan(11, 3, "Alan", today, today.saturating_add(14.days()));
    app.backend.library().return_loan(LoanId(11))?;
    let (page, _log) = open_page(&app, Locale::English, LoansPage::new);
    page.mount().await;
    assert_eq!(page.state().loans.items().len(), 2);

    app.backend.clear_requests();
    page.toggle_filter().await;
    assert_eq!(page.state().filter, LoanFilter::Active);
    assert_eq!(app.backend.count("GET", &format!("{LOANS}/active")), 1);
    assert_eq!(app.backend.count("GET", BOOKS), 1);
    let state = page.state();
    assert_eq!(state.loans.items().len(), 1);
    assert_eq!(state.loans.items()[0].id, LoanId(10));

    // mutations refetch with the filter in force
    app.backend.clear_requests();
    assert!(page.return_loan(LoanId(10)).await);
    assert_eq!(app.backend.count("GET", &format!("{LOANS}/active")), 1);
    assert_eq!(page.state().loans.view(), CollectionView::Empty);

    page.set_filter(LoanFilter::All).await;
    assert_eq!(page.state().loans.items().len(), 2);
    Ok(())
}

#[tokio::test]
async fn deleted_loan_disappears_after_one_refetch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let today = app.today();
    app.seed_loan(10, 2, "Ada", today, today.saturating_add(14.days()));
    let (page, log) = open_page(&app, Locale::English, LoansPage::new);
    page.mount().await;

    app.backend.clear_requests();
    assert!(page.delete_loan(LoanId(10)).await);
    assert_eq!(app.backend.count("DELETE", &format!("{LOANS}/10")), 1);
    assert_eq!(app.backend.count("GET", LOANS), 1);
    assert_eq!(page.state().loans.view(), CollectionView::Empty);
    assert_eq!(log.successes(), vec!["Loan deleted successfully"]);

    // a second delete of the same loan fails and refetches nothing
    app.backend.clear_requests();
    assert!(!page.delete_loan(LoanId(10)).await);
    assert_eq!(app.backend.count("GET", LOANS), 0);
    assert_eq!(log.errors().len(), 1);
    Ok(())
}
