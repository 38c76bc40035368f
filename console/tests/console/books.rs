use console::{
    CollectionView, Locale, Page, SessionKind,
    pages::BooksPage,
};
use payloads::{AuthorId, BookId, requests};
use test_helpers::spawn_app;

use crate::{HEAD_START, SLOW, open_page};

const BOOKS: &str = "/book-service/api/books";
const AUTHORS: &str = "/book-service/api/authors";

#[tokio::test]
async fn created_book_is_listed_with_its_author() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(3, "Frank Herbert", "American");
    let (page, log) = open_page(&app, Locale::English, BooksPage::new);

    page.mount().await;
    assert_eq!(page.state().books.view(), CollectionView::Empty);
    assert_eq!(page.state().authors.items().len(), 1);

    page.open_new_book();
    page.update_book_form(|form| {
        form.title = "Dune".into();
        form.isbn = "9780441013593".into();
        form.publication_year = "1965".into();
        form.author_id = "3".into();
    });
    app.backend.clear_requests();
    assert!(page.submit_book().await);

    let requests = app.backend.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].is("POST", BOOKS));
    assert!(requests[1].is("GET", BOOKS));

    let state = page.state();
    assert!(!state.book_session.is_open());
    let books = state.books.items();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].publication_year, 1965);
    assert_eq!(books[0].author_id, AuthorId(3));
    assert_eq!(state.author_label(&books[0], "Unknown"), "Frank Herbert");
    assert_eq!(log.successes(), vec!["Book created successfully"]);

    // the next dialog starts blank
    page.open_new_book();
    let state = page.state();
    let form = state.book_session.fields().unwrap();
    assert!(form.title.is_empty());
    assert!(form.author_id.is_empty());
    Ok(())
}

#[tokio::test]
async fn failed_create_keeps_dialog_open_without_refetch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(3, "Frank Herbert", "American");
    let (page, log) = open_page(&app, Locale::English, BooksPage::new);
    page.mount().await;

    page.open_new_book();
    page.update_book_form(|form| {
        form.title = "Dune".into();
        form.isbn = "9780441013593".into();
        form.author_id = "3".into();
    });
    app.backend.clear_requests();
    app.backend.fail_next("POST", BOOKS, 500);
    assert!(!page.submit_book().await);

    assert_eq!(app.backend.count("POST", BOOKS), 1);
    assert_eq!(app.backend.count("GET", BOOKS), 0);

    let state = page.state();
    assert!(state.book_session.is_open());
    assert!(!state.book_session.is_pending());
    assert_eq!(state.book_session.fields().unwrap().title, "Dune");
    assert!(state.books.items().is_empty());

    let errors = log.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Failed to save the book"));
    Ok(())
}

#[tokio::test]
async fn invalid_form_sends_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (page, log) = open_page(&app, Locale::English, BooksPage::new);
    page.mount().await;

    page.open_new_book();
    page.update_book_form(|form| {
        form.title = "Dune".into();
        form.isbn = "9780441013593".into();
    });
    app.backend.clear_requests();
    assert!(!page.submit_book().await);

    assert!(app.backend.requests().is_empty());
    assert!(page.state().book_session.is_open());
    assert_eq!(log.errors(), vec!["Author is required"]);
    Ok(())
}

#[tokio::test]
async fn successful_delete_refetches_once() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(1, "Jane Austen", "British");
    app.seed_book(2, "Emma", "9780141439587", 1815, 1);
    let (page, log) = open_page(&app, Locale::English, BooksPage::new);
    page.mount().await;
    assert_eq!(page.state().books.items().len(), 1);

    app.backend.clear_requests();
    assert!(page.delete_book(BookId(2)).await);

    assert_eq!(app.backend.count("DELETE", &format!("{BOOKS}/2")), 1);
    assert_eq!(app.backend.count("GET", BOOKS), 1);
    assert_eq!(app.backend.count("GET", AUTHORS), 0);
    assert_eq!(page.state().books.view(), CollectionView::Empty);
    assert_eq!(log.successes(), vec!["Book deleted successfully"]);
    Ok(())
}

#[tokio::test]
async fn failed_refetch_keeps_previous_items() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(1, "Jane Austen", "British");
    app.seed_book(2, "Emma", "9780141439587", 1815, 1);
    let (page, log) = open_page(&app, Locale::English, BooksPage::new);
    page.mount().await;

    app.backend.fail_next("GET", BOOKS, 503);
    assert!(!page.refresh_books().await);

    let state = page.state();
    assert!(!state.books.is_loading());
    assert_eq!(state.books.items().len(), 1);
    assert_eq!(log.errors().len(), 1);
    Ok(())
}

#[tokio::test]
async fn year_can_be_cleared_and_retyped() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(3, "Frank Herbert", "American");
    let (page, log) = open_page(&app, Locale::English, BooksPage::new);
    page.mount().await;

    page.open_new_book();
    page.update_book_form(|form| {
        form.title = "Dune".into();
        form.isbn = "9780441013593".into();
        form.author_id = "3".into();
        form.publication_year.clear();
    });
    assert_eq!(page.state().book_session.fields().unwrap().publication_year, "");
    app.backend.clear_requests();
    assert!(!page.submit_book().await);
    assert!(app.backend.requests().is_empty());
    assert_eq!(log.errors(), vec!["Year is required"]);

    page.update_book_form(|form| form.publication_year = "1965".into());
    assert!(page.submit_book().await);
    assert_eq!(page.state().books.items()[0].publication_year, 1965);
    Ok(())
}

#[tokio::test]
async fn malformed_lists_keep_previous_items() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(1, "Jane Austen", "British");
    app.seed_book(2, "Emma", "9780141439587", 1815, 1);
    let (page, log) = open_page(&app, Locale::English, BooksPage::new);
    page.mount().await;
    assert_eq!(page.state().books.items().len(), 1);
    log.clear();

    app.backend.garble_next("GET", BOOKS);
    app.backend.garble_next("GET", AUTHORS);
    let (books_ok, authors_ok) =
        futures::join!(page.refresh_books(), page.refresh_authors());
    assert!(!books_ok);
    assert!(!authors_ok);

    let state = page.state();
    assert!(!state.books.is_loading());
    assert!(!state.authors.is_loading());
    assert_eq!(state.books.items()[0].title, "Emma");
    assert_eq!(state.authors.items()[0].name, "Jane Austen");

    let errors = log.errors();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.starts_with("Failed to load books: Unexpected response")));
    assert!(errors.iter().any(|e| e.starts_with("Failed to load authors: Unexpected response")));
    Ok(())
}

#[tokio::test]
async fn editing_an_author_refetches_authors_only() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let author = app.seed_author(1, "J. Austen", "British");
    app.seed_book(2, "Emma", "9780141439587", 1815, 1);
    let (page, log) = open_page(&app, Locale::English, BooksPage::new);
    page.mount().await;

    page.edit_author(&author);
    assert_eq!(
        page.state().author_session.kind(),
        Some(SessionKind::Edit(AuthorId(1)))
    );
    page.update_author_form(|form| form.name = "Jane Austen".into());
    app.backend.clear_requests();
    assert!(page.submit_author().await);

    let requests = app.backend.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].is("PUT", &format!("{AUTHORS}/1")));
    assert!(requests[1].is("GET", AUTHORS));

    let state = page.state();
    let emma = &state.books.items()[0];
    assert_eq!(state.author_label(emma, "Unknown"), "Jane Austen");
    assert_eq!(log.successes(), vec!["Author updated successfully"]);
    Ok(())
}

#[tokio::test]
async fn book_of_deleted_author_shows_unknown() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(1, "Jane Austen", "British");
    app.seed_book(2, "Emma", "9780141439587", 1815, 1);
    let (page, _log) = open_page(&app, Locale::French, BooksPage::new);
    page.mount().await;

    assert!(page.delete_author(AuthorId(1)).await);

    let state = page.state();
    let emma = &state.books.items()[0];
    let unknown = Locale::French.messages().unknown_author;
    assert_eq!(state.author_label(emma, unknown), "Inconnu");
    assert_eq!(
        state.author_label(emma, Locale::English.messages().unknown_author),
        "Unknown Author"
    );
    Ok(())
}

#[tokio::test]
async fn only_the_latest_refetch_is_applied() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(1, "Jane Austen", "British");
    app.seed_book(2, "Emma", "9780141439587", 1815, 1);
    let (page, _log) = open_page(&app, Locale::English, BooksPage::new);
    page.mount().await;

    app.backend.delay_next("GET", BOOKS, SLOW);
    let (slow, fast) = tokio::join!(page.refresh_books(), async {
        tokio::time::sleep(HEAD_START).await;
        app.client
            .create_book(&requests::BookDetails {
                title: "Persuasion".into(),
                isbn: "9780141439686".into(),
                publication_year: 1817,
                author_id: AuthorId(1),
            })
            .await?;
        anyhow::Ok(page.refresh_books().await)
    });

    assert!(!slow);
    assert!(fast?);
    let state = page.state();
    assert!(!state.books.is_loading());
    assert_eq!(state.books.items().len(), 2);
    Ok(())
}

#[tokio::test]
async fn late_results_are_dropped_after_unmount() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_author(1, "Jane Austen", "British");
    app.seed_book(2, "Emma", "9780141439587", 1815, 1);
    let (page, log) = open_page(&app, Locale::English, BooksPage::new);

    app.backend.delay_next("GET", BOOKS, SLOW);
    tokio::join!(page.mount(), async {
        tokio::time::sleep(HEAD_START).await;
        page.unmount();
    });

    let state = page.state();
    assert!(state.books.is_closed());
    assert!(state.books.items().is_empty());
    assert!(!state.books.is_loaded());
    assert!(log.notices().is_empty());
    Ok(())
}

#[tokio::test]
async fn second_submit_while_pending_is_ignored() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (page, log) = open_page(&app, Locale::English, BooksPage::new);
    page.mount().await;

    page.open_new_author();
    page.update_author_form(|form| {
        form.name = "Victor Hugo".into();
        form.nationality = "French".into();
    });
    app.backend.delay_next("POST", AUTHORS, SLOW);
    let (first, second) = tokio::join!(page.submit_author(), async {
        tokio::time::sleep(HEAD_START).await;
        assert!(page.state().author_session.is_pending());
        page.submit_author().await
    });

    assert!(first);
    assert!(!second);
    assert_eq!(app.backend.count("POST", AUTHORS), 1);
    assert_eq!(page.state().authors.items().len(), 1);
    assert_eq!(log.notices().len(), 1);
    Ok(())
}

#[tokio::test]
async fn failures_are_reported_in_french() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (page, log) = open_page(&app, Locale::French, BooksPage::new);

    app.backend.fail_next("GET", AUTHORS, 500);
    page.mount().await;

    let errors = log.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Échec du chargement des auteurs"));
    assert_eq!(page.state().authors.view(), CollectionView::Empty);
    Ok(())
}
