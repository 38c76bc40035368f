use console::{
    CollectionView, Locale, Page,
    pages::{RecommendationTab, RecommendationsPage},
};
use test_helpers::{TestApp, spawn_app};

use crate::{HEAD_START, SLOW, open_page};

const RANDOM: &str = "/recommendation-service/api/recommendations";
const RECENT: &str = "/recommendation-service/api/recommendations/recent";

fn seed_catalogue(app: &TestApp) {
    app.seed_author(1, "Jane Austen", "British");
    app.seed_author(2, "Sally Rooney", "Irish");
    let titles = [
        ("Pride and Prejudice", 1813, 1),
        ("Emma", 1815, 1),
        ("Persuasion", 1817, 1),
        ("Sense and Sensibility", 1811, 1),
        ("Mansfield Park", 1814, 1),
        ("Northanger Abbey", 1817, 1),
        ("Normal People", 2018, 2),
        ("Intermezzo", 2024, 2),
    ];
    for (offset, (title, year, author)) in titles.into_iter().enumerate() {
        let id = 10 + offset as i64;
        app.seed_book(id, title, &format!("isbn-{id}"), year, author);
    }
}

#[tokio::test]
async fn random_selection_asks_for_six_books() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let (page, _log) = open_page(&app, Locale::English, RecommendationsPage::new);
    assert_eq!(page.state().results.view(), CollectionView::Loading);

    page.mount().await;

    let requests = app.backend.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].is("GET", RANDOM));
    assert_eq!(requests[0].query.as_deref(), Some("count=6"));

    let state = page.state();
    assert_eq!(state.tab, RecommendationTab::Random);
    assert_eq!(state.results.items().len(), 6);
    assert_eq!(state.results.items()[0].author_name.as_deref(), Some("Jane Austen"));
    Ok(())
}

#[tokio::test]
async fn recent_tab_lists_the_last_ten_years() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let (page, _log) = open_page(&app, Locale::English, RecommendationsPage::new);
    page.mount().await;

    assert!(page.show_recent().await);
    assert_eq!(app.backend.count("GET", RECENT), 1);

    let state = page.state();
    assert_eq!(state.tab, RecommendationTab::Recent);
    let titles: Vec<_> = state.results.items().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Normal People", "Intermezzo"]);
    Ok(())
}

#[tokio::test]
async fn author_search_with_no_match_shows_no_results() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let (page, log) = open_page(&app, Locale::English, RecommendationsPage::new);
    page.mount().await;

    page.set_author_query("J. Austen");
    assert!(page.search_author().await);

    assert_eq!(
        app.backend.count(
            "GET",
            "/recommendation-service/api/recommendations/author/J.%20Austen"
        ),
        1
    );
    let state = page.state();
    assert_eq!(state.tab, RecommendationTab::Author);
    assert!(!state.results.is_loading());
    assert_eq!(state.results.view(), CollectionView::Empty);
    assert!(log.notices().is_empty());
    Ok(())
}

#[tokio::test]
async fn author_search_matches_case_insensitively() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let (page, _log) = open_page(&app, Locale::English, RecommendationsPage::new);
    page.mount().await;

    page.set_author_query("  rooney ");
    assert!(page.search_author().await);

    assert_eq!(
        app.backend.count(
            "GET",
            "/recommendation-service/api/recommendations/author/rooney"
        ),
        1
    );
    assert_eq!(page.state().results.items().len(), 2);
    Ok(())
}

#[tokio::test]
async fn blank_author_query_sends_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let (page, log) = open_page(&app, Locale::French, RecommendationsPage::new);
    page.mount().await;

    app.backend.clear_requests();
    page.set_author_query("   ");
    assert!(!page.search_author().await);

    assert!(app.backend.requests().is_empty());
    let state = page.state();
    assert_eq!(state.tab, RecommendationTab::Random);
    assert_eq!(state.results.items().len(), 6);
    assert_eq!(log.errors(), vec!["Entrez un nom d'auteur"]);
    Ok(())
}

#[tokio::test]
async fn failed_search_keeps_the_previous_books() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let (page, log) = open_page(&app, Locale::English, RecommendationsPage::new);
    page.mount().await;

    app.backend.fail_next(
        "GET",
        "/recommendation-service/api/recommendations/author/Austen",
        500,
    );
    page.set_author_query("Austen");
    assert!(!page.search_author().await);

    assert_eq!(page.state().results.items().len(), 6);
    let errors = log.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Author search failed"));
    Ok(())
}

#[tokio::test]
async fn slow_tab_does_not_overwrite_a_newer_one() -> anyhow::Result<()> {
    let app = spawn_app().await;
    seed_catalogue(&app);
    let (page, _log) = open_page(&app, Locale::English, RecommendationsPage::new);
    page.mount().await;

    app.backend.delay_next("GET", RANDOM, SLOW);
    let (random, recent) = tokio::join!(page.show_random(), async {
        tokio::time::sleep(HEAD_START).await;
        page.show_recent().await
    });

    assert!(!random);
    assert!(recent);
    let state = page.state();
    assert_eq!(state.tab, RecommendationTab::Recent);
    assert_eq!(state.results.items().len(), 2);
    Ok(())
}
