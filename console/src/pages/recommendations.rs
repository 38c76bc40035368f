use crate::{
    collection::CollectionState,
    forms::validate_author_query,
    i18n::{Locale, Messages},
    notify::{Notice, Notifier},
    page::{self, Page, PageCell},
};
use payloads::{APIClient, Book, ClientError};
use std::{future::Future, rc::Rc};

/// Size of the random selection requested by the page.
pub const RANDOM_COUNT: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecommendationTab {
    #[default]
    Random,
    Recent,
    Author,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationsState {
    /// Books of whichever tab was requested last.
    pub results: CollectionState<Book>,
    pub tab: RecommendationTab,
    pub author_query: String,
}

impl Default for RecommendationsState {
    fn default() -> Self {
        Self {
            results: CollectionState::pending(),
            tab: RecommendationTab::default(),
            author_query: String::new(),
        }
    }
}

fn results(state: &mut RecommendationsState) -> &mut CollectionState<Book> {
    &mut state.results
}

#[derive(Clone)]
pub struct RecommendationsPage {
    api: APIClient,
    notifier: Rc<dyn Notifier>,
    messages: &'static Messages,
    cell: PageCell<RecommendationsState>,
}

impl RecommendationsPage {
    pub fn new(api: APIClient, notifier: Rc<dyn Notifier>, locale: Locale) -> Self {
        Self {
            api,
            notifier,
            messages: locale.messages(),
            cell: PageCell::new(RecommendationsState::default()),
        }
    }

    async fn show(
        &self,
        tab: RecommendationTab,
        fetch: impl Future<Output = Result<Vec<Book>, ClientError>>,
        failure: &str,
    ) -> bool {
        self.cell.update(|state| state.tab = tab);
        page::refresh(&self.cell, self.notifier.as_ref(), results, fetch, failure)
            .await
    }

    pub async fn show_random(&self) -> bool {
        self.show(
            RecommendationTab::Random,
            self.api.random_recommendations(Some(RANDOM_COUNT)),
            self.messages.load_random_failed,
        )
        .await
    }

    pub async fn show_recent(&self) -> bool {
        self.show(
            RecommendationTab::Recent,
            self.api.recent_recommendations(),
            self.messages.load_recent_failed,
        )
        .await
    }

    pub fn set_author_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.cell.update(|state| state.author_query = query);
    }

    /// Search by the current author query. A blank query is rejected
    /// without a request and the current results stay.
    pub async fn search_author(&self) -> bool {
        let query = self.cell.read(|state| state.author_query.clone());
        let name = match validate_author_query(&query) {
            Ok(name) => name,
            Err(e) => {
                self.notifier
                    .notify(Notice::error(self.messages.form_error(&e)));
                return false;
            }
        };
        self.show(
            RecommendationTab::Author,
            self.api.recommendations_by_author(name),
            self.messages.search_author_failed,
        )
        .await
    }
}

impl Page for RecommendationsPage {
    type State = RecommendationsState;

    fn cell(&self) -> &PageCell<RecommendationsState> {
        &self.cell
    }

    async fn mount(&self) {
        self.show_random().await;
    }

    fn unmount(&self) {
        self.cell.unsubscribe();
        self.cell.update(|state| state.results.close());
    }
}
