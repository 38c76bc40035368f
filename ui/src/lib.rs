use console::Locale;
use payloads::{APIClient, ApiConfig, BASE_URL_ENV};
use std::sync::Arc;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod utils;

use components::{Layout, ToastContainer};
use contexts::toast::ToastProvider;
use pages::{BooksPage, HomePage, LoansPage, NotFoundPage, RecommendationsPage};

/// Service location, fixed at build time through `LIBRARY_API_BASE_URL`.
pub fn api_config() -> ApiConfig {
    match option_env!("LIBRARY_API_BASE_URL") {
        Some(url) => ApiConfig::new(url),
        None => ApiConfig::default(),
    }
}

#[function_component]
pub fn App() -> Html {
    use_memo((), |_| logs::init_logging());
    let client = use_memo((), |_| {
        let config = api_config();
        tracing::debug!(
            base_url = config.base_url(),
            "services configured (override with {BASE_URL_ENV})"
        );
        APIClient::new(Arc::new(config))
    });

    html! {
        <ContextProvider<APIClient> context={(*client).clone()}>
            <ToastProvider>
                <BrowserRouter>
                    <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                        <Switch<Route> render={switch} />
                        <ToastContainer />
                    </div>
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<APIClient>>
    }
}

/// Every page lives under a locale prefix, e.g. `/fr/loans`.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/:locale")]
    Home { locale: String },
    #[at("/:locale/books")]
    Books { locale: String },
    #[at("/:locale/loans")]
    Loans { locale: String },
    #[at("/:locale/recommendations")]
    Recommendations { locale: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn home(locale: Locale) -> Self {
        Self::Home {
            locale: locale.code().into(),
        }
    }

    pub fn books(locale: Locale) -> Self {
        Self::Books {
            locale: locale.code().into(),
        }
    }

    pub fn loans(locale: Locale) -> Self {
        Self::Loans {
            locale: locale.code().into(),
        }
    }

    pub fn recommendations(locale: Locale) -> Self {
        Self::Recommendations {
            locale: locale.code().into(),
        }
    }

    /// The locale named by the route, if it names a known one.
    pub fn locale(&self) -> Option<Locale> {
        match self {
            Self::Home { locale }
            | Self::Books { locale }
            | Self::Loans { locale }
            | Self::Recommendations { locale } => Locale::from_code(locale),
            Self::Root | Self::NotFound => None,
        }
    }

    /// The same page in another language.
    pub fn with_locale(&self, locale: Locale) -> Self {
        match self {
            Self::Books { .. } => Self::books(locale),
            Self::Loans { .. } => Self::loans(locale),
            Self::Recommendations { .. } => Self::recommendations(locale),
            Self::Home { .. } | Self::Root | Self::NotFound => {
                Self::home(locale)
            }
        }
    }
}

fn switch(route: Route) -> Html {
    if route == Route::Root {
        return html! { <Redirect<Route> to={Route::home(Locale::default())} /> };
    }
    let Some(locale) = route.locale() else {
        return html! {
            <Layout locale={Locale::default()}>
                <NotFoundPage locale={Locale::default()} />
            </Layout>
        };
    };

    let page = match route {
        Route::Books { .. } => html! { <BooksPage {locale} /> },
        Route::Loans { .. } => html! { <LoansPage {locale} /> },
        Route::Recommendations { .. } => {
            html! { <RecommendationsPage {locale} /> }
        }
        _ => html! { <HomePage {locale} /> },
    };
    html! {
        <Layout {locale}>
            {page}
        </Layout>
    }
}
