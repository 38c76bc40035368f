use console::{
    Locale,
    pages::{RecommendationTab, RecommendationsPage as RecommendationsController},
};
use payloads::Book;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    components::{Card, PRIMARY_BUTTON, render_collection},
    contexts::toast::use_toast,
    hooks::{spawn_action, use_api_client, use_page},
};

#[derive(Properties, PartialEq)]
pub struct RecommendationsPageProps {
    pub locale: Locale,
}

/// Random picks, recent publications and a search by author, sharing one
/// result list.
#[function_component]
pub fn RecommendationsPage(props: &RecommendationsPageProps) -> Html {
    let locale = props.locale;
    let messages = locale.messages();
    let api = use_api_client();
    let toasts = use_toast();
    let (page, state) = use_page(locale, move || {
        RecommendationsController::new(api, Rc::new(toasts), locale)
    });

    let tab_button = |tab: RecommendationTab, label: &'static str| {
        let page = page.clone();
        let onclick = Callback::from(move |_: MouseEvent| match tab {
            RecommendationTab::Random => {
                spawn_action(&page, |page| async move { page.show_random().await })
            }
            RecommendationTab::Recent => {
                spawn_action(&page, |page| async move { page.show_recent().await })
            }
            RecommendationTab::Author => {
                spawn_action(&page, |page| async move { page.search_author().await })
            }
        });
        let classes = if state.tab == tab {
            "px-4 py-2 text-sm font-medium border-b-2 border-neutral-900 dark:border-neutral-100 text-neutral-900 dark:text-neutral-100"
        } else {
            "px-4 py-2 text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-neutral-100"
        };
        html! {
            <button class={classes} {onclick}>{label}</button>
        }
    };

    let on_query = {
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            page.set_author_query(input.value());
        })
    };
    let on_search = {
        let page = page.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            spawn_action(&page, |page| async move { page.search_author().await });
        })
    };

    let title = match state.tab {
        RecommendationTab::Random => messages.random_title,
        RecommendationTab::Recent => messages.recent_title,
        RecommendationTab::Author => messages.by_author_title,
    };
    let count = (state.results.is_loaded() && !state.results.is_loading())
        .then(|| AttrValue::from(messages.book_count(state.results.items().len())));

    let render_book = |book: &Book| {
        html! {
            <div key={book.id.to_string()} class="p-3 border border-neutral-200 dark:border-neutral-700 rounded-md">
                <p class="font-medium text-neutral-900 dark:text-neutral-100">{&book.title}</p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {format!(
                        "{} {} · {}",
                        messages.by_author,
                        book.author_name.as_deref().unwrap_or(messages.unknown_author),
                        book.publication_year,
                    )}
                </p>
            </div>
        }
    };

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {messages.recommendations_heading}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {messages.recommendations_subheading}
                </p>
            </div>
            <div class="flex flex-wrap items-end justify-between gap-4 border-b border-neutral-200 dark:border-neutral-700">
                <div class="flex">
                    {tab_button(RecommendationTab::Random, messages.tab_random)}
                    {tab_button(RecommendationTab::Recent, messages.tab_recent)}
                </div>
                <form class="flex items-center space-x-2 pb-2" onsubmit={on_search}>
                    <input
                        type="text"
                        class="px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                        placeholder={messages.field_author_query}
                        value={state.author_query.clone()}
                        oninput={on_query}
                    />
                    <button type="submit" class={PRIMARY_BUTTON}>
                        {messages.by_author_title}
                    </button>
                </form>
            </div>
            <Card {title} description={count}>
                {render_collection(
                    state.results.view(),
                    messages.loading,
                    messages.no_results,
                    render_book,
                )}
            </Card>
        </div>
    }
}
