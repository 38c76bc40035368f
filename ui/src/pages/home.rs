use console::Locale;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub locale: Locale,
}

/// Landing page linking to the three sections.
#[function_component]
pub fn HomePage(props: &HomePageProps) -> Html {
    let locale = props.locale;
    let messages = locale.messages();

    let section = |route: Route, title: &'static str, description: &'static str| {
        html! {
            <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg border border-neutral-200 dark:border-neutral-700 flex flex-col">
                <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                    {title}
                </h2>
                <p class="text-neutral-600 dark:text-neutral-400 flex-grow mb-4">
                    {description}
                </p>
                <Link<Route> to={route} classes="text-sm font-medium text-neutral-900 dark:text-neutral-100 underline">
                    {messages.view_link}
                </Link<Route>>
            </div>
        }
    };

    html! {
        <div class="space-y-8">
            <div class="text-center space-y-2">
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {messages.home_heading}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400">
                    {messages.home_tagline}
                </p>
            </div>
            <div class="grid gap-6 md:grid-cols-3">
                {section(Route::books(locale), messages.home_books_title, messages.home_books_description)}
                {section(Route::loans(locale), messages.home_loans_title, messages.home_loans_description)}
                {section(
                    Route::recommendations(locale),
                    messages.home_recommendations_title,
                    messages.home_recommendations_description,
                )}
            </div>
        </div>
    }
}
