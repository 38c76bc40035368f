use console::Locale;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub locale: Locale,
}

/// Title, page navigation and a switch to the same page in the other
/// languages.
#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let locale = props.locale;
    let messages = locale.messages();
    let current = use_route::<Route>().unwrap_or_else(|| Route::home(locale));

    let nav_link = |route: Route, label: &'static str| {
        let active = route == current;
        let classes = if active {
            "text-sm font-medium text-gray-900 dark:text-white"
        } else {
            "text-sm text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white"
        };
        html! {
            <Link<Route> to={route} {classes}>{label}</Link<Route>>
        }
    };

    let switches = Locale::ALL
        .into_iter()
        .filter(|other| *other != locale)
        .map(|other| {
            html! {
                <Link<Route>
                    to={current.with_locale(other)}
                    classes="text-sm px-2 py-1 rounded border border-gray-300 dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-700"
                >
                    {other.messages().language_name}
                </Link<Route>>
            }
        })
        .collect::<Html>();

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route> to={Route::home(locale)} classes="text-xl font-semibold text-gray-900 dark:text-white">
                            {messages.app_title}
                        </Link<Route>>
                    </div>
                    <nav class="flex items-center space-x-6">
                        {nav_link(Route::books(locale), messages.nav_books)}
                        {nav_link(Route::loans(locale), messages.nav_loans)}
                        {nav_link(Route::recommendations(locale), messages.nav_recommendations)}
                        {switches}
                    </nav>
                </div>
            </div>
        </header>
    }
}
