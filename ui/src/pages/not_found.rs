use console::Locale;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundPageProps {
    pub locale: Locale,
}

#[function_component]
pub fn NotFoundPage(props: &NotFoundPageProps) -> Html {
    let messages = props.locale.messages();
    html! {
        <div class="text-center space-y-4">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
            <p class="text-gray-600 dark:text-gray-300">{messages.not_found}</p>
            <Link<Route> to={Route::home(props.locale)} classes="text-sm underline">
                {messages.app_title}
            </Link<Route>>
        </div>
    }
}
