use console::Locale;
use yew::prelude::*;

use crate::components::layout::Header;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub locale: Locale,
    pub children: Children,
}

#[function_component]
pub fn Layout(props: &LayoutProps) -> Html {
    html! {
        <>
            <Header locale={props.locale} />
            <main lang={props.locale.code()} class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {for props.children.iter()}
            </main>
        </>
    }
}
