use console::CollectionView;
use yew::prelude::*;

/// Render a collection: the loading message while a fetch is in flight,
/// the empty message once it resolved to nothing, otherwise the items.
pub fn render_collection<T>(
    view: CollectionView<'_, T>,
    loading: &str,
    empty: &str,
    render_item: impl Fn(&T) -> Html,
) -> Html {
    match view {
        CollectionView::Loading => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{loading}</p>
            </div>
        },
        CollectionView::Empty => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{empty}</p>
            </div>
        },
        CollectionView::Items(items) => html! {
            <div class="space-y-3">
                {for items.iter().map(render_item)}
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Buttons shown next to the title.
    #[prop_or_default]
    pub actions: Html,
    pub children: Html,
}

#[function_component]
pub fn Card(props: &CardProps) -> Html {
    html! {
        <section class="bg-white dark:bg-neutral-800 p-6 rounded-lg border border-neutral-200 dark:border-neutral-700">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                        {&props.title}
                    </h2>
                    if let Some(description) = &props.description {
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">{description}</p>
                    }
                </div>
                <div class="flex space-x-2">{props.actions.clone()}</div>
            </div>
            {props.children.clone()}
        </section>
    }
}
