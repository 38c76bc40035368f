use super::ToastItem;
use crate::{Route, contexts::toast::ToastContext};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn ToastContainer() -> Html {
    let toast_context = use_context::<ToastContext>();
    let locale = use_route::<Route>()
        .and_then(|route| route.locale())
        .unwrap_or_default();

    let toasts = match toast_context {
        Some(context) => context.toasts.clone(),
        None => vec![],
    };

    if toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full">
            {for toasts.into_iter().map(|toast| {
                let key = toast.id.to_string();
                html! {
                    <ToastItem
                        {key}
                        {toast}
                        dismiss_label={locale.messages().dismiss}
                    />
                }
            })}
        </div>
    }
}
