use console::{Locale, Page};
use std::future::Future;
use yew::prelude::*;

/// Drive a page controller from a component.
///
/// The controller is built once per locale. It is mounted after the first
/// render and unmounted when the component goes away (or the locale
/// changes), so results still in flight at that point are dropped. Every
/// state change re-renders the component.
///
/// Returns the controller, for forwarding user actions, and the state to
/// render.
#[hook]
pub fn use_page<P, F>(locale: Locale, build: F) -> (P, P::State)
where
    P: Page,
    F: FnOnce() -> P,
{
    let page = use_memo(locale, move |_| build());
    let update = use_force_update();

    {
        let page = (*page).clone();
        use_effect_with(locale, move |_| {
            page.cell().subscribe(move || update.force_update());
            let mounted = page.clone();
            yew::platform::spawn_local(async move { mounted.mount().await });
            move || page.unmount()
        });
    }

    let state = page.state();
    ((*page).clone(), state)
}

/// Run a controller action in the background, e.g. from an event handler.
pub fn spawn_action<P, Fut>(page: &P, action: impl FnOnce(P) -> Fut)
where
    P: Clone,
    Fut: Future + 'static,
{
    let action = action(page.clone());
    yew::platform::spawn_local(async move {
        action.await;
    });
}
