use console::{
    Locale, Messages, SessionKind,
    pages::{BooksPage as BooksController, BooksState},
};
use payloads::{Author, Book};
use std::rc::Rc;
use yew::prelude::*;

use crate::{
    components::{
        Card, DANGER_BUTTON, Modal, PRIMARY_BUTTON, SECONDARY_BUTTON, SelectField,
        TextField, render_collection,
    },
    contexts::toast::use_toast,
    hooks::{spawn_action, use_api_client, use_page},
    utils::confirm,
};

#[derive(Properties, PartialEq)]
pub struct BooksPageProps {
    pub locale: Locale,
}

/// Authors and books side by side, each with its own create/edit dialog.
#[function_component]
pub fn BooksPage(props: &BooksPageProps) -> Html {
    let locale = props.locale;
    let messages = locale.messages();
    let api = use_api_client();
    let toasts = use_toast();
    let (page, state) = use_page(locale, move || {
        BooksController::new(api, Rc::new(toasts), locale)
    });

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {messages.books_heading}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">{messages.books_subheading}</p>
            </div>
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="lg:col-span-1">
                    {authors_card(&page, &state, messages)}
                </div>
                <div class="lg:col-span-2">
                    {books_card(&page, &state, messages)}
                </div>
            </div>
            {author_dialog(&page, &state, messages)}
            {book_dialog(&page, &state, messages)}
        </div>
    }
}

fn authors_card(
    page: &BooksController,
    state: &BooksState,
    messages: &'static Messages,
) -> Html {
    let on_add = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.open_new_author())
    };
    let actions = html! {
        <button class={PRIMARY_BUTTON} onclick={on_add}>{messages.add}</button>
    };

    let render_author = |author: &Author| {
        let on_edit = {
            let page = page.clone();
            let author = author.clone();
            Callback::from(move |_: MouseEvent| page.edit_author(&author))
        };
        let on_delete = {
            let page = page.clone();
            let id = author.id;
            Callback::from(move |_: MouseEvent| {
                if confirm(messages.confirm_delete_author) {
                    spawn_action(&page, |page| async move {
                        page.delete_author(id).await
                    });
                }
            })
        };
        html! {
            <div key={author.id.to_string()} class="flex justify-between items-center p-3 border border-neutral-200 dark:border-neutral-700 rounded-md">
                <div>
                    <p class="font-medium text-neutral-900 dark:text-neutral-100">{&author.name}</p>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">{&author.nationality}</p>
                </div>
                <div class="flex space-x-2">
                    <button class={SECONDARY_BUTTON} onclick={on_edit}>{messages.edit}</button>
                    <button class={DANGER_BUTTON} onclick={on_delete}>{messages.delete}</button>
                </div>
            </div>
        }
    };

    html! {
        <Card
            title={messages.authors_title}
            description={messages.authors_description}
            {actions}
        >
            {render_collection(
                state.authors.view(),
                messages.loading,
                messages.no_authors,
                render_author,
            )}
        </Card>
    }
}

fn books_card(
    page: &BooksController,
    state: &BooksState,
    messages: &'static Messages,
) -> Html {
    let on_add = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.open_new_book())
    };
    let actions = html! {
        <button class={PRIMARY_BUTTON} onclick={on_add}>{messages.add}</button>
    };

    let render_book = |book: &Book| {
        let on_edit = {
            let page = page.clone();
            let book = book.clone();
            Callback::from(move |_: MouseEvent| page.edit_book(&book))
        };
        let on_delete = {
            let page = page.clone();
            let id = book.id;
            Callback::from(move |_: MouseEvent| {
                if confirm(messages.confirm_delete_book) {
                    spawn_action(&page, |page| async move {
                        page.delete_book(id).await
                    });
                }
            })
        };
        html! {
            <div key={book.id.to_string()} class="flex justify-between items-center p-3 border border-neutral-200 dark:border-neutral-700 rounded-md">
                <div>
                    <p class="font-medium text-neutral-900 dark:text-neutral-100">{&book.title}</p>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {format!(
                            "{} {} · {} · {}",
                            messages.by_author,
                            state.author_label(book, messages.unknown_author),
                            book.publication_year,
                            book.isbn,
                        )}
                    </p>
                </div>
                <div class="flex space-x-2">
                    <button class={SECONDARY_BUTTON} onclick={on_edit}>{messages.edit}</button>
                    <button class={DANGER_BUTTON} onclick={on_delete}>{messages.delete}</button>
                </div>
            </div>
        }
    };

    html! {
        <Card
            title={messages.books_title}
            description={messages.books_description}
            {actions}
        >
            {render_collection(
                state.books.view(),
                messages.loading,
                messages.no_books,
                render_book,
            )}
        </Card>
    }
}

fn dialog_buttons(
    messages: &'static Messages,
    creating: bool,
    pending: bool,
    on_cancel: Callback<MouseEvent>,
) -> Html {
    let submit_label = if creating { messages.create } else { messages.save };
    html! {
        <div class="flex justify-end space-x-2 pt-2">
            <button type="button" class={SECONDARY_BUTTON} onclick={on_cancel}>
                {messages.cancel}
            </button>
            <button type="submit" class={PRIMARY_BUTTON} disabled={pending}>
                {submit_label}
            </button>
        </div>
    }
}

fn author_dialog(
    page: &BooksController,
    state: &BooksState,
    messages: &'static Messages,
) -> Html {
    let Some(session) = state.author_session.current() else {
        return html! {};
    };
    let creating = session.kind == SessionKind::Create;
    let title = if creating {
        messages.add_author_title
    } else {
        messages.edit_author_title
    };

    let on_close = {
        let page = page.clone();
        Callback::from(move |()| page.cancel_author())
    };
    let on_name = {
        let page = page.clone();
        Callback::from(move |value: String| {
            page.update_author_form(move |form| form.name = value)
        })
    };
    let on_nationality = {
        let page = page.clone();
        Callback::from(move |value: String| {
            page.update_author_form(move |form| form.nationality = value)
        })
    };
    let onsubmit = {
        let page = page.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            spawn_action(&page, |page| async move { page.submit_author().await });
        })
    };

    html! {
        <Modal
            {title}
            description={messages.author_form_description}
            on_close={on_close.clone()}
        >
            <form class="space-y-4" {onsubmit}>
                <TextField
                    label={messages.field_name}
                    value={session.fields.name.clone()}
                    on_change={on_name}
                />
                <TextField
                    label={messages.field_nationality}
                    value={session.fields.nationality.clone()}
                    on_change={on_nationality}
                />
                {dialog_buttons(messages, creating, session.pending, on_close.reform(|_| ()))}
            </form>
        </Modal>
    }
}

fn book_dialog(
    page: &BooksController,
    state: &BooksState,
    messages: &'static Messages,
) -> Html {
    let Some(session) = state.book_session.current() else {
        return html! {};
    };
    let creating = session.kind == SessionKind::Create;
    let title = if creating {
        messages.add_book_title
    } else {
        messages.edit_book_title
    };
    let fields = &session.fields;

    let on_close = {
        let page = page.clone();
        Callback::from(move |()| page.cancel_book())
    };
    let on_title = {
        let page = page.clone();
        Callback::from(move |value: String| {
            page.update_book_form(move |form| form.title = value)
        })
    };
    let on_isbn = {
        let page = page.clone();
        Callback::from(move |value: String| {
            page.update_book_form(move |form| form.isbn = value)
        })
    };
    let on_year = {
        let page = page.clone();
        Callback::from(move |value: String| {
            page.update_book_form(move |form| form.publication_year = value)
        })
    };
    let on_author = {
        let page = page.clone();
        Callback::from(move |value: String| {
            page.update_book_form(move |form| form.author_id = value)
        })
    };
    let onsubmit = {
        let page = page.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            spawn_action(&page, |page| async move { page.submit_book().await });
        })
    };

    let author_options = state
        .authors
        .items()
        .iter()
        .map(|author| {
            (
                AttrValue::from(author.id.to_string()),
                AttrValue::from(author.name.clone()),
            )
        })
        .collect::<Vec<_>>();

    html! {
        <Modal
            {title}
            description={messages.book_form_description}
            on_close={on_close.clone()}
        >
            <form class="space-y-4" {onsubmit}>
                <TextField
                    label={messages.field_title}
                    value={fields.title.clone()}
                    on_change={on_title}
                />
                <TextField
                    label={messages.field_isbn}
                    value={fields.isbn.clone()}
                    on_change={on_isbn}
                />
                <TextField
                    label={messages.field_year}
                    input_type="number"
                    value={fields.publication_year.clone()}
                    on_change={on_year}
                />
                <SelectField
                    label={messages.field_author}
                    value={fields.author_id.clone()}
                    placeholder={messages.select_author}
                    options={author_options}
                    on_change={on_author}
                />
                {dialog_buttons(messages, creating, session.pending, on_close.reform(|_| ()))}
            </form>
        </Modal>
    }
}
