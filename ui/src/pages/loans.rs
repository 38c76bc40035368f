use console::{
    Locale, Messages,
    pages::{LoanFilter, LoansPage as LoansController, LoansState},
};
use jiff::civil::Date;
use payloads::{Loan, LoanStatus};
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
pub struct LoansPageProps {
    pub locale: Locale,
}

#[function_component]
pub fn LoansPage(props: &LoansPageProps) -> Html {
    let locale = props.locale;
    let messages = locale.messages();
    let api = use_api_client();
    let toasts = use_toast();
    let (page, state) = use_page(locale, move || {
        LoansController::new(api, Rc::new(toasts), locale)
    });
    let today = jiff::Zoned::now().date();

    let on_toggle = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            spawn_action(&page, |page| async move { page.toggle_filter().await });
        })
    };
    let on_new = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.open_new_loan())
    };
    let toggle_label = match state.filter {
        LoanFilter::All => messages.show_active,
        LoanFilter::Active => messages.show_all,
    };
    let actions = html! {
        <>
            <button class={SECONDARY_BUTTON} onclick={on_toggle}>{toggle_label}</button>
            <button class={PRIMARY_BUTTON} onclick={on_new}>{messages.new_loan}</button>
        </>
    };

    let render_loan = |loan: &Loan| loan_row(&page, &state, messages, loan, today);

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {messages.loans_heading}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">{messages.loans_subheading}</p>
            </div>
            <Card
                title={messages.loans_title}
                description={messages.loans_description}
                {actions}
            >
                {render_collection(
                    state.loans.view(),
                    messages.loading,
                    messages.no_loans,
                    render_loan,
                )}
            </Card>
            {loan_dialog(&page, &state, messages)}
        </div>
    }
}

fn status_badge(messages: &'static Messages, status: LoanStatus) -> Html {
    let classes = match status {
        LoanStatus::Active => "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
        LoanStatus::Overdue => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
        LoanStatus::Returned => "bg-neutral-100 text-neutral-700 dark:bg-neutral-700 dark:text-neutral-200",
    };
    html! {
        <span class={classes!("px-2", "py-0.5", "text-xs", "rounded-full", classes)}>
            {messages.loan_status(status)}
        </span>
    }
}

fn loan_row(
    page: &LoansController,
    state: &LoansState,
    messages: &'static Messages,
    loan: &Loan,
    today: Date,
) -> Html {
    let id = loan.id;
    let on_return = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            spawn_action(&page, |page| async move { page.return_loan(id).await });
        })
    };
    let on_delete = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            if confirm(messages.confirm_delete_loan) {
                spawn_action(&page, |page| async move { page.delete_loan(id).await });
            }
        })
    };

    let mut dates = messages.format_date(loan.loan_date);
    if let Some(due) = loan.due_date {
        dates.push_str(&format!(" → {}", messages.format_date(due)));
    }

    html! {
        <div key={id.to_string()} class="flex justify-between items-center p-3 border border-neutral-200 dark:border-neutral-700 rounded-md">
            <div class="space-y-1">
                <div class="flex items-center space-x-2">
                    <p class="font-medium text-neutral-900 dark:text-neutral-100">
                        {state.book_label(loan, messages.unknown)}
                    </p>
                    {status_badge(messages, loan.status_on(today))}
                </div>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {&loan.borrower_name}{" · "}{dates}
                </p>
                if let Some(returned) = loan.return_date {
                    <p class="text-sm text-neutral-500 dark:text-neutral-400">
                        {format!("{} {}", messages.returned_on, messages.format_date(returned))}
                    </p>
                }
            </div>
            <div class="flex space-x-2">
                if loan.is_returnable() {
                    <button class={SECONDARY_BUTTON} onclick={on_return}>
                        {messages.return_action}
                    </button>
                }
                <button class={DANGER_BUTTON} onclick={on_delete}>{messages.delete}</button>
            </div>
        </div>
    }
}

fn loan_dialog(
    page: &LoansController,
    state: &LoansState,
    messages: &'static Messages,
) -> Html {
    let Some(session) = state.session.current() else {
        return html! {};
    };

    let on_close = {
        let page = page.clone();
        Callback::from(move |()| page.cancel_loan())
    };
    let on_cancel = on_close.reform(|_: MouseEvent| ());
    let on_book = {
        let page = page.clone();
        Callback::from(move |value: String| {
            page.update_loan_form(move |form| form.book_id = value)
        })
    };
    let on_borrower = {
        let page = page.clone();
        Callback::from(move |value: String| {
            page.update_loan_form(move |form| form.borrower_name = value)
        })
    };
    let onsubmit = {
        let page = page.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            spawn_action(&page, |page| async move { page.submit_loan().await });
        })
    };

    let book_options = state
        .books
        .items()
        .iter()
        .map(|book| {
            (
                AttrValue::from(book.id.to_string()),
                AttrValue::from(book.title.clone()),
            )
        })
        .collect::<Vec<_>>();

    html! {
        <Modal
            title={messages.create_loan_title}
            description={messages.loan_form_description}
            {on_close}
        >
            <form class="space-y-4" {onsubmit}>
                <SelectField
                    label={messages.field_book}
                    value={session.fields.book_id.clone()}
                    placeholder={messages.select_book}
                    options={book_options}
                    on_change={on_book}
                />
                <TextField
                    label={messages.field_borrower}
                    value={session.fields.borrower_name.clone()}
                    placeholder={messages.borrower_placeholder}
                    on_change={on_borrower}
                />
                <div class="flex justify-end space-x-2 pt-2">
                    <button type="button" class={SECONDARY_BUTTON} onclick={on_cancel}>
                        {messages.cancel}
                    </button>
                    <button type="submit" class={PRIMARY_BUTTON} disabled={session.pending}>
                        {messages.create}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
