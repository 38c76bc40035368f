use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const LABEL_CLASS: &str =
    "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1";
const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 \
    dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 \
    text-neutral-900 dark:text-neutral-100 focus:outline-none \
    focus:ring-2 focus:ring-neutral-500";

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// Receives the full new value on every keystroke.
    pub on_change: Callback<String>,
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

#[function_component]
pub fn TextField(props: &TextFieldProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <label class="block">
            <span class={LABEL_CLASS}>{&props.label}</span>
            <input
                type={props.input_type.clone()}
                class={INPUT_CLASS}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    /// Value of the selected option; empty selects the placeholder.
    pub value: AttrValue,
    pub placeholder: AttrValue,
    /// Value and label of each option.
    pub options: Vec<(AttrValue, AttrValue)>,
    pub on_change: Callback<String>,
}

#[function_component]
pub fn SelectField(props: &SelectFieldProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });

    html! {
        <label class="block">
            <span class={LABEL_CLASS}>{&props.label}</span>
            <select class={INPUT_CLASS} {onchange}>
                <option value="" selected={props.value.is_empty()}>
                    {&props.placeholder}
                </option>
                {for props.options.iter().map(|(value, label)| html! {
                    <option
                        key={value.to_string()}
                        value={value.clone()}
                        selected={*value == props.value}
                    >
                        {label}
                    </option>
                })}
            </select>
        </label>
    }
}
