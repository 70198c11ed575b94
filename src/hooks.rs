use crate::utils::parse_bill_amount;
use tip_split::format_amount;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for the bill amount field.
#[derive(Clone)]
pub struct BillInput {
    /// The current text content of the input field.
    pub text: String,
    /// The most recently committed bill amount. `None` until the user commits
    /// a parsable amount, or after they commit an empty field.
    pub amount: Option<f64>,
    /// An optional error message if the last commit failed to parse.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event. Updates the text state.
    pub on_text_input: Callback<InputEvent>,
    /// Callback to parse and commit the current text.
    /// Typically used with `onchange` or after an Enter key press.
    pub on_commit: Callback<()>,
}

/// Custom hook to manage state for the bill amount field.
///
/// Committing an empty field clears the amount and any error. Committing an
/// unparsable field surfaces the error and keeps the previous amount. A
/// successful commit rewrites the text in canonical two-decimal form.
#[hook]
pub fn use_bill_input() -> BillInput {
    let amount_handle = use_state(|| None::<f64>);
    let text_handle = use_state(String::new);
    let error_handle = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_commit = {
        let current_text_handle = text_handle.clone();
        let amount_setter = amount_handle.clone();
        let text_setter_on_commit = text_handle.clone();
        let error_setter = error_handle.clone();

        Callback::from(move |_: ()| {
            if current_text_handle.trim().is_empty() {
                amount_setter.set(None);
                error_setter.set(None);
                return;
            }
            match parse_bill_amount(&current_text_handle) {
                Ok(value) => {
                    amount_setter.set(Some(value));
                    // Rewrite the text to canonical form, e.g. "$12.5" -> "12.50"
                    text_setter_on_commit.set(format_amount(value));
                    error_setter.set(None);
                }
                Err(err) => {
                    error_setter.set(Some(err.to_string()));
                }
            }
        })
    };

    BillInput {
        text: (*text_handle).clone(),
        amount: *amount_handle,
        error: (*error_handle).clone(),
        on_text_input,
        on_commit,
    }
}
