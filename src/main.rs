//! Main module for the Tip Split application using Yew.
//! Wires UI components, the bill input hook, and the derived-output logic.

use tip_split::{
    calculate_total_tip, decrement_split_count, format_amount, increment_split_count,
    per_person_amount,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{PerPersonHeader, SplitStepper, TipSlider};
use config::*;
use hooks::use_bill_input;
use utils::{slider_position, tip_percent_from_position};

/// Primary application component wiring state and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let bill = use_bill_input();
    let split_count = use_state(|| DEFAULT_SPLIT_COUNT);
    let slider_idx = use_state(|| DEFAULT_TIP_SLIDER_IDX);

    // Derived outputs, recomputed from the current input state on every
    // render. Nothing derived is stored.
    let tip_percent = tip_percent_from_position(slider_position(*slider_idx));
    let bill_amount = bill.amount.unwrap_or(0.0);
    let total_tip = calculate_total_tip(bill_amount, tip_percent);
    let per_person = per_person_amount(bill_amount, tip_percent, *split_count);

    let on_decrement = {
        let split_count = split_count.clone();
        Callback::from(move |_: MouseEvent| {
            split_count.set(decrement_split_count(*split_count));
        })
    };

    let on_increment = {
        let split_count = split_count.clone();
        Callback::from(move |_: MouseEvent| {
            split_count.set(increment_split_count(*split_count));
        })
    };

    let slider_oninput = {
        let slider_idx = slider_idx.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(idx) = input.value().parse::<usize>() {
                slider_idx.set(idx.min(TIP_SLIDER_STEPS));
            }
        })
    };

    let bill_onkeydown = {
        let commit_handler = bill.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit_handler.emit(());
            }
        })
    };

    html! {
        <div class="container">
            <PerPersonHeader amount={per_person} />

            <div class="bill-form">
                <div class="form-group">
                    <label for="bill_input">{ "Enter Bill" }</label>
                    <input
                        type="text"
                        id="bill_input"
                        inputmode="decimal"
                        placeholder="0.00"
                        value={bill.text.clone()}
                        class={if bill.error.is_some() { "invalid" } else { "" }}
                        oninput={bill.on_text_input.clone()}
                        onchange={bill.on_commit.reform(|_| ())}
                        onkeydown={bill_onkeydown}
                    />
                    if let Some(ref err) = bill.error {
                        <div class="input-error">{ err }</div>
                    }
                </div>

                if bill.amount.is_some() {
                    <>
                        <SplitStepper
                            split_count={*split_count}
                            on_decrement={on_decrement}
                            on_increment={on_increment}
                        />

                        <div class="form-row tip-row">
                            <span class="row-label">{ "Tip" }</span>
                            <span class="tip-amount">{ format!("${}", format_amount(total_tip)) }</span>
                        </div>

                        <TipSlider
                            slider_idx={*slider_idx}
                            tip_percent={tip_percent}
                            oninput={slider_oninput}
                        />
                    </>
                }
            </div>
        </div>
    }
}

/// App root wrapping the single screen.
#[function_component]
pub fn App() -> Html {
    html! {
        <Main />
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
