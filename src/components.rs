//! Pure Yew view components for the Tip Split UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use crate::config::TIP_SLIDER_STEPS;
use tip_split::format_amount;
use yew::prelude::*;

/// Banner showing each person's share of the bill, tip included.
#[derive(Properties, PartialEq)]
pub struct PerPersonHeaderProps {
    pub amount: f64,
}

#[function_component(PerPersonHeader)]
pub fn per_person_header(props: &PerPersonHeaderProps) -> Html {
    html! {
        <div class="per-person-header">
            <h2>{ "Total Per Person" }</h2>
            <span class="per-person-amount">{ format!("${}", format_amount(props.amount)) }</span>
        </div>
    }
}

/// Stepper for the number of people sharing the bill.
#[derive(Properties, PartialEq)]
pub struct SplitStepperProps {
    pub split_count: usize,
    pub on_decrement: Callback<MouseEvent>,
    pub on_increment: Callback<MouseEvent>,
}

#[function_component(SplitStepper)]
pub fn split_stepper(props: &SplitStepperProps) -> Html {
    html! {
        <div class="form-row split-row">
            <span class="row-label">{ "Split" }</span>
            <div class="split-controls">
                <button class="round-icon-button" onclick={props.on_decrement.clone()}>{ "−" }</button>
                <span class="split-count">{ props.split_count }</span>
                <button class="round-icon-button" onclick={props.on_increment.clone()}>{ "+" }</button>
            </div>
        </div>
    }
}

/// Slider component for selecting the tip percentage with notch-to-percent mapping.
#[derive(Properties, PartialEq)]
pub struct TipSliderProps {
    pub slider_idx: usize,
    pub tip_percent: u32,
    pub oninput: Callback<InputEvent>,
}

#[function_component(TipSlider)]
pub fn tip_slider(props: &TipSliderProps) -> Html {
    html! {
        <div class="form-group tip-slider">
            <span class="slider-value">{ format!("{}%", props.tip_percent) }</span>
            <input type="range"
                min="0"
                max={TIP_SLIDER_STEPS.to_string()}
                step="1"
                value={props.slider_idx.to_string()}
                oninput={props.oninput.clone()}
            />
        </div>
    }
}
