//! View models of the subscription screen. Layout and styling belong to the
//! UI toolkit; these structs only carry what the screen shows.

use anyhow::Context;
use serde::Serialize;

use crate::{
    consts,
    front::templates,
    models::submission::{Phase, SubmissionState},
};

pub const SCREEN_TITLE: &str = "Add subscription";
pub const BUTTON_TITLE: &str = "Subscribe";

/// Card input, subscribe button and the error line under it
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PaymentFormView {
    pub button_title: &'static str,
    pub button_enabled: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl PaymentFormView {
    pub fn new(state: &SubmissionState, form_valid: bool) -> Self {
        let submitting = state.is_submitting();
        Self {
            button_title: BUTTON_TITLE,
            button_enabled: form_valid && !submitting,
            submitting,
            error: match state.phase {
                Phase::Error => state.error_message.clone(),
                _ => None,
            },
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct AddSubscriptionView {
    pub title: &'static str,
    pub info_lines: Vec<String>,
    pub form: PaymentFormView,
}

impl AddSubscriptionView {
    pub fn new(state: &SubmissionState, form_valid: bool) -> Self {
        Self {
            title: SCREEN_TITLE,
            info_lines: vec![
                "Try out full Stripe payment functionality in a React Native app".into(),
                "Subscribe to see the magic number!".into(),
                format!(
                    "Subscription Plan: ${:.0}/{}",
                    consts::SERVICE_PRICE,
                    consts::SERVICE_PERIOD
                ),
            ],
            form: PaymentFormView::new(state, form_valid),
        }
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(self)?;

        templates::TERMINAL_TEMPLATES
            .render(templates::ADD_SUBSCRIPTION_TEMPLATE, &context)
            .context("add subscription view couldnt be rendered")
    }
}
