use derive_more::{Display, Error};

use crate::{config::ErrorMessagePolicy, consts};

/// Why a submission attempt ended without a subscription. None is retried.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Network or parse failure while calling the tokenizer
    #[display("tokenization request failed: {_0}")]
    TokenizationTransport(#[error(not(source))] String),
    /// The provider refused the card
    #[display("card rejected by payment provider: {_0}")]
    TokenizationRejected(#[error(not(source))] String),
    /// Card values that can't even be sent to the provider
    #[display("invalid card fields: {_0}")]
    InvalidCardFields(#[error(not(source))] String),
    #[display("subscription service failed: {_0}")]
    SubscriptionService(#[error(not(source))] String),
    #[display("a submission is already in flight")]
    AlreadySubmitting,
}

impl SubmissionError {
    /// Text shown under the subscribe button
    pub fn user_message(&self, policy: ErrorMessagePolicy) -> String {
        match (self, policy) {
            (SubmissionError::TokenizationRejected(msg), ErrorMessagePolicy::Provider) => {
                msg.clone()
            }
            (SubmissionError::InvalidCardFields(_), ErrorMessagePolicy::Provider) => {
                self.to_string()
            }
            (
                SubmissionError::TokenizationTransport(_)
                | SubmissionError::TokenizationRejected(_)
                | SubmissionError::InvalidCardFields(_),
                _,
            ) => consts::PAYMENT_SERVICE_ERROR.to_string(),
            (SubmissionError::SubscriptionService(_), _) => consts::SERVER_ERROR.to_string(),
            (SubmissionError::AlreadySubmitting, _) => self.to_string(),
        }
    }
}
