//! Card → token → subscription pipeline behind the subscribe button.

use std::sync::{Mutex, PoisonError};

use log::{error, info, warn};

use crate::{
    config::ErrorMessagePolicy,
    consts,
    errors::SubmissionError,
    front::navigation::Route,
    models::{
        card::{CardFields, CardFormInput},
        submission::{SubmissionEvent, SubmissionState, transition},
        token::{SubscriptionReceipt, Token, TokenizeResult},
    },
    services,
};

pub type SubmissionOutcome = Result<SubscriptionReceipt, SubmissionError>;

pub struct SubscriptionSubmissionFlow {
    tokenizer: services::ImplTokenizer,
    subscription_service: services::ImplSubscriptionService,
    navigator: services::ImplNavigator,
    policy: ErrorMessagePolicy,
    // never held across an await
    state: Mutex<SubmissionState>,
}

impl SubscriptionSubmissionFlow {
    pub fn new(
        tokenizer: services::ImplTokenizer,
        subscription_service: services::ImplSubscriptionService,
        navigator: services::ImplNavigator,
        policy: ErrorMessagePolicy,
    ) -> Self {
        Self {
            tokenizer,
            subscription_service,
            navigator,
            policy,
            state: Mutex::new(SubmissionState::default()),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The subscribe button is enabled only for a valid form and no request in flight
    pub fn can_submit(&self, form_valid: bool) -> bool {
        form_valid && !self.state().is_submitting()
    }

    /// Entry point of the form: an invalid form is refused without touching the state
    pub async fn submit_form(&self, input: &CardFormInput) -> SubmissionOutcome {
        if !input.valid {
            return Err(SubmissionError::InvalidCardFields(
                "card form is not complete".into(),
            ));
        }

        self.submit(&input.values).await
    }

    pub async fn submit(&self, card: &CardFields) -> SubmissionOutcome {
        let in_flight = self.begin()?;
        info!("subscription submission started for {:?}", card);

        let outcome = self.run_pipeline(card).await;

        match &outcome {
            Ok(_) => {
                in_flight.settle(SubmissionEvent::Succeeded);
                info!("subscription created, going to {}", Route::Home);
                self.navigator.navigate(Route::Home);
            }
            Err(e) => {
                error!("subscription submission failed: {}", e);
                in_flight.settle(SubmissionEvent::Failed(e.user_message(self.policy)));
            }
        }

        outcome
    }

    /// Step 1 then step 2; a failed step 1 never reaches the subscription service
    async fn run_pipeline(&self, card: &CardFields) -> SubmissionOutcome {
        let token = self.tokenize_step(card).await?;
        self.subscribe_step(&token).await
    }

    async fn tokenize_step(&self, card: &CardFields) -> Result<Token, SubmissionError> {
        card.expiry_parts()?;

        match self.tokenizer.create_card_token(card).await {
            TokenizeResult::Ok(token) => Ok(token),
            TokenizeResult::ProviderError(msg) => Err(SubmissionError::TokenizationRejected(msg)),
            TokenizeResult::TransportError(detail) => {
                Err(SubmissionError::TokenizationTransport(detail))
            }
        }
    }

    async fn subscribe_step(&self, token: &Token) -> SubmissionOutcome {
        let receipt = self
            .subscription_service
            .add_subscription(token)
            .await
            .map_err(|e| SubmissionError::SubscriptionService(format!("{e:#}")))?;

        if !receipt.status {
            return Err(SubmissionError::SubscriptionService(
                "subscription service answered status=false".into(),
            ));
        }

        Ok(receipt)
    }

    /// Moves to `Submitting`, refusing when a submission is already in flight
    fn begin(&self) -> Result<InFlight<'_>, SubmissionError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.is_submitting() {
            warn!("submit ignored, a submission is already in flight");
            return Err(SubmissionError::AlreadySubmitting);
        }

        *state = transition(state.clone(), SubmissionEvent::SubmitRequested);
        Ok(InFlight {
            flow: self,
            settled: false,
        })
    }

    fn apply(&self, event: SubmissionEvent) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = transition(state.clone(), event);
    }
}

/// Marks a submission as in flight. Dropped without being settled (the
/// `submit` future was cancelled) it moves the flow to `Error` so the form can
/// be submitted again.
struct InFlight<'a> {
    flow: &'a SubscriptionSubmissionFlow,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, event: SubmissionEvent) {
        self.flow.apply(event);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("subscription submission dropped before completion");
            self.flow.apply(SubmissionEvent::Failed(
                consts::SUBMISSION_INTERRUPTED.to_string(),
            ));
        }
    }
}
