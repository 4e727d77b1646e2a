use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    // Nothing submitted yet
    #[default]
    #[display("idle")]
    Idle,
    // Waiting for the tokenizer or the subscription service
    #[display("submitting")]
    Submitting,
    // Last attempt failed, the form can be submitted again
    #[display("error")]
    Error,
    #[display("success")]
    Success,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SubmissionState {
    pub phase: Phase,
    pub error_message: Option<String>,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    SubmitRequested,
    Failed(String),
    Succeeded,
}

/// Next state of the flow. Events that make no sense for the current phase
/// leave the state as it is.
pub fn transition(state: SubmissionState, event: SubmissionEvent) -> SubmissionState {
    match (state.phase, event) {
        (Phase::Submitting, SubmissionEvent::SubmitRequested) => state,
        (_, SubmissionEvent::SubmitRequested) => SubmissionState {
            phase: Phase::Submitting,
            error_message: None,
        },
        (Phase::Submitting, SubmissionEvent::Failed(message)) => SubmissionState {
            phase: Phase::Error,
            error_message: Some(message),
        },
        (Phase::Submitting, SubmissionEvent::Succeeded) => SubmissionState {
            phase: Phase::Success,
            error_message: None,
        },
        (_, SubmissionEvent::Failed(_) | SubmissionEvent::Succeeded) => state,
    }
}
