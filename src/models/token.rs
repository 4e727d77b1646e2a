use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils;

/// Opaque card reference returned by the tokenization service
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", utils::mask_tail(&self.0))
    }
}

/// Outcome of a tokenization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeResult {
    Ok(Token),
    /// The provider refused the card, with its own message
    ProviderError(String),
    /// Network failure or a body that isn't a token nor a provider error
    TransportError(String),
}

#[derive(Deserialize, Debug)]
pub struct ProviderErrorBody {
    pub message: String,
}

/// Body of the tokens endpoint, either `{ "id": .. }` or `{ "error": { "message": .. } }`
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum TokenResponse {
    Rejected { error: ProviderErrorBody },
    Created { id: Token },
}

impl From<TokenResponse> for TokenizeResult {
    fn from(response: TokenResponse) -> Self {
        match response {
            TokenResponse::Created { id } => TokenizeResult::Ok(id),
            TokenResponse::Rejected { error } => TokenizeResult::ProviderError(error.message),
        }
    }
}

/// Reply of the subscription service
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionReceipt {
    pub status: bool,
}
