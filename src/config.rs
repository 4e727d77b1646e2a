//! Application configuration.
//!
//! All values come from environment variables. The publishable key is not a
//! secret, but it still identifies the merchant account and is kept out of
//! the logs.

use derive_more::Display;
use envconfig::Envconfig;
use std::{fmt, str::FromStr, sync::LazyLock};

use crate::utils;

/// Which message the user sees when the payment provider rejects the card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum ErrorMessagePolicy {
    /// Show the message the provider returned, e.g. "Your card number is incorrect."
    #[default]
    #[display("provider")]
    Provider,
    /// Always show the generic payment service message
    #[display("generic")]
    Generic,
}

impl FromStr for ErrorMessagePolicy {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "provider" => Ok(Self::Provider),
            "generic" => Ok(Self::Generic),
            other => anyhow::bail!("unknown error message policy: {other}"),
        }
    }
}

#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name. Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Payment provider publishable key (SEMI-SENSITIVE)
    /// Example: "pk_test_..."
    pub stripe_publishable_key: String,

    /// Endpoint creating card tokens
    #[envconfig(default = "https://api.stripe.com/v1/tokens")]
    pub tokenization_endpoint: String,

    /// Subscription registration endpoint. The stub service is used when unset.
    pub subscription_endpoint: Option<String>,

    /// Delay of the stub subscription service
    #[envconfig(default = "1000")]
    pub subscription_stub_delay_ms: u64,

    /// "provider" or "generic"
    #[envconfig(default = "provider")]
    pub error_message_policy: ErrorMessagePolicy,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Publishable keys of test accounts start with `pk_test_`
    pub fn is_test_key(&self) -> bool {
        self.stripe_publishable_key.starts_with("pk_test_")
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field(
                "stripe_publishable_key",
                &utils::mask_tail(&self.stripe_publishable_key),
            )
            .field("tokenization_endpoint", &self.tokenization_endpoint)
            .field("subscription_endpoint", &self.subscription_endpoint)
            .field("subscription_stub_delay_ms", &self.subscription_stub_delay_ms)
            .field("error_message_policy", &self.error_message_policy)
            .finish()
    }
}

pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env()
        .expect("Failed to load application configuration. Check environment variables.")
});
