pub mod subscription;
pub mod tokenizer;

use crate::{
    config::AppConfig,
    front::navigation::Route,
    models::{
        card::CardFields,
        token::{SubscriptionReceipt, Token, TokenizeResult},
    },
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Tokenizer: Send + Sync {
    /// Exchanges raw card values for an opaque token
    async fn create_card_token(&self, card: &CardFields) -> TokenizeResult;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionService: Send + Sync {
    async fn add_subscription(&self, token: &Token) -> anyhow::Result<SubscriptionReceipt>;
}

#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

pub type ImplTokenizer = Box<dyn Tokenizer>;
pub type ImplSubscriptionService = Box<dyn SubscriptionService>;
pub type ImplNavigator = Box<dyn Navigator>;

/// Subscription service selected by the configuration: the HTTP one when an
/// endpoint is set, the stub otherwise.
pub fn subscription_service_from_config(app_config: &AppConfig) -> ImplSubscriptionService {
    match &app_config.subscription_endpoint {
        Some(endpoint) => Box::new(subscription::HttpSubscriptionService::new(endpoint)),
        None => Box::new(subscription::StubSubscriptionService::new(
            std::time::Duration::from_millis(app_config.subscription_stub_delay_ms),
        )),
    }
}
