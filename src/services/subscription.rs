use std::time::Duration;

use anyhow::{Context, bail};
use async_trait::async_trait;
use log::{error, info};
use serde_json::json;
use uuid::Uuid;

use crate::{
    consts,
    models::token::{SubscriptionReceipt, Token},
    utils,
};

/// Stands in for the backend: accepts every token after a fixed delay
#[derive(Clone)]
pub struct StubSubscriptionService {
    pub delay: Duration,
}

impl StubSubscriptionService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl super::SubscriptionService for StubSubscriptionService {
    async fn add_subscription(&self, token: &Token) -> anyhow::Result<SubscriptionReceipt> {
        info!("stub subscription request with {:?}", token);
        tokio::time::sleep(self.delay).await;

        Ok(SubscriptionReceipt { status: true })
    }
}

/// Sends the card token to a subscription backend
pub struct HttpSubscriptionService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubscriptionService {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: utils::REQUEST_CLIENT.clone(),
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl super::SubscriptionService for HttpSubscriptionService {
    async fn add_subscription(&self, token: &Token) -> anyhow::Result<SubscriptionReceipt> {
        let idempotency_key = Uuid::new_v4().to_string();
        let response = self
            .client
            .post(&self.endpoint)
            .header("accept", "application/json")
            .header(consts::IDEMPOTENCY_HEADER, &idempotency_key)
            .json(&json!({ "token": token }))
            .send()
            .await
            .context("failed to send subscription request")?;

        if !response.status().is_success() {
            let status = response.status();
            error!(
                "{:#?}",
                response.json::<serde_json::Value>().await.unwrap_or_default()
            );
            bail!("subscription service returned error status {status}");
        }

        let receipt = response
            .json::<SubscriptionReceipt>()
            .await
            .context("failed to parse subscription service response")?;

        info!(
            "subscription request {} answered status={}",
            idempotency_key, receipt.status
        );

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{SubscriptionService, test_server};

    #[tokio::test(start_paused = true)]
    async fn test_stub_resolves_after_delay() {
        let stub = StubSubscriptionService::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();

        let receipt = stub.add_subscription(&Token::new("tok_visa")).await.unwrap();

        assert!(receipt.status);
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_http_service_unreachable_endpoint() {
        let service = HttpSubscriptionService::new("http://127.0.0.1:9/subscriptions");

        assert!(service.add_subscription(&Token::new("tok_visa")).await.is_err());
    }

    #[tokio::test]
    async fn test_http_service_posts_token_with_idempotency_key() {
        let (base_url, request) = test_server::serve_once("200 OK", r#"{"status":true}"#).await;
        let service = HttpSubscriptionService::new(&format!("{base_url}/subscriptions"));

        let receipt = service.add_subscription(&Token::new("tok_visa")).await.unwrap();
        let request = request.await.unwrap();
        let headers = request.to_lowercase();

        assert!(receipt.status);
        assert!(request.starts_with("POST /subscriptions HTTP/1.1"));
        assert!(headers.contains("content-type: application/json"));
        assert!(headers.contains(&format!("{}: ", consts::IDEMPOTENCY_HEADER.to_lowercase())));
        assert!(request.ends_with(r#"{"token":"tok_visa"}"#));
    }

    #[tokio::test]
    async fn test_http_service_passes_status_false_through() {
        let (base_url, request) = test_server::serve_once("200 OK", r#"{"status":false}"#).await;
        let service = HttpSubscriptionService::new(&format!("{base_url}/subscriptions"));

        let receipt = service.add_subscription(&Token::new("tok_visa")).await.unwrap();
        request.await.unwrap();

        assert_eq!(receipt, SubscriptionReceipt { status: false });
    }

    #[tokio::test]
    async fn test_http_service_error_status() {
        let (base_url, request) =
            test_server::serve_once("503 Service Unavailable", r#"{"message":"maintenance"}"#)
                .await;
        let service = HttpSubscriptionService::new(&format!("{base_url}/subscriptions"));

        let result = service.add_subscription(&Token::new("tok_visa")).await;
        request.await.unwrap();

        assert!(result.is_err());
    }
}
