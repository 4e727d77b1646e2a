//! Card tokenization against a Stripe compatible `/v1/tokens` endpoint.
//!
//! Card values are sent straight to the provider so the raw number never
//! reaches our own backend.

use async_trait::async_trait;
use log::{error, info};

use crate::{
    config::AppConfig,
    models::{
        card::CardFields,
        token::{TokenResponse, TokenizeResult},
    },
    utils,
};

pub struct HttpTokenizer {
    client: reqwest::Client,
    endpoint: String,
    publishable_key: String,
}

impl HttpTokenizer {
    pub fn new(endpoint: &str, publishable_key: &str) -> Self {
        Self {
            client: utils::REQUEST_CLIENT.clone(),
            endpoint: endpoint.to_string(),
            publishable_key: publishable_key.to_string(),
        }
    }

    pub fn from_config(app_config: &AppConfig) -> Self {
        Self::new(
            &app_config.tokenization_endpoint,
            &app_config.stripe_publishable_key,
        )
    }
}

#[async_trait]
impl super::Tokenizer for HttpTokenizer {
    async fn create_card_token(&self, card: &CardFields) -> TokenizeResult {
        // the request can't be built, the provider never sees it
        let form = match card.to_form_pairs() {
            Ok(form) => form,
            Err(e) => return TokenizeResult::TransportError(e.to_string()),
        };

        let response = match self
            .client
            .post(&self.endpoint)
            .header("accept", "application/json")
            .bearer_auth(&self.publishable_key)
            .form(&form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("token request to {} failed: {}", self.endpoint, e);
                return TokenizeResult::TransportError(e.to_string());
            }
        };

        // rejected cards come back with a 4xx status and an error body
        let status = response.status();
        match response.json::<TokenResponse>().await {
            Ok(body) => {
                info!("tokens endpoint answered {}", status);
                body.into()
            }
            Err(e) => {
                error!("tokens endpoint answered {} with an unexpected body: {}", status, e);
                TokenizeResult::TransportError(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::token::Token,
        services::{Tokenizer, test_server},
    };

    #[tokio::test]
    async fn test_invalid_expiry_never_reaches_the_network() {
        // nothing listens on the discard port, a request would be a transport error
        let tokenizer = HttpTokenizer::new("http://127.0.0.1:9/v1/tokens", "pk_test_abc");
        let card = CardFields::new("4242424242424242", "1229", "123");

        let result = tokenizer.create_card_token(&card).await;

        assert!(matches!(result, TokenizeResult::TransportError(msg) if msg.contains("MM/YY")));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        let tokenizer = HttpTokenizer::new("http://127.0.0.1:9/v1/tokens", "pk_test_abc");
        let card = CardFields::new("4242424242424242", "12/29", "123");

        let result = tokenizer.create_card_token(&card).await;

        assert!(matches!(result, TokenizeResult::TransportError(_)));
    }

    #[tokio::test]
    async fn test_rejected_card_sends_form_and_reads_error_body() {
        let (base_url, request) = test_server::serve_once(
            "402 Payment Required",
            r#"{"error":{"code":"incorrect_number","message":"Your card number is incorrect."}}"#,
        )
        .await;
        let tokenizer = HttpTokenizer::new(&format!("{base_url}/v1/tokens"), "pk_test_abc");
        let card = CardFields::new("4242 4242 4242 4242", "12/29", "123");

        let result = tokenizer.create_card_token(&card).await;
        let request = request.await.unwrap();
        let headers = request.to_lowercase();

        assert_eq!(
            result,
            TokenizeResult::ProviderError("Your card number is incorrect.".into())
        );
        assert!(request.starts_with("POST /v1/tokens HTTP/1.1"));
        assert!(headers.contains("authorization: bearer pk_test_abc"));
        assert!(headers.contains("content-type: application/x-www-form-urlencoded"));
        assert!(headers.contains("accept: application/json"));
        assert!(request.ends_with(
            "card%5Bnumber%5D=4242424242424242&card%5Bexp_month%5D=12&card%5Bexp_year%5D=29&card%5Bcvc%5D=123"
        ));
    }

    #[tokio::test]
    async fn test_created_token() {
        let (base_url, request) =
            test_server::serve_once("200 OK", r#"{"id":"tok_1abc","object":"token"}"#).await;
        let tokenizer = HttpTokenizer::new(&format!("{base_url}/v1/tokens"), "pk_test_abc");

        let result = tokenizer
            .create_card_token(&CardFields::new("4242424242424242", "12/29", "123"))
            .await;
        request.await.unwrap();

        assert_eq!(result, TokenizeResult::Ok(Token::new("tok_1abc")));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_a_transport_error() {
        let (base_url, request) =
            test_server::serve_once("500 Internal Server Error", r#"{"status":"down"}"#).await;
        let tokenizer = HttpTokenizer::new(&format!("{base_url}/v1/tokens"), "pk_test_abc");

        let result = tokenizer
            .create_card_token(&CardFields::new("4242424242424242", "12/29", "123"))
            .await;
        request.await.unwrap();

        assert!(matches!(result, TokenizeResult::TransportError(_)));
    }
}
