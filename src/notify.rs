use std::fmt::Display;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{instrument, Level};
use url::Url;

#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// The webhook URL carries the channel's credentials, so errors never echo it.
#[derive(Debug)]
pub enum Error {
    Status(StatusCode, String),
    Timeout,
    Request(reqwest::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status(status, body) if body.is_empty() => {
                write!(f, "Webhook rejected the message with {status}")
            }
            Self::Status(status, body) => {
                write!(f, "Webhook rejected the message with {status}: {body}")
            }
            Self::Timeout => write!(f, "Timed out posting to the webhook"),
            Self::Request(e) => write!(f, "Could not reach the webhook: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(e.without_url())
        }
    }
}

/// Posts `text` to the webhook once, as `{"text": ...}`.
#[instrument(skip_all, fields(bytes = text.len()), level = Level::DEBUG)]
pub async fn post(client: &Client, webhook_url: &Url, text: &str) -> Result<(), Error> {
    let response = client
        .post(webhook_url.clone())
        .json(&WebhookPayload { text })
        .send()
        .await?;
    let status = response.status();
    if status.is_success() {
        log::info!("Message delivered ({status})");
        return Ok(());
    }
    // the body is only diagnostics; failing to read it must not hide the status
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status(status, body.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use httpmock::prelude::*;
    use serde_json::json;

    use crate::fetch::make_client;

    fn client() -> Client {
        make_client(Duration::from_secs(5)).expect("client creation should succeed")
    }

    #[tokio::test]
    async fn test_post_sends_text_payload() {
        let server = MockServer::start_async().await;
        let hook = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/services/T000/B000/XXXX")
                    .header("content-type", "application/json")
                    .json_body(json!({ "text": "*Monday*\n• Soup" }));
                then.status(200).body("ok");
            })
            .await;
        let url: Url = server.url("/services/T000/B000/XXXX").parse().unwrap();
        post(&client(), &url, "*Monday*\n• Soup").await.unwrap();
        hook.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/hook");
                then.status(404).body("no_service\n");
            })
            .await;
        let url: Url = server.url("/hook").parse().unwrap();
        let err = post(&client(), &url, "hi").await.unwrap_err();
        assert!(matches!(&err, Error::Status(status, body) if *status == StatusCode::NOT_FOUND && body == "no_service"));
        assert_eq!(
            err.to_string(),
            "Webhook rejected the message with 404 Not Found: no_service"
        );
    }

    #[tokio::test]
    async fn test_transport_error_hides_url() {
        // nothing listens on the discard port
        let url: Url = "http://127.0.0.1:9/services/SECRET".parse().unwrap();
        let err = post(&client(), &url, "hi").await.unwrap_err();
        assert!(matches!(err, Error::Request(_) | Error::Timeout));
        assert!(!err.to_string().contains("SECRET"));
    }
}
