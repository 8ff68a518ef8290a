//! HTTP side of the subscription popup.
//!
//! One POST per attempt. No extra headers, no timeout, no retry; success is
//! status 200 and nothing else.

use serde::Serialize;

use crate::core::config::MailApiConfig;

#[derive(Debug, thiserror::Error)]
pub enum SubscribeError {
    #[error("subscription request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not encode subscription request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Wire body: `{"firstname": .., "email": .., "type": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionRequest {
    pub firstname: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint answered 200.
    Accepted,
    /// Any other status, kept for diagnostics only.
    Rejected(u16),
}

#[derive(Debug, Clone)]
pub struct SubscriptionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SubscriptionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &MailApiConfig) -> Self {
        Self::new(config.url.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[tracing::instrument(name = "submitting subscription", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn submit(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubmitOutcome, SubscribeError> {
        // Plain string body: `.json()` would add a content-type header.
        let body = serde_json::to_string(request)?;
        let response = self.http.post(&self.endpoint).body(body).send().await?;

        let status = response.status().as_u16();
        if status == 200 {
            Ok(SubmitOutcome::Accepted)
        } else {
            tracing::debug!(status, "subscription endpoint did not accept the request");
            Ok(SubmitOutcome::Rejected(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serialises_with_wire_field_names() {
        let request = SubscriptionRequest {
            firstname: "Jane".into(),
            email: "jane@example.com".into(),
            kind: "Common".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "firstname": "Jane",
                "email": "jane@example.com",
                "type": "Common",
            })
        );
    }

    #[test]
    fn client_takes_endpoint_from_config() {
        let config = MailApiConfig {
            url: "https://api.example.com/subscribe".into(),
            kind: "news".into(),
        };
        let client = SubscriptionClient::from_config(&config);
        assert_eq!(client.endpoint(), "https://api.example.com/subscribe");
    }
}
