use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::{MessagingProvider, ProviderError};
use crate::config::TwilioCredentials;
use crate::models::MessageSid;

pub struct TwilioSmsProvider {
    account_sid: String,
    auth_token: String,
    api_base: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct CreatedMessage {
    sid: Option<String>,
}

#[derive(Deserialize)]
struct TwilioErrorBody {
    code: Option<i64>,
    message: String,
}

impl TwilioSmsProvider {
    pub fn new(credentials: &TwilioCredentials, api_base: impl Into<String>) -> Self {
        Self {
            account_sid: credentials.account_sid.clone(),
            auth_token: credentials.auth_token.clone(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.account_sid
        )
    }
}

/// Maps a create-message response to a sid or the provider's error text.
fn parse_create_response(status: StatusCode, body: &str) -> Result<MessageSid, ProviderError> {
    if !status.is_success() {
        return Err(match serde_json::from_str::<TwilioErrorBody>(body) {
            Ok(err) => ProviderError::Api {
                status: status.as_u16(),
                code: err.code,
                message: err.message,
            },
            Err(_) => ProviderError::Api {
                status: status.as_u16(),
                code: None,
                message: format!("Twilio API returned {status}"),
            },
        });
    }

    let created: CreatedMessage = serde_json::from_str(body)
        .map_err(|e| ProviderError::Decode(format!("invalid message resource: {e}")))?;

    match created.sid {
        Some(sid) if !sid.is_empty() => Ok(MessageSid::new(sid)),
        _ => Err(ProviderError::Decode(
            "message resource has no sid".to_string(),
        )),
    }
}

#[async_trait]
impl MessagingProvider for TwilioSmsProvider {
    async fn send_message(
        &self,
        body: &str,
        from: &str,
        to: &str,
    ) -> Result<MessageSid, ProviderError> {
        let res = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", from), ("Body", body)])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.without_url()))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.without_url()))?;

        parse_create_response(status, &text)
    }
}
