pub mod twilio;

use std::error::Error as StdError;

use async_trait::async_trait;

use crate::models::MessageSid;

/// Every way a send can fail. Display never carries the request URL.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("failed to reach Twilio: {}", root_cause(.0))]
    Transport(#[source] reqwest::Error),

    #[error("{message}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("unexpected provider response: {0}")]
    Decode(String),
}

/// Innermost cause in the chain; reqwest's own text omits it.
fn root_cause(err: &reqwest::Error) -> String {
    let mut cause: &dyn StdError = err;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause.to_string()
}

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    async fn send_message(
        &self,
        body: &str,
        from: &str,
        to: &str,
    ) -> Result<MessageSid, ProviderError>;
}
