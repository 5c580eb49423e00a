use crate::models::{SendRequest, SendResult};
use crate::services::messaging::MessagingProvider;

/// Forwards one request to the provider and folds the outcome into a [`SendResult`].
///
/// There is no retry and no deduplication: every call is one provider send.
pub struct SmsDispatcher {
    provider: Box<dyn MessagingProvider>,
    from_number: String,
}

impl SmsDispatcher {
    pub fn new(provider: Box<dyn MessagingProvider>, from_number: impl Into<String>) -> Self {
        Self {
            provider,
            from_number: from_number.into(),
        }
    }

    pub async fn dispatch(&self, request: SendRequest) -> SendResult {
        match self
            .provider
            .send_message(&request.body, &self.from_number, &request.recipient)
            .await
        {
            Ok(sid) => {
                tracing::info!(to = %request.recipient, sid = %sid, "SMS accepted by provider");
                SendResult::Success { sid }
            }
            Err(e) => {
                tracing::warn!(to = %request.recipient, error = %e, "SMS send failed");
                SendResult::Failure {
                    error: e.to_string(),
                }
            }
        }
    }
}
