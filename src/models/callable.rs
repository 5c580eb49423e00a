use serde::{Deserialize, Serialize};

use crate::errors::AppError;

use super::sms::{SendRequest, SendResult};

/// Callable invocation envelope: the payload travels under `data`.
#[derive(Debug, Deserialize)]
pub struct CallableRequest {
    pub data: serde_json::Value,
}

/// Successful callable reply: the handler's value travels under `result`.
#[derive(Debug, Serialize)]
pub struct CallableResponse<T> {
    pub result: T,
}

#[derive(Debug, Deserialize)]
pub struct SendSmsPayload {
    pub phone: String,
    pub message: String,
}

impl SendSmsPayload {
    /// Checks shape only. Phone format and message content go to the provider untouched.
    pub fn from_data(data: serde_json::Value) -> Result<Self, AppError> {
        serde_json::from_value(data)
            .map_err(|e| AppError::InvalidArgument(format!("invalid sendSms payload: {e}")))
    }
}

impl From<SendSmsPayload> for SendRequest {
    fn from(payload: SendSmsPayload) -> Self {
        SendRequest::new(payload.phone, payload.message)
    }
}

#[derive(Debug, Serialize)]
pub struct SendSmsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<SendResult> for SendSmsResponse {
    fn from(result: SendResult) -> Self {
        match result {
            SendResult::Success { sid } => Self {
                success: true,
                sid: Some(sid.into_inner()),
                error: None,
            },
            SendResult::Failure { error } => Self {
                success: false,
                sid: None,
                error: Some(error),
            },
        }
    }
}
