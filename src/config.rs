use std::env;
use std::fmt;

use crate::errors::AppError;

pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_phone_number: String,
    pub twilio_api_base: String,
}

/// The credential set the Twilio provider and the dispatcher are built from.
#[derive(Clone)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

impl fmt::Debug for TwilioCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioCredentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from_number", &self.from_number)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            twilio_phone_number: env::var("TWILIO_PHONE_NUMBER").unwrap_or_default(),
            twilio_api_base: env::var("TWILIO_API_BASE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TWILIO_API_BASE.to_string()),
        }
    }

    /// Fails on the first blank credential so startup can refuse to serve.
    pub fn twilio_credentials(&self) -> Result<TwilioCredentials, AppError> {
        let required = [
            ("TWILIO_ACCOUNT_SID", &self.twilio_account_sid),
            ("TWILIO_AUTH_TOKEN", &self.twilio_auth_token),
            ("TWILIO_PHONE_NUMBER", &self.twilio_phone_number),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::Config(format!("{name} must be set")));
            }
        }

        Ok(TwilioCredentials {
            account_sid: self.twilio_account_sid.trim().to_string(),
            auth_token: self.twilio_auth_token.trim().to_string(),
            from_number: self.twilio_phone_number.trim().to_string(),
        })
    }
}
