pub mod callable;
pub mod sms;

pub use callable::{CallableRequest, CallableResponse, SendSmsPayload, SendSmsResponse};
pub use sms::{MessageSid, SendRequest, SendResult};
