pub mod health;
pub mod send_sms;
