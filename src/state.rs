use crate::services::dispatch::SmsDispatcher;

pub struct AppState {
    pub dispatcher: SmsDispatcher,
}
