use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    CallableRequest, CallableResponse, SendRequest, SendSmsPayload, SendSmsResponse,
};
use crate::state::AppState;

// POST /sendSms
//
// Provider failures are a normal `result` with `success: false`. Only a
// malformed invocation is answered with the callable error envelope.
pub async fn send_sms(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CallableRequest>, JsonRejection>,
) -> Result<Json<CallableResponse<SendSmsResponse>>, AppError> {
    let Json(envelope) = payload.map_err(|e| {
        tracing::warn!(error = %e, "rejected malformed callable request");
        AppError::InvalidArgument(format!("invalid callable request: {}", e.body_text()))
    })?;

    let payload = SendSmsPayload::from_data(envelope.data).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected sendSms payload");
    })?;
    let request = SendRequest::from(payload);

    let span = tracing::info_span!("send_sms", invocation_id = %Uuid::new_v4());
    let result = state.dispatcher.dispatch(request).instrument(span).await;

    Ok(Json(CallableResponse {
        result: SendSmsResponse::from(result),
    }))
}
