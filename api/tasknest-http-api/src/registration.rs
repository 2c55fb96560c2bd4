use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tasknest_app::domain::registration::{DispatchResult, RegistrationEmailRequest};

use crate::{
    AppState, ApiError,
    callable::{CallableRequest, CallableResponse},
};

pub async fn send_email(
    State(app_state): State<AppState>,
    payload: Result<Json<CallableRequest<RegistrationEmailRequest>>, JsonRejection>,
) -> Result<Json<CallableResponse<DispatchResult>>, ApiError> {
    let Json(request) = payload.inspect_err(|e| {
        log::debug!("Rejected sendEmail envelope: {}", e.body_text());
    })?;

    let result = app_state
        .app
        .send_registration_email_use_case
        .send_registration_email(&request.data)
        .await;

    Ok(Json(CallableResponse { result }))
}
