use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::app::AppState;
use crate::mail::contact::process_contact;
use crate::models::contact::{ContactRequest, ContactResponse};

/// `POST /api/contact`
///
/// 400 for invalid input; delivery failures still answer 200 with
/// `success: false`.
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> (StatusCode, Json<ContactResponse>) {
    let outcome = process_contact(state.mailer.as_deref(), &state.contact, request).await;

    let status = if outcome.rejected {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(outcome.response))
}
