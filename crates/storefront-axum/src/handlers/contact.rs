//! Contact form handler.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use tracing::info;

use crate::dto::{ContactRequest, ContactResponse};
use crate::error::HttpError;

/// Accept a contact form submission.
///
/// Submissions are recorded in the server log; no mail is sent. Bodies that
/// are not JSON objects get the same `{error, status}` shape as every other
/// failure.
pub async fn submit(
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, HttpError> {
    let Json(req) = body?;
    if !req.is_complete() {
        return Err(HttpError::BadRequest("All fields required.".to_string()));
    }

    info!(
        name = %req.name.trim(),
        email = %req.email.trim(),
        message_len = req.message.len(),
        "Contact form submission"
    );

    Ok(Json(ContactResponse { success: true }))
}
