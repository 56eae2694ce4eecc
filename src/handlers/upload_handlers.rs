//! HTTP handlers for upload-policy issuance and the provider's post-upload
//! callback. All real work is delegated to `PolicyIssuer`.

use crate::{errors::AppError, models::ticket::UploadTicket, services::policy_service::PolicyIssuer};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

/// Query params the storage provider appends to the success redirect.
#[derive(Debug, Deserialize)]
pub struct UploadSuccessQuery {
    pub bucket: Option<String>,
    pub key: Option<String>,
    pub etag: Option<String>,
}

/// `GET|POST /api/upload-request`
///
/// Issue a signed upload ticket with no filename hint. The returned `key`
/// template carries a `${filename}` placeholder the provider substitutes
/// with whatever name the upload form submits.
pub async fn request_upload(
    State(issuer): State<PolicyIssuer>,
) -> Result<Json<UploadTicket>, AppError> {
    let ticket = issuer.issue(None)?;
    Ok(Json(ticket))
}

/// `GET|POST /api/upload-request/{filename}`
///
/// Same as [`request_upload`] but with an advisory filename. The name is
/// validated and logged, not embedded into the key template.
pub async fn request_upload_named(
    State(issuer): State<PolicyIssuer>,
    Path(filename): Path<String>,
) -> Result<Json<UploadTicket>, AppError> {
    tracing::debug!(%filename, "upload requested for named file");
    let ticket = issuer.issue(Some(&filename))?;
    Ok(Json(ticket))
}

/// `GET /api/upload-success`
///
/// The provider redirects the browser here after a completed upload,
/// appending `bucket`, `key`, and `etag`. Issuance is stateless, so there is
/// nothing to record; acknowledge with an empty 200.
pub async fn upload_success(Query(params): Query<UploadSuccessQuery>) -> impl IntoResponse {
    tracing::info!(
        bucket = params.bucket.as_deref().unwrap_or(""),
        key = params.key.as_deref().unwrap_or(""),
        etag = params.etag.as_deref().unwrap_or(""),
        "upload completed"
    );
    StatusCode::OK
}
