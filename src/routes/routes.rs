//! Defines routes for upload-policy issuance and the provider callback.
//!
//! ## Structure
//! - **Upload endpoints**
//!   - `GET|POST /api/upload-request` — issue a signed upload ticket
//!   - `GET|POST /api/upload-request/{filename}` — same, with an advisory filename
//!   - `GET     /api/upload-success` — post-upload redirect target (bucket, key, etag)
//!
//! - **Health endpoints**
//!   - `GET /healthz` — liveness
//!   - `GET /readyz` — readiness (signer check)

use crate::{
    handlers::{
        health_handlers::{healthz, readyz},
        upload_handlers::{request_upload, request_upload_named, upload_success},
    },
    services::policy_service::PolicyIssuer,
};
use axum::{Router, routing::get};

/// Build and return the router for all upload-broker routes.
///
/// The router carries shared state (`PolicyIssuer`) to all handlers.
pub fn routes() -> Router<PolicyIssuer> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // upload endpoints
        .route("/api/upload-request", get(request_upload).post(request_upload))
        .route(
            "/api/upload-request/{filename}",
            get(request_upload_named).post(request_upload_named),
        )
        .route("/api/upload-success", get(upload_success))
}
