//! Health & readiness handlers.
//!
//! - GET /healthz  -> simple liveness ("ok")
//! - GET /readyz   -> readiness that proves the configured signer works

use crate::services::policy_service::PolicyIssuer;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::collections::HashMap;

/// `GET /healthz`
///
/// Very small liveness probe — always returns 200 OK with a plain JSON body.
/// This endpoint should be cheap and never perform I/O.
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
        }),
    )
}

/// `GET /readyz`
///
/// Readiness probe that issues a throwaway policy to prove the loaded
/// configuration can produce a signature. The signer is this service's only
/// dependency; there is no database or disk to check.
///
/// Returns JSON describing the check. HTTP 200 when it passes,
/// HTTP 503 when it fails.
pub async fn readyz(State(issuer): State<PolicyIssuer>) -> impl IntoResponse {
    let signer_check = match issuer.issue(None) {
        Ok(ticket) if !ticket.signature.is_empty() => (true, None::<String>),
        Ok(_) => (false, Some("signer produced an empty signature".into())),
        Err(e) => (false, Some(format!("error: {}", e))),
    };

    let signer_ok = signer_check.0;

    let mut checks = HashMap::new();
    checks.insert(
        "signer",
        CheckStatus {
            ok: signer_ok,
            error: signer_check.1,
        },
    );

    let body = ReadyResponse {
        status: if signer_ok { "ok".into() } else { "error".into() },
        checks,
    };

    let status = if signer_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body))
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    checks: HashMap<&'static str, CheckStatus>,
}

#[derive(Serialize)]
struct CheckStatus {
    ok: bool,
    error: Option<String>,
}
