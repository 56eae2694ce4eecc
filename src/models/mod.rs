//! Core data models for upload-policy issuance.
//!
//! These entities represent the policy document the storage provider
//! validates and the signed ticket returned to clients. Both are ephemeral,
//! constructed per request and serialized as JSON via `serde`.

pub mod policy;
pub mod ticket;
