//! upload-broker — a stateless HTTP service that issues time-limited, signed
//! POST upload policies, letting clients upload files directly to an
//! object-storage bucket without routing the bytes through this server.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
