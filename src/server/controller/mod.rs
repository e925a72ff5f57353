//! HTTP controller endpoints for the family card intake API.
//!
//! This module contains Axum handlers for the signed-in user, citizen application intake and
//! tracking, and the administrator review queue. Controllers resolve the acting user from the
//! session, call into services, and return JSON responses. Every handler carries a utoipa
//! annotation for the OpenAPI document.

/// Review endpoints for administrators
pub mod admin;
/// Citizen application endpoints
pub mod application;
/// Session endpoints
pub mod auth;
pub mod util;
