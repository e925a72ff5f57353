//! Utility functions for controller request handling.
//!
//! This module provides helpers shared across controllers: resolving the signed-in user or
//! acting identity from the session, and reading the multipart application form.

/// Resolving the session user
pub mod get_user;
pub mod multipart;
