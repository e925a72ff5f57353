//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. The session only carries the user ID; the role is read from the user record.

/// Signed-in user ID
pub mod user;
