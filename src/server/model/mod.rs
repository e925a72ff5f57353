//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, session data structures, the acting identity, and the
//! application domain types (number generation, workflow table, form validation, documents).

/// The identity a request acts as
pub mod actor;
/// Shared handler state
pub mod app;
/// Application numbers, workflow, forms and documents
pub mod application;
pub mod db;
pub mod session;
