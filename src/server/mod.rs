//! Server application core modules.
//!
//! This module contains the backend for the family card intake service: HTTP routing,
//! session-backed identity, database access, document storage, and the application workflow
//! that issues application numbers and moves submissions through review.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod storage;
