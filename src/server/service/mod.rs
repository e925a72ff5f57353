//! Service layer for business logic.
//!
//! Services coordinate repositories, document storage and the workflow rules, and wrap
//! database reads in retry logic. Controllers call services, never repositories directly.

pub mod application;
pub mod retry;
pub mod user;
