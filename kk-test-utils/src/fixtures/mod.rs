//! Test fixture modules for database and storage records.
//!
//! - `application` - Applications, family members, sequence rows and request factories
//! - `user` - User identities with a citizen or administrator role

pub mod application;
pub mod user;
