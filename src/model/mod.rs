//! Request and response types shared by the HTTP API.

pub mod api;
pub mod application;
pub mod user;
