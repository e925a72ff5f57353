//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractor values built from a `TestContext`, the session
//! user is inserted the way the identity provider would.

mod admin;
mod application;
mod auth;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::ApplicationStatus;
use kk_intake::model::api::ErrorDto;
use kk_test_utils::prelude::*;

use crate::util::{json_body, sign_in, FormBuilder};
