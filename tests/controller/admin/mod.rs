//! Tests for administrator review endpoints.

mod get_review_queue;
mod transition_application;

use super::*;
