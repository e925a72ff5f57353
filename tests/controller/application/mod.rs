//! Tests for citizen application endpoints.

mod cancel_application;
mod check_number_availability;
mod create_application;
mod get_application;
mod get_applications;

use super::*;
