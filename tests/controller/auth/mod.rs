//! Tests for the signed-in user endpoints.

mod logout;
mod user;

use super::*;
