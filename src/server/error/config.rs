use std::net::AddrParseError;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup failures caused by the intake server's environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable the server cannot start without is unset
    #[error("{0} must be set before starting the intake server")]
    MissingEnvVar(&'static str),
    /// A required variable is present but blank
    #[error("{0} is set but blank")]
    BlankEnvVar(&'static str),
    /// `BIND_ADDRESS` is not an `ip:port` pair
    #[error("BIND_ADDRESS `{value}` is not an ip:port socket address: {source}")]
    InvalidBindAddress {
        /// Value as read from the environment
        value: String,
        /// Parse failure
        #[source]
        source: AddrParseError,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
