use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::ApplicationStatus;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::InternalServerError,
        model::application::{validation::FieldErrors, workflow::WorkflowAction},
    },
};

/// Failures of application intake, lookup and review.
#[derive(Error, Debug)]
pub enum ApplicationError {
    /// One or more form fields or documents are invalid, keyed by field name
    #[error("Application form failed validation: {0}")]
    ValidationFailed(FieldErrors),
    /// The owner already has a pending, verification or printing application
    #[error("User ID {owner_id} already has an active application")]
    DuplicateActiveApplication {
        /// User submitting the new application
        owner_id: i32,
    },
    /// The workflow has no edge for `action` out of `from`
    #[error("Action {action} is not allowed for an application with status {from:?}")]
    InvalidTransition {
        /// Status the application was in
        from: ApplicationStatus,
        /// Requested action
        action: WorkflowAction,
    },
    /// No application with this ID exists
    #[error("Application ID {0} not found")]
    NotFound(i32),
    /// The actor's role or ownership does not allow the action
    #[error("User ID {user_id} is not permitted to {action}")]
    Forbidden {
        /// Acting user
        user_id: i32,
        /// Short description of what was attempted
        action: String,
    },
    /// Persisting a new application failed for a non-retryable reason
    #[error("Failed to persist application for user ID {owner_id}: {reason}")]
    CreationFailed {
        /// User submitting the application
        owner_id: i32,
        /// Underlying failure
        reason: String,
    },
    /// A family card number candidate is not 16 characters
    #[error("Invalid family card number format: {0}")]
    InvalidFormat(String),
    /// The multipart body could not be read
    #[error("Application request could not be read: {0}")]
    MalformedRequest(String),
    /// Four-digit sequence width is a fixed limit, numbers are never widened or wrapped.
    #[error("All application numbers for period {period} have been issued")]
    SequenceExhausted {
        /// `YYYYMM` key of the exhausted month
        period: String,
    },
    /// Another submission reserved the same sequence value first; safe to retry.
    #[error("Application number reservation for period {period} conflicted with a concurrent submission")]
    NumberConflict {
        /// `YYYYMM` key of the contested month
        period: String,
    },
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationFailed(fields) => {
                tracing::debug!("{}", fields);

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorDto {
                        error: "The application form contains invalid fields".to_string(),
                        fields: Some(fields.into_inner()),
                    }),
                )
                    .into_response()
            }
            Self::DuplicateActiveApplication { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto::new(
                        "You already have an application in progress",
                    )),
                )
                    .into_response()
            }
            Self::InvalidTransition { from, action } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto::new(format!(
                        "Cannot {} an application that is {}",
                        action,
                        status_label(from)
                    ))),
                )
                    .into_response()
            }
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto::new("Application not found")),
                )
                    .into_response()
            }
            Self::Forbidden { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new(
                        "You do not have permission to perform this action",
                    )),
                )
                    .into_response()
            }
            Self::InvalidFormat(_) | Self::MalformedRequest(_) => {
                tracing::debug!("{}", self);

                let message = match &self {
                    Self::InvalidFormat(_) => "Family card number must be exactly 16 characters",
                    _ => "The request could not be read, please check the submitted form",
                };

                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(message))).into_response()
            }
            Self::SequenceExhausted { .. } => {
                tracing::error!("{}", self);

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto::new(
                        "No application numbers are left for this month, please contact the registry office",
                    )),
                )
                    .into_response()
            }
            Self::CreationFailed { .. } => {
                tracing::error!("{}", self);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new(
                        "Your application could not be submitted, please try again",
                    )),
                )
                    .into_response()
            }
            Self::NumberConflict { .. } => InternalServerError(self).into_response(),
        }
    }
}

fn status_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "pending",
        ApplicationStatus::Verification => "under verification",
        ApplicationStatus::Printing => "being printed",
        ApplicationStatus::Completed => "completed",
        ApplicationStatus::Rejected => "rejected",
    }
}
