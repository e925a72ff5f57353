use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        application::{
            ApplicationDto, ApplicationFilterParams, ApplicationSummaryDto, TransitionRequestDto,
        },
    },
    server::{
        controller::util::get_user::get_actor_from_session, error::Error, model::app::AppState,
        service::application::ApplicationService,
    },
};

/// OpenAPI tag of the review endpoints
pub static ADMIN_TAG: &str = "admin";

/// Lists applications for review, oldest first
///
/// # Responses
/// - 200 (Success): Application summaries, filtered by status when given
/// - 401 (Unauthorized): Not signed in
/// - 403 (Forbidden): User is not an administrator
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/admin/applications",
    tag = ADMIN_TAG,
    params(ApplicationFilterParams),
    responses(
        (status = 200, description = "Review queue", body = Vec<ApplicationSummaryDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review_queue(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ApplicationFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let applications = ApplicationService::new(&state.db, &state.storage)
        .get_review_queue(actor, params.status.map(Into::into))
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// Applies a review action to an application
///
/// Actions are `verify` (Pending to Verification), `reject` (Pending or Verification to
/// Rejected), `advance_to_printing` (Verification to Printing) and `complete` (Printing to
/// Completed). The optional note is shown to the applicant.
///
/// # Responses
/// - 200 (Success): Application after the action
/// - 401 (Unauthorized): Not signed in
/// - 403 (Forbidden): User is not an administrator
/// - 404 (Not Found): No such application
/// - 409 (Conflict): Action is not allowed from the current status
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/admin/applications/{id}/transition",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    request_body = TransitionRequestDto,
    responses(
        (status = 200, description = "Application updated", body = ApplicationDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Action not allowed from current status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn transition_application(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(request): Json<TransitionRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let application = ApplicationService::new(&state.db, &state.storage)
        .transition(actor, id, request.action, request.note)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}
