use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        application::{
            ApplicationDto, ApplicationSummaryDto, CreateApplicationForm, NumberAvailabilityDto,
        },
    },
    server::{
        controller::util::{get_user::get_actor_from_session, multipart::read_application_form},
        error::Error,
        model::app::AppState,
        service::application::ApplicationService,
    },
};

/// OpenAPI tag of the citizen application endpoints
pub static APPLICATION_TAG: &str = "application";

/// Submits a new family card application
///
/// The form carries the household data as JSON in the `data` part and one file part per
/// supporting document. The application is created in Pending with a fresh `KK-YYYYMM-NNNN`
/// application number.
///
/// # Responses
/// - 201 (Created): Application stored, returns the application with its number
/// - 400 (Bad Request): Body is not a readable multipart form
/// - 401 (Unauthorized): Not signed in
/// - 409 (Conflict): The user already has an application in progress
/// - 422 (Unprocessable Entity): Form fields or documents failed validation
/// - 500 (Internal Server Error): The application could not be stored
/// - 503 (Service Unavailable): All application numbers for this month are used
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body(content = CreateApplicationForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Application submitted", body = ApplicationDto),
        (status = 400, description = "Unreadable form", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 409, description = "Application already in progress", body = ErrorDto),
        (status = 422, description = "Invalid form fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Monthly application numbers exhausted", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;
    let (form, uploads) = read_application_form(multipart).await?;

    let application = ApplicationService::new(&state.db, &state.storage)
        .submit(actor.user_id, form, uploads)
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// Lists the signed-in user's applications, newest first
///
/// # Responses
/// - 200 (Success): Application summaries with their current status
/// - 401 (Unauthorized): Not signed in
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Own applications", body = Vec<ApplicationSummaryDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let applications = ApplicationService::new(&state.db, &state.storage)
        .get_applications_for_owner(actor.user_id)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// Gets one application with its family members
///
/// Citizens can only read their own applications, administrators can read any.
///
/// # Responses
/// - 200 (Success): Application detail
/// - 401 (Unauthorized): Not signed in
/// - 404 (Not Found): No such application visible to the user
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application detail", body = ApplicationDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    let application = ApplicationService::new(&state.db, &state.storage)
        .get_application(actor, id)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}

/// Cancels the signed-in user's application while it is still Pending
///
/// The application, its family members and its documents are deleted.
///
/// # Responses
/// - 204 (No Content): Application cancelled
/// - 401 (Unauthorized): Not signed in
/// - 404 (Not Found): No such application owned by the user
/// - 409 (Conflict): Application is already being processed
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    responses(
        (status = 204, description = "Application cancelled"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Application can no longer be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_application(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor_from_session(&state, &session).await?;

    ApplicationService::new(&state.db, &state.storage)
        .cancel(actor.user_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Checks whether a family card number is already used by an application
///
/// The check is advisory and reserves nothing.
///
/// # Responses
/// - 200 (Success): Whether the number is still available
/// - 400 (Bad Request): Number is not exactly 16 characters
/// - 401 (Unauthorized): Not signed in
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/applications/availability/{number}",
    tag = APPLICATION_TAG,
    params(("number" = String, Path, description = "Family card number (no_kk)")),
    responses(
        (status = 200, description = "Availability of the number", body = NumberAvailabilityDto),
        (status = 400, description = "Invalid number format", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_number_availability(
    State(state): State<AppState>,
    session: Session,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, Error> {
    get_actor_from_session(&state, &session).await?;

    let availability = ApplicationService::new(&state.db, &state.storage)
        .check_application_number_availability(&number)
        .await?;

    Ok((StatusCode::OK, Json(availability)))
}
