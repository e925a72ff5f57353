//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller,
    model::{app::AppState, application::document::MAX_DOCUMENT_BYTES},
};

/// Largest accepted request body: every document at its size limit plus room for the form data.
///
/// Oversized documents must reach validation to be reported per field, so the limit sits above
/// the per-document one.
pub const MAX_REQUEST_BYTES: usize = 4 * MAX_DOCUMENT_BYTES + 1024 * 1024;

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/logout` - Logout current user
/// - `GET /api/auth/user` - Get current user information
/// - `POST /api/applications` - Submit a new application (multipart form)
/// - `GET /api/applications` - List the current user's applications
/// - `GET /api/applications/{id}` - Get application detail
/// - `DELETE /api/applications/{id}` - Cancel a pending application
/// - `GET /api/applications/availability/{number}` - Family card number availability
/// - `GET /api/admin/applications` - Administrator review queue
/// - `POST /api/admin/applications/{id}/transition` - Administrator review action
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to receive state and the
/// session layer.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, storage }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Kartu Keluarga Intake",
            description = "Family card application intake and review API"
        ),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Signed-in user routes"),
            (name = controller::application::APPLICATION_TAG, description = "Citizen application routes"),
            (name = controller::admin::ADMIN_TAG, description = "Administrator review routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::application::create_application,
            controller::application::get_applications
        ))
        .routes(routes!(
            controller::application::get_application,
            controller::application::cancel_application
        ))
        .routes(routes!(controller::application::check_number_availability))
        .routes(routes!(controller::admin::get_review_queue))
        .routes(routes!(controller::admin::transition_application))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
}
