use axum::Json;
use kk_intake::{
    model::application::{ApplicationDto, ApplicationStatusDto, TransitionRequestDto},
    server::{
        controller::admin::transition_application,
        model::application::workflow::AdminAction,
    },
};

use super::*;

fn request(action: AdminAction, note: Option<&str>) -> Json<TransitionRequestDto> {
    Json(TransitionRequestDto {
        action,
        note: note.map(str::to_string),
    })
}

/// Expect 200 with the new status after a legal action
#[tokio::test]
async fn verifies_pending_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    let admin = test.user().insert_administrator().await?;
    let application = test
        .application()
        .insert_application(citizen.id, ApplicationStatus::Pending)
        .await?;
    sign_in(&test, admin.id).await;

    let result = transition_application(
        State(test.to_app_state()),
        test.session.clone(),
        Path(application.id),
        request(AdminAction::Verify, None),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: ApplicationDto = json_body(resp).await;
    assert_eq!(updated.status, ApplicationStatusDto::Verification);

    Ok(())
}

/// Expect 200 with the note after rejecting an application
#[tokio::test]
async fn rejects_with_note() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    let admin = test.user().insert_administrator().await?;
    let application = test
        .application()
        .insert_application(citizen.id, ApplicationStatus::Verification)
        .await?;
    sign_in(&test, admin.id).await;

    let result = transition_application(
        State(test.to_app_state()),
        test.session.clone(),
        Path(application.id),
        request(AdminAction::Reject, Some("ID card scan is unreadable")),
    )
    .await;

    let updated: ApplicationDto = json_body(result.into_response()).await;
    assert_eq!(updated.status, ApplicationStatusDto::Rejected);
    assert_eq!(updated.note.as_deref(), Some("ID card scan is unreadable"));

    Ok(())
}

/// Expect 409 when rejecting an application that is being printed
#[tokio::test]
async fn refuses_reject_from_printing() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    let admin = test.user().insert_administrator().await?;
    let application = test
        .application()
        .insert_application(citizen.id, ApplicationStatus::Printing)
        .await?;
    sign_in(&test, admin.id).await;

    let result = transition_application(
        State(test.to_app_state()),
        test.session.clone(),
        Path(application.id),
        request(AdminAction::Reject, None),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 403 for citizens
#[tokio::test]
async fn forbids_citizens() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    let application = test
        .application()
        .insert_application(citizen.id, ApplicationStatus::Pending)
        .await?;
    sign_in(&test, citizen.id).await;

    let result = transition_application(
        State(test.to_app_state()),
        test.session.clone(),
        Path(application.id),
        request(AdminAction::Verify, None),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 for an application that does not exist
#[tokio::test]
async fn fails_for_nonexistent_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let admin = test.user().insert_administrator().await?;
    sign_in(&test, admin.id).await;

    let result = transition_application(
        State(test.to_app_state()),
        test.session.clone(),
        Path(42),
        request(AdminAction::Complete, None),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
