use kk_intake::server::controller::application::cancel_application;

use super::*;

/// Expect 204 and the documents removed when cancelling a Pending application
#[tokio::test]
async fn cancels_pending_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    let application = test
        .application()
        .insert_application_with_documents(citizen.id, ApplicationStatus::Pending)
        .await?;
    sign_in(&test, citizen.id).await;

    let result = cancel_application(
        State(test.to_app_state()),
        test.session.clone(),
        Path(application.id),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);
    assert_eq!(test.stored_file_count()?, 0);

    Ok(())
}

/// Expect 409 once the application is under verification
#[tokio::test]
async fn rejects_cancel_after_pending() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    let application = test
        .application()
        .insert_application_with_documents(citizen.id, ApplicationStatus::Verification)
        .await?;
    sign_in(&test, citizen.id).await;

    let result = cancel_application(
        State(test.to_app_state()),
        test.session.clone(),
        Path(application.id),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);
    assert_eq!(test.stored_file_count()?, 2);

    Ok(())
}

/// Expect 404 when cancelling another citizen's application
#[tokio::test]
async fn rejects_cancel_by_other_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let owner = test.user().insert_citizen().await?;
    let other = test.user().insert_citizen().await?;
    let application = test
        .application()
        .insert_application(owner.id, ApplicationStatus::Pending)
        .await?;
    sign_in(&test, other.id).await;

    let result = cancel_application(
        State(test.to_app_state()),
        test.session.clone(),
        Path(application.id),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
