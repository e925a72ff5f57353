use kk_intake::{
    model::application::ApplicationDto, server::controller::application::get_application,
};

use super::*;

/// Expect 200 with members for the owner
#[tokio::test]
async fn returns_own_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    let application = test
        .application()
        .insert_application(citizen.id, ApplicationStatus::Pending)
        .await?;
    test.application().insert_member(application.id).await?;
    sign_in(&test, citizen.id).await;

    let result = get_application(
        State(test.to_app_state()),
        test.session.clone(),
        Path(application.id),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let detail: ApplicationDto = json_body(resp).await;
    assert_eq!(detail.id, application.id);
    assert_eq!(detail.members.len(), 1);

    Ok(())
}

/// Expect 404 for another citizen's application
#[tokio::test]
async fn hides_other_owners_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let owner = test.user().insert_citizen().await?;
    let other = test.user().insert_citizen().await?;
    let application = test
        .application()
        .insert_application(owner.id, ApplicationStatus::Pending)
        .await?;
    sign_in(&test, other.id).await;

    let result = get_application(
        State(test.to_app_state()),
        test.session.clone(),
        Path(application.id),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 for an administrator reading any application
#[tokio::test]
async fn administrator_reads_any_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let owner = test.user().insert_citizen().await?;
    let admin = test.user().insert_administrator().await?;
    let application = test
        .application()
        .insert_application(owner.id, ApplicationStatus::Verification)
        .await?;
    sign_in(&test, admin.id).await;

    let result = get_application(
        State(test.to_app_state()),
        test.session.clone(),
        Path(application.id),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::OK);

    Ok(())
}
