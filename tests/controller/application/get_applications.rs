use kk_intake::{
    model::application::ApplicationSummaryDto,
    server::controller::application::get_applications,
};

use super::*;

/// Expect 200 with only the signed-in user's applications
#[tokio::test]
async fn lists_own_applications() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    let other = test.user().insert_citizen().await?;
    let own = test
        .application()
        .insert_application(citizen.id, ApplicationStatus::Printing)
        .await?;
    test.application()
        .insert_application(other.id, ApplicationStatus::Pending)
        .await?;
    sign_in(&test, citizen.id).await;

    let result = get_applications(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let applications: Vec<ApplicationSummaryDto> = json_body(resp).await;
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].id, own.id);
    assert_eq!(applications[0].application_number, own.application_number);

    Ok(())
}

/// Expect 401 when nobody is signed in
#[tokio::test]
async fn requires_sign_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_tables().build().await?;

    let result = get_applications(State(test.to_app_state()), test.session.clone()).await;

    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
