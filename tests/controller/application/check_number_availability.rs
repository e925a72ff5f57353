use kk_intake::{
    model::application::NumberAvailabilityDto,
    server::controller::application::check_number_availability,
};

use super::*;

/// Expect 200 with available false for a number already on an application
#[tokio::test]
async fn reports_used_number() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    test.application()
        .insert_application(citizen.id, ApplicationStatus::Pending)
        .await?;
    sign_in(&test, citizen.id).await;

    let result = check_number_availability(
        State(test.to_app_state()),
        test.session.clone(),
        Path(factory::FAMILY_CARD_NUMBER.to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let availability: NumberAvailabilityDto = json_body(resp).await;
    assert!(!availability.available);

    Ok(())
}

/// Expect 400 for a number that is not 16 characters
#[tokio::test]
async fn rejects_wrong_length() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    sign_in(&test, citizen.id).await;

    let result = check_number_availability(
        State(test.to_app_state()),
        test.session.clone(),
        Path("123".to_string()),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}
