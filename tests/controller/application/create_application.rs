use chrono::Utc;
use kk_intake::{
    model::application::{ApplicationDto, ApplicationStatusDto},
    server::controller::application::create_application,
};

use super::*;

/// Expect 201 with the first application number of the current month
#[tokio::test]
async fn creates_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    sign_in(&test, citizen.id).await;

    let result = create_application(
        State(test.to_app_state()),
        test.session.clone(),
        FormBuilder::valid().build().await,
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let application: ApplicationDto = json_body(resp).await;
    assert_eq!(
        application.application_number,
        format!("KK-{}-0001", Utc::now().format("%Y%m"))
    );
    assert_eq!(application.status, ApplicationStatusDto::Pending);
    assert_eq!(application.owner_id, citizen.id);
    assert_eq!(test.stored_file_count()?, 2);

    Ok(())
}

/// Expect 422 with per-field messages and nothing stored for an invalid form
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    sign_in(&test, citizen.id).await;
    let mut data = factory::valid_form_json();
    data["consent"] = false.into();
    data["postal_code"] = "1691".into();

    let form = FormBuilder::new()
        .data(&data)
        .file("birth_certificate", "akta.pdf", &factory::mock_pdf())
        .file("head_id_card", "ktp.jpg", &factory::mock_jpg())
        .build()
        .await;
    let result = create_application(State(test.to_app_state()), test.session.clone(), form).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorDto = json_body(resp).await;
    let fields = error.fields.unwrap();
    assert!(fields.contains_key("consent"));
    assert!(fields.contains_key("postal_code"));
    assert_eq!(test.stored_file_count()?, 0);

    Ok(())
}

/// Expect 422 when a required document is missing
#[tokio::test]
async fn rejects_missing_document() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    sign_in(&test, citizen.id).await;

    let form = FormBuilder::new()
        .data(&factory::valid_form_json())
        .file("birth_certificate", "akta.pdf", &factory::mock_pdf())
        .build()
        .await;
    let result = create_application(State(test.to_app_state()), test.session.clone(), form).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorDto = json_body(resp).await;
    assert!(error.fields.unwrap().contains_key("head_id_card"));

    Ok(())
}

/// Expect 400 when the form has no data part
#[tokio::test]
async fn rejects_form_without_data() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    sign_in(&test, citizen.id).await;

    let form = FormBuilder::new()
        .file("head_id_card", "ktp.jpg", &factory::mock_jpg())
        .build()
        .await;
    let result = create_application(State(test.to_app_state()), test.session.clone(), form).await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 409 when the user already has an application in progress
#[tokio::test]
async fn rejects_second_active_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    test.application()
        .insert_application(citizen.id, ApplicationStatus::Verification)
        .await?;
    sign_in(&test, citizen.id).await;

    let result = create_application(
        State(test.to_app_state()),
        test.session.clone(),
        FormBuilder::valid().build().await,
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);
    assert_eq!(test.stored_file_count()?, 0);

    Ok(())
}

/// Expect 401 when nobody is signed in
#[tokio::test]
async fn requires_sign_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_tables().build().await?;

    let result = create_application(
        State(test.to_app_state()),
        test.session.clone(),
        FormBuilder::valid().build().await,
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
