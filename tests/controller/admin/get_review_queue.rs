use axum::extract::Query;
use kk_intake::{
    model::application::{ApplicationFilterParams, ApplicationStatusDto, ApplicationSummaryDto},
    server::controller::admin::get_review_queue,
};

use super::*;

/// Expect 200 with applications in the requested status
#[tokio::test]
async fn lists_filtered_queue() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let first = test.user().insert_citizen().await?;
    let second = test.user().insert_citizen().await?;
    let admin = test.user().insert_administrator().await?;
    test.application()
        .insert_application(first.id, ApplicationStatus::Pending)
        .await?;
    let printing = test
        .application()
        .insert_application(second.id, ApplicationStatus::Printing)
        .await?;
    sign_in(&test, admin.id).await;

    let result = get_review_queue(
        State(test.to_app_state()),
        test.session.clone(),
        Query(ApplicationFilterParams {
            status: Some(ApplicationStatusDto::Printing),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let queue: Vec<ApplicationSummaryDto> = json_body(resp).await;
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, printing.id);

    Ok(())
}

/// Expect 403 for citizens
#[tokio::test]
async fn forbids_citizens() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let citizen = test.user().insert_citizen().await?;
    sign_in(&test, citizen.id).await;

    let result = get_review_queue(
        State(test.to_app_state()),
        test.session.clone(),
        Query(ApplicationFilterParams::default()),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}
