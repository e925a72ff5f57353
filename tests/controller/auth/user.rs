use kk_intake::{
    model::user::{RoleDto, UserDto},
    server::{controller::auth::get_user, model::session::user::SessionUserId},
};

use super::*;

/// Expect 200 with the role of the signed-in user
#[tokio::test]
async fn returns_signed_in_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_tables().build().await?;
    let admin = test.user().insert_administrator().await?;
    sign_in(&test, admin.id).await;

    let result = get_user(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.id, admin.id);
    assert_eq!(user.role, RoleDto::Administrator);

    Ok(())
}

/// Expect 401 when nobody is signed in
#[tokio::test]
async fn fails_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_tables().build().await?;

    let result = get_user(State(test.to_app_state()), test.session.clone()).await;

    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 404 and a cleared session when the session user no longer exists
#[tokio::test]
async fn clears_session_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_tables().build().await?;
    sign_in(&test, 42).await;

    let result = get_user(State(test.to_app_state()), test.session.clone()).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 500 when required database tables don't exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, 1).await;

    let result = get_user(State(test.to_app_state()), test.session.clone()).await;

    assert_eq!(
        result.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    Ok(())
}
