use kk_intake::server::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

/// Expect 204 and a cleared session after logout with a user ID in session
#[tokio::test]
async fn clears_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, 1).await;

    let result = logout(test.session.clone()).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 204 even without session data
#[tokio::test]
async fn succeeds_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

    Ok(())
}
