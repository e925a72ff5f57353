use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{actor::Actor, app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found, containing user ID, display name and role
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not
///   found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let user_id = require_session_user_id(session).await?;

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        return Err(clear_unknown_user(session, user_id).await);
    };

    Ok(user)
}

/// Resolves the identity the request acts as, with the role stored on the user record
///
/// # Returns
/// - `Ok(Actor)`: Signed-in user found
/// - `Err(Error::AuthError(_))`: No user in session, or the session user no longer exists
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_actor_from_session(state: &AppState, session: &Session) -> Result<Actor, Error> {
    let user_id = require_session_user_id(session).await?;

    let Some(actor) = UserService::new(&state.db).get_actor(user_id).await? else {
        return Err(clear_unknown_user(session, user_id).await);
    };

    Ok(actor)
}

async fn require_session_user_id(session: &Session) -> Result<i32, Error> {
    SessionUserId::get(session)
        .await?
        .ok_or(Error::AuthError(AuthError::UserNotInSession))
}

async fn clear_unknown_user(session: &Session, user_id: i32) -> Error {
    session.clear().await;

    tracing::debug!(
        "Session cleared for user ID {} with active session but was not found in database",
        user_id
    );

    Error::AuthError(AuthError::UserNotInDatabase(user_id))
}
