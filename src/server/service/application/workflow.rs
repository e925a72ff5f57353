//! Status changes after submission: owner cancellation and administrator transitions.

use chrono::{NaiveDateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::{
    model::application::ApplicationDto,
    server::{
        data::{application::ApplicationRepository, family_member::FamilyMemberRepository},
        error::{application::ApplicationError, Error},
        model::{
            actor::Actor,
            application::{
                document::DocumentPaths,
                workflow::{AdminAction, Transition, WorkflowAction},
            },
        },
        service::application::{load_detail, ApplicationService},
    },
};

impl<'a> ApplicationService<'a> {
    /// Withdraws the owner's application while it is still Pending.
    ///
    /// Deletes the application and its family members, then its documents. Document deletion
    /// is best effort, a file that cannot be removed is logged and the cancellation still
    /// succeeds.
    ///
    /// # Returns
    /// - `Ok(())` - Application deleted
    /// - `Err(ApplicationError::NotFound)` - No application `application_id` owned by `owner_id`
    /// - `Err(ApplicationError::InvalidTransition)` - Application is past Pending, nothing changed
    pub async fn cancel(&self, owner_id: i32, application_id: i32) -> Result<(), Error> {
        let action = WorkflowAction::OwnerCancel;

        let application = ApplicationRepository::new(self.db)
            .get_by_id_and_owner(application_id, owner_id)
            .await?
            .ok_or(ApplicationError::NotFound(application_id))?;

        if action.transition_from(application.status) != Some(Transition::Delete) {
            return Err(ApplicationError::InvalidTransition {
                from: application.status,
                action,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        FamilyMemberRepository::new(&txn)
            .delete_by_application_id(application_id)
            .await?;
        let deleted = ApplicationRepository::new(&txn)
            .delete_pending(application_id, owner_id)
            .await?;

        if deleted.rows_affected == 0 {
            // Status changed since it was read, dropping the transaction restores the members
            return Err(stale_transition(&txn, application_id, action).await);
        }

        txn.commit().await?;

        let documents = DocumentPaths::from_application(&application).into_vec();
        self.storage.delete_all_best_effort(&documents).await;

        tracing::info!(
            "User ID {} cancelled application {}",
            owner_id,
            application.application_number
        );

        Ok(())
    }

    /// Applies an administrator action as of the current time.
    ///
    /// See [`ApplicationService::transition_at`].
    pub async fn transition(
        &self,
        actor: Actor,
        application_id: i32,
        action: AdminAction,
        note: Option<String>,
    ) -> Result<ApplicationDto, Error> {
        self.transition_at(actor, application_id, action, note, Utc::now().naive_utc())
            .await
    }

    /// Applies an administrator action to an application.
    ///
    /// Entering Completed sets `completed_at` to `now`. A blank note is ignored, any other
    /// note replaces the stored one.
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - Application after the transition
    /// - `Err(ApplicationError::Forbidden)` - `actor` is not an administrator
    /// - `Err(ApplicationError::NotFound)` - No application `application_id`
    /// - `Err(ApplicationError::InvalidTransition)` - `action` is not allowed from the current
    ///   status, nothing changed
    pub async fn transition_at(
        &self,
        actor: Actor,
        application_id: i32,
        action: AdminAction,
        note: Option<String>,
        now: NaiveDateTime,
    ) -> Result<ApplicationDto, Error> {
        let action = WorkflowAction::from(action);

        if action.requires_administrator() && !actor.is_administrator() {
            return Err(ApplicationError::Forbidden {
                user_id: actor.user_id,
                action: action.to_string(),
            }
            .into());
        }

        let application_repo = ApplicationRepository::new(self.db);

        let application = application_repo
            .get_by_id(application_id)
            .await?
            .ok_or(ApplicationError::NotFound(application_id))?;

        let Some(Transition::MoveTo(to)) = action.transition_from(application.status) else {
            return Err(ApplicationError::InvalidTransition {
                from: application.status,
                action,
            }
            .into());
        };

        let note = note
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty());

        let updated = application_repo
            .update_status(application_id, application.status, to, note, now)
            .await?;

        if updated.rows_affected == 0 {
            return Err(stale_transition(self.db, application_id, action).await);
        }

        tracing::info!(
            "Administrator user ID {} moved application {} from {:?} to {:?}",
            actor.user_id,
            application.application_number,
            application.status,
            to
        );

        let application = application_repo
            .get_by_id(application_id)
            .await?
            .ok_or(ApplicationError::NotFound(application_id))?;

        load_detail(self.db, application).await
    }
}

/// Error for a guarded write that matched nothing because the application changed after it was
/// read.
async fn stale_transition<C: ConnectionTrait>(
    db: &C,
    application_id: i32,
    action: WorkflowAction,
) -> Error {
    match ApplicationRepository::new(db).get_by_id(application_id).await {
        Ok(Some(current)) => ApplicationError::InvalidTransition {
            from: current.status,
            action,
        }
        .into(),
        Ok(None) => ApplicationError::NotFound(application_id).into(),
        Err(err) => err.into(),
    }
}
