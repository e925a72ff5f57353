//! Application service layer.
//!
//! Submission, owner cancellation and administrator transitions live in their own modules.
//! This module holds the read side: tracking, detail views, the review queue and the family
//! card number availability check.

pub mod submission;
pub mod workflow;

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::application::{ApplicationDto, ApplicationSummaryDto, NumberAvailabilityDto},
    server::{
        data::{application::ApplicationRepository, family_member::FamilyMemberRepository},
        error::{application::ApplicationError, Error},
        model::{
            actor::Actor,
            application::validation::IDENTITY_NUMBER_LENGTH,
            db::ApplicationModel,
        },
        service::retry::RetryContext,
        storage::DocumentStorage,
    },
};

/// Service for family card applications.
pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a DocumentStorage,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new instance of [`ApplicationService`]
    pub fn new(db: &'a DatabaseConnection, storage: &'a DocumentStorage) -> Self {
        Self { db, storage }
    }

    /// Lists the owner's applications, newest first.
    pub async fn get_applications_for_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<ApplicationSummaryDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("get applications of user ID {}", owner_id),
            |_| {
                let db = db.clone();

                Box::pin(async move {
                    let applications = ApplicationRepository::new(&db)
                        .get_many_by_owner(owner_id)
                        .await?;

                    Ok(applications
                        .into_iter()
                        .map(ApplicationSummaryDto::from)
                        .collect())
                })
            },
        )
        .await
    }

    /// Gets one application with its family members.
    ///
    /// Administrators can read any application, citizens only their own.
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - Application found and visible to `actor`
    /// - `Err(ApplicationError::NotFound)` - No such application, or it belongs to someone else
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_application(
        &self,
        actor: Actor,
        application_id: i32,
    ) -> Result<ApplicationDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("get application ID {}", application_id),
            |_| {
                let db = db.clone();

                Box::pin(async move {
                    let application_repo = ApplicationRepository::new(&db);

                    let application = if actor.is_administrator() {
                        application_repo.get_by_id(application_id).await?
                    } else {
                        application_repo
                            .get_by_id_and_owner(application_id, actor.user_id)
                            .await?
                    }
                    .ok_or(ApplicationError::NotFound(application_id))?;

                    load_detail(&db, application).await
                })
            },
        )
        .await
    }

    /// Lists applications for administrator review, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<ApplicationSummaryDto>)` - Applications, only those in `status` when given
    /// - `Err(ApplicationError::Forbidden)` - `actor` is not an administrator
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_review_queue(
        &self,
        actor: Actor,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<ApplicationSummaryDto>, Error> {
        if !actor.is_administrator() {
            return Err(ApplicationError::Forbidden {
                user_id: actor.user_id,
                action: "view the review queue".to_string(),
            }
            .into());
        }

        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("get application review queue", |_| {
            let db = db.clone();

            Box::pin(async move {
                let applications = ApplicationRepository::new(&db).get_many(status).await?;

                Ok(applications
                    .into_iter()
                    .map(ApplicationSummaryDto::from)
                    .collect())
            })
        })
        .await
    }

    /// Checks whether a family card number (`no_kk`) is already used by an application.
    ///
    /// The check is advisory, it reserves nothing and the same number may be submitted again.
    /// Surrounding whitespace is ignored, the same way submission trims the number before storing it.
    ///
    /// # Returns
    /// - `Ok(NumberAvailabilityDto)` - `available` is false when an application carries the number
    /// - `Err(ApplicationError::InvalidFormat)` - Candidate is not exactly 16 characters, no
    ///   query is made
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn check_application_number_availability(
        &self,
        candidate: &str,
    ) -> Result<NumberAvailabilityDto, Error> {
        let candidate = candidate.trim();

        if candidate.chars().count() != IDENTITY_NUMBER_LENGTH {
            return Err(ApplicationError::InvalidFormat(candidate.to_string()).into());
        }

        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let candidate = candidate.to_string();

        ctx.execute_with_retry("family card number availability check", |_| {
            let db = db.clone();
            let candidate = candidate.clone();

            Box::pin(async move {
                let exists = ApplicationRepository::new(&db)
                    .exists_by_family_card_number(&candidate)
                    .await?;

                Ok(NumberAvailabilityDto {
                    number: candidate,
                    available: !exists,
                })
            })
        })
        .await
    }
}

/// Loads the family members of `application` and builds its detail view.
async fn load_detail<C: sea_orm::ConnectionTrait>(
    db: &C,
    application: ApplicationModel,
) -> Result<ApplicationDto, Error> {
    let members = FamilyMemberRepository::new(db)
        .get_by_application_id(application.id)
        .await?;

    Ok(ApplicationDto::from((application, members)))
}
