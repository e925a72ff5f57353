//! Submitting new applications.

use chrono::{DateTime, NaiveDateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr, TransactionTrait};

use crate::{
    model::application::{ApplicationDto, CreateApplicationDto},
    server::{
        data::{
            application::{ApplicationRepository, NewApplication},
            family_member::FamilyMemberRepository,
            sequence::SequenceRepository,
        },
        error::{application::ApplicationError, Error},
        model::application::{
            document::{DocumentPaths, DocumentUploads},
            number::{ApplicationNumber, SequencePeriod},
            validation::{validate, ApplicationForm},
        },
        service::{
            application::{load_detail, ApplicationService},
            retry::RetryContext,
        },
    },
};

impl<'a> ApplicationService<'a> {
    /// Submits a new application for `owner_id`, numbered in the current UTC month.
    ///
    /// See [`ApplicationService::submit_at`].
    pub async fn submit(
        &self,
        owner_id: i32,
        dto: CreateApplicationDto,
        uploads: DocumentUploads,
    ) -> Result<ApplicationDto, Error> {
        self.submit_at(owner_id, dto, uploads, Utc::now()).await
    }

    /// Submits a new application as of `now`.
    ///
    /// Validates the form and documents, stages the documents in storage, then reserves the
    /// next number of `now`'s month and inserts the application with its family members in one
    /// transaction. Staged documents are deleted again whenever the transaction does not commit.
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - Application stored in Pending with its number
    /// - `Err(ApplicationError::ValidationFailed)` - Form or documents failed field rules
    /// - `Err(ApplicationError::DuplicateActiveApplication)` - Owner already has an application
    ///   in Pending, Verification or Printing
    /// - `Err(ApplicationError::SequenceExhausted)` - The month has issued every number
    /// - `Err(ApplicationError::CreationFailed)` - Storing documents or persisting failed
    pub async fn submit_at(
        &self,
        owner_id: i32,
        dto: CreateApplicationDto,
        uploads: DocumentUploads,
        now: DateTime<Utc>,
    ) -> Result<ApplicationDto, Error> {
        let form = validate(dto, &uploads)?;

        if ApplicationRepository::new(self.db)
            .find_active_by_owner(owner_id)
            .await?
            .is_some()
        {
            return Err(ApplicationError::DuplicateActiveApplication { owner_id }.into());
        }

        let mut staged = self.storage.stage();
        if let Err(err) = staged.store_all(&uploads).await {
            staged.discard().await;

            return Err(ApplicationError::CreationFailed {
                owner_id,
                reason: err.to_string(),
            }
            .into());
        }

        let period = SequencePeriod::from_datetime(now);
        let documents = staged.paths().clone();

        match self
            .persist(owner_id, form, documents, period, now.naive_utc())
            .await
        {
            Ok(application) => {
                staged.commit();

                tracing::info!(
                    "User ID {} submitted application {}",
                    owner_id,
                    application.application_number
                );

                Ok(application)
            }
            Err(err) => {
                staged.discard().await;

                Err(creation_error(owner_id, err))
            }
        }
    }

    async fn persist(
        &self,
        owner_id: i32,
        form: ApplicationForm,
        documents: DocumentPaths,
        period: SequencePeriod,
        now: NaiveDateTime,
    ) -> Result<ApplicationDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("submit application for user ID {}", owner_id),
            |_| {
                let db = db.clone();
                let form = form.clone();
                let documents = documents.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;

                    let issued = SequenceRepository::new(&txn)
                        .reserve(&period.key(), now)
                        .await?
                        .ok_or_else(|| ApplicationError::NumberConflict {
                            period: period.key(),
                        })?;
                    let issued = u32::try_from(issued).map_err(|_| {
                        Error::InternalError(format!(
                            "Negative application sequence {} for period {}",
                            issued,
                            period.key()
                        ))
                    })?;
                    let number = ApplicationNumber::generate(period, issued)?;

                    let application = ApplicationRepository::new(&txn)
                        .create(NewApplication {
                            owner_id,
                            number: &number,
                            form: &form,
                            documents: &documents,
                            submitted_at: now,
                        })
                        .await
                        .map_err(|err| unique_violation(err, owner_id, period))?;

                    FamilyMemberRepository::new(&txn)
                        .create_many(application.id, &form.members)
                        .await?;

                    let detail = load_detail(&txn, application).await?;

                    txn.commit().await?;

                    Ok(detail)
                })
            },
        )
        .await
    }
}

/// Maps unique constraint violations on insert to the rule they enforce.
///
/// `active_owner_id` holds the one-active-application-per-owner rule, the only other unique
/// column written is the application number.
fn unique_violation(err: DbErr, owner_id: i32, period: SequencePeriod) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) if message.contains("active_owner_id") => {
            ApplicationError::DuplicateActiveApplication { owner_id }.into()
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => ApplicationError::NumberConflict {
            period: period.key(),
        }
        .into(),
        _ => err.into(),
    }
}

/// Errors that reach the applicant unchanged, everything else becomes `CreationFailed`.
fn creation_error(owner_id: i32, err: Error) -> Error {
    match err {
        Error::ApplicationError(
            ApplicationError::DuplicateActiveApplication { .. }
            | ApplicationError::SequenceExhausted { .. },
        ) => err,
        err => ApplicationError::CreationFailed {
            owner_id,
            reason: err.to_string(),
        }
        .into(),
    }
}
