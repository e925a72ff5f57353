use chrono::NaiveDateTime;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, SqlErr,
};

use crate::server::model::db::ApplicationSequenceModel;

/// Queries on `kk_application_sequence`, one counter row per month.
pub struct SequenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SequenceRepository<'a, C> {
    /// Creates a new instance of [`SequenceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counter row of a `YYYYMM` period
    pub async fn get(&self, period: &str) -> Result<Option<ApplicationSequenceModel>, DbErr> {
        entity::prelude::KkApplicationSequence::find_by_id(period.to_string())
            .one(self.db)
            .await
    }

    /// Reserves the next value of the `period` counter with a compare-and-set
    ///
    /// Intended to run inside the transaction that inserts the application, so the reservation
    /// is released again if that transaction rolls back.
    ///
    /// # Returns
    /// - `Ok(Some(count))` - Reserved, `count` numbers were issued in `period` before this one
    /// - `Ok(None)` - A concurrent reservation changed the counter first, retry in a new
    ///   transaction
    /// - `Err(DbErr)` - Query failed
    pub async fn reserve(&self, period: &str, now: NaiveDateTime) -> Result<Option<i32>, DbErr> {
        match self.get(period).await? {
            Some(sequence) => self.advance(period, sequence.last_value, now).await,
            None => self.start(period, now).await,
        }
    }

    /// Creates the counter row for a period that has issued no numbers yet
    ///
    /// # Returns
    /// - `Ok(Some(0))` - Row created with the first number reserved
    /// - `Ok(None)` - Another transaction created the row first
    /// - `Err(DbErr)` - Query failed
    pub async fn start(&self, period: &str, now: NaiveDateTime) -> Result<Option<i32>, DbErr> {
        let first = entity::kk_application_sequence::ActiveModel {
            period: ActiveValue::Set(period.to_string()),
            last_value: ActiveValue::Set(1),
            updated_at: ActiveValue::Set(now),
        };

        match entity::prelude::KkApplicationSequence::insert(first)
            .exec(self.db)
            .await
        {
            Ok(_) => Ok(Some(0)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Moves the counter from `expected` to `expected + 1` if nobody moved it since it was read
    ///
    /// # Returns
    /// - `Ok(Some(expected))` - Counter advanced
    /// - `Ok(None)` - The stored counter no longer equals `expected`
    /// - `Err(DbErr)` - Query failed
    pub async fn advance(
        &self,
        period: &str,
        expected: i32,
        now: NaiveDateTime,
    ) -> Result<Option<i32>, DbErr> {
        let result = entity::prelude::KkApplicationSequence::update_many()
            .set(entity::kk_application_sequence::ActiveModel {
                last_value: ActiveValue::Set(expected + 1),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::kk_application_sequence::Column::Period.eq(period))
            .filter(entity::kk_application_sequence::Column::LastValue.eq(expected))
            .exec(self.db)
            .await?;

        if result.rows_affected == 1 {
            Ok(Some(expected))
        } else {
            Ok(None)
        }
    }
}
