//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_application_tables: bool,
    users: Vec<UserRole>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_application_tables: false,
            users: Vec::new(),
        }
    }

    /// Add every table used by the application workflow.
    ///
    /// Creates KkUser, KkApplication, KkFamilyMember and KkApplicationSequence, in foreign key
    /// order.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_application_tables(mut self) -> Self {
        self.include_application_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kk_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), kk_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(KkUser).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given role during `build()`.
    ///
    /// Users are inserted in call order, so the first queued user has ID 1.
    pub fn with_user(mut self, role: UserRole) -> Self {
        self.users.push(role);
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_application_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::KkUser),
                schema.create_table_from_entity(entity::prelude::KkApplication),
                schema.create_table_from_entity(entity::prelude::KkFamilyMember),
                schema.create_table_from_entity(entity::prelude::KkApplicationSequence),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for role in self.users {
            context.user().insert_user(role).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
