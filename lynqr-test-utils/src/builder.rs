//! Declarative test builder.
//!
//! `TestBuilder` collects the tables a test needs and creates them in dependency order during
//! `build()`. Row fixtures are inserted afterwards through the helpers on [`TestContext`].

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Name of the unique `(user_id, url)` index, mirroring the production migration.
pub static IDX_LINK_USER_ID_URL: &str = "idx-lynqr_link-user_id-url";

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_link_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_link_tables: false,
        }
    }

    /// Add the user table to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the user, link, and click tables to the test database.
    ///
    /// Also creates the unique `(user_id, url)` index on links so tests observe the same
    /// duplicate-URL constraint as production.
    pub fn with_link_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_link_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created after the standard tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lynqr_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), lynqr_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(LynqrUser)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context, creating every configured table and index.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Table or index creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        let mut all_tables = Vec::new();
        let mut indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_user_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::LynqrUser));
        }

        if self.include_link_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::LynqrLink),
                schema.create_table_from_entity(entity::prelude::LynqrClick),
            ]);

            indexes.push(
                Index::create()
                    .name(IDX_LINK_USER_ID_URL)
                    .table(entity::prelude::LynqrLink)
                    .col(entity::lynqr_link::Column::UserId)
                    .col(entity::lynqr_link::Column::Url)
                    .unique()
                    .to_owned(),
            );
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
