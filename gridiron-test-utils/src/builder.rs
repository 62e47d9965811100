//! Declarative test builder.
//!
//! `TestBuilder` queues table creation for the entities a test touches and
//! executes everything during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::TestSetup};

/// Builder for declarative test initialization.
///
/// Chain `with_table` calls for each entity the test needs, then finalize
/// with `build()` to get a [`TestSetup`] backed by in-memory SQLite.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Add an entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gridiron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), gridiron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(League)
    ///     .with_table(Team)
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

    /// Build the test setup by creating all configured tables.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_creates_tables() {
        let result = TestBuilder::new()
            .with_table(entity::prelude::League)
            .with_table(entity::prelude::Team)
            .build()
            .await;
        assert!(result.is_ok());
    }
}
