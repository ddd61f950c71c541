use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Position, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Position)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables backing students and teachers.
    ///
    /// Adds, in dependency order: User, Position, Student, Teacher, TokenBlocklist.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
            .with_table(Position)
            .with_table(Student)
            .with_table(Teacher)
            .with_table(TokenBlocklist)
    }

    /// Adds every table of the university schema.
    ///
    /// Builds on `with_user_tables()` and adds Specialty, Group, Subject, Assignment and the
    /// four association tables.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_university_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_university_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Specialty)
            .with_table(Group)
            .with_table(Subject)
            .with_table(Assignment)
            .with_table(SubjectTeacher)
            .with_table(GroupStudent)
            .with_table(SubjectSpecialty)
            .with_table(SubjectGroup)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
