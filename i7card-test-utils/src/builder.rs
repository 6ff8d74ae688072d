//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Configuration methods are chained together and all queued work runs during
//! the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// card fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_card_tables: bool,

    // Database fixtures to insert
    cards: Vec<i32>,
    group_cards: Vec<i32>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_card_tables: false,
            cards: Vec::new(),
            group_cards: Vec::new(),
        }
    }

    /// Add every card-related table to the test database.
    ///
    /// Creates `cards`, its four 1:1 sub-tables, `skill_details`, and `group_cards`,
    /// ordered so that foreign keys resolve.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_card_tables(mut self) -> Self {
        self.include_card_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use i7card_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), i7card_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Card)
    ///     .with_table(CardStats)
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

    /// Insert a fully populated mock card into the database.
    ///
    /// The card gets stats, skills, release info, broach info and all five skill levels.
    /// See [`factory`](crate::fixtures::card::factory) for the values used.
    ///
    /// # Arguments
    /// - `id` - Primary key of the card
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_card(mut self, id: i32) -> Self {
        self.cards.push(id);
        self
    }

    /// Insert a mock group card into the database.
    ///
    /// # Arguments
    /// - `id` - Primary key of the group card
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_group_card(mut self, id: i32) -> Self {
        self.group_cards.push(id);
        self
    }

    /// Build the test context, creating tables and inserting queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_card_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Card),
                schema.create_table_from_entity(entity::prelude::CardStats),
                schema.create_table_from_entity(entity::prelude::CardSkills),
                schema.create_table_from_entity(entity::prelude::SkillDetail),
                schema.create_table_from_entity(entity::prelude::ReleaseInfo),
                schema.create_table_from_entity(entity::prelude::BroachInfo),
                schema.create_table_from_entity(entity::prelude::GroupCard),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for id in self.cards {
            setup.card().insert_full_mock_card(id).await?;
        }

        for id in self.group_cards {
            setup.card().insert_mock_group_card(id).await?;
        }

        Ok(setup)
    }
}
