// ABOUTME: Database management for the seeded meal catalog
// ABOUTME: Wraps a SQLite pool, runs migrations, and exposes the catalog lookup trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! This module provides the meal catalog store. The catalog is written
//! exactly once, at seed time, and is read-only afterwards: no update or
//! delete paths exist in this crate. Connections are pooled; each query
//! acquires a scoped handle from the pool and releases it unconditionally on
//! completion.

mod meals;

pub use meals::{NewMeal, DEFAULT_MEALS};

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Sqlite, SqlitePool};

use crate::errors::AppResult;
use crate::models::{MealRecord, MealSlot};

/// Read-only meal catalog lookup
///
/// The single core-to-collaborator boundary: the plan assembler resolves each
/// slot through this trait. An empty result is valid output here; the meal
/// selector turns it into an `EmptyCatalogSlot` error.
#[async_trait]
pub trait MealCatalog: Send + Sync {
    /// Fetch all catalog records for a slot, ordered by id ascending
    async fn find_by_meal_type(&self, slot: MealSlot) -> AppResult<Vec<MealRecord>>;
}

/// Database manager for the meal catalog
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails.
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_meals().await?;
        Ok(())
    }
}
