// ABOUTME: Meal catalog queries and seeding for the SQLite store
// ABOUTME: Handles the meals table schema, slot lookups, and the reference seed set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};

use super::{Database, MealCatalog};
use crate::errors::{AppError, AppResult};
use crate::models::{MealRecord, MealSlot};

/// A catalog entry to insert
///
/// Seeding is the catalog's only write path; the planner core itself never
/// inserts, updates, or deletes.
#[derive(Debug, Clone, Copy)]
pub struct NewMeal<'a> {
    /// Display name
    pub name: &'a str,
    /// Which slot this meal belongs to
    pub meal_type: MealSlot,
    /// Total calories (positive)
    pub calories: u32,
    /// Protein grams
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fat_g: f64,
    /// Free-text tags, possibly empty
    pub tags: &'a str,
}

/// Reference seed set: one meal per slot
///
/// The contract is at least one record per slot with positive calories and
/// non-negative macro grams; these four rows satisfy it and double as test
/// fixtures.
pub const DEFAULT_MEALS: &[NewMeal<'static>] = &[
    NewMeal {
        name: "Oats with milk & banana",
        meal_type: MealSlot::Breakfast,
        calories: 350,
        protein_g: 12.0,
        carbs_g: 60.0,
        fat_g: 7.0,
        tags: "vegetarian",
    },
    NewMeal {
        name: "Paneer curry + brown rice",
        meal_type: MealSlot::Lunch,
        calories: 650,
        protein_g: 30.0,
        carbs_g: 75.0,
        fat_g: 20.0,
        tags: "vegetarian",
    },
    NewMeal {
        name: "Dal + rotis + veg",
        meal_type: MealSlot::Dinner,
        calories: 600,
        protein_g: 25.0,
        carbs_g: 80.0,
        fat_g: 15.0,
        tags: "vegetarian",
    },
    NewMeal {
        name: "Protein shake + banana",
        meal_type: MealSlot::Snack,
        calories: 250,
        protein_g: 25.0,
        carbs_g: 30.0,
        fat_g: 3.0,
        tags: "",
    },
];

impl Database {
    /// Create the meals table
    pub(super) async fn migrate_meals(&self) -> anyhow::Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                meal_type TEXT NOT NULL,
                calories INTEGER NOT NULL,
                protein_g REAL NOT NULL,
                carbs_g REAL NOT NULL,
                fat_g REAL NOT NULL,
                tags TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Insert one catalog entry and return its assigned id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn insert_meal(&self, meal: &NewMeal<'_>) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO meals (name, meal_type, calories, protein_g, carbs_g, fat_g, tags, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(meal.name)
        .bind(meal.meal_type.as_str())
        .bind(i64::from(meal.calories))
        .bind(meal.protein_g)
        .bind(meal.carbs_g)
        .bind(meal.fat_g)
        .bind(meal.tags)
        .bind(Utc::now().to_rfc3339())
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to insert meal: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    /// Get a catalog entry by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get_meal(&self, id: i64) -> AppResult<Option<MealRecord>> {
        let row = sqlx::query(
            r"
            SELECT id, name, meal_type, calories, protein_g, carbs_g, fat_g, tags, created_at
            FROM meals
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get meal: {e}")))?;

        row.map(|r| row_to_meal(&r)).transpose()
    }

    /// Count all catalog entries
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn meal_count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM meals")
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to count meals: {e}")))?;

        Ok(row.get("count"))
    }

    /// Seed the reference meal set
    ///
    /// A no-op returning 0 when the catalog already has rows, unless `force`
    /// is set (a dev/test convenience that inserts regardless). Returns the
    /// number of rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails.
    pub async fn seed_default_meals(&self, force: bool) -> AppResult<u32> {
        if !force && self.meal_count().await? > 0 {
            return Ok(0);
        }

        let mut inserted = 0;
        for meal in DEFAULT_MEALS {
            self.insert_meal(meal).await?;
            inserted += 1;
        }

        Ok(inserted)
    }
}

#[async_trait]
impl MealCatalog for Database {
    async fn find_by_meal_type(&self, slot: MealSlot) -> AppResult<Vec<MealRecord>> {
        // Explicit id ordering keeps the selector's tie-break deterministic
        let rows = sqlx::query(
            r"
            SELECT id, name, meal_type, calories, protein_g, carbs_g, fat_g, tags, created_at
            FROM meals
            WHERE meal_type = $1
            ORDER BY id ASC
            ",
        )
        .bind(slot.as_str())
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list meals for slot: {e}")))?;

        rows.iter().map(row_to_meal).collect()
    }
}

fn row_to_meal(row: &SqliteRow) -> AppResult<MealRecord> {
    let meal_type_str: String = row.get("meal_type");
    let calories: i64 = row.get("calories");
    let created_at_str: String = row.get("created_at");

    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid created_at timestamp: {e}")))?;

    Ok(MealRecord {
        id: row.get("id"),
        name: row.get("name"),
        meal_type: MealSlot::parse(&meal_type_str)?,
        calories: calories as u32,
        protein_g: row.get("protein_g"),
        carbs_g: row.get("carbs_g"),
        fat_g: row.get("fat_g"),
        tags: row.get("tags"),
        created_at,
    })
}
