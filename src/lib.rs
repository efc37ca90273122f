// ABOUTME: Main library entry point for the calorie planner
// ABOUTME: Exposes energy calculation, meal selection, and catalog access modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Planner
//!
//! A personal-nutrition calculator: estimates a user's daily energy need and
//! macronutrient targets from body metrics, then assembles a one-day meal plan
//! by picking the closest-matching stored meal for each meal slot.
//!
//! ## Architecture
//!
//! - **Models**: Domain types for body metrics, preferences, and meal records
//! - **Intelligence**: Pure calculation chain (BMR → maintenance → target →
//!   macros) plus nearest-match meal selection and plan assembly
//! - **Database**: Seeded, read-only meal catalog backed by `SQLite`
//! - **Config**: Typed calculation parameters with evidence-based defaults
//!
//! ## Example
//!
//! ```rust,no_run
//! use calorie_planner::config::NutritionConfig;
//! use calorie_planner::database::Database;
//! use calorie_planner::intelligence::generate_plan;
//! use calorie_planner::models::{ActivityLevel, BodyProfile, Goal, Preferences, Sex};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db = Database::new("sqlite:./data/meals.db").await?;
//!     db.seed_default_meals(false).await?;
//!
//!     let profile = BodyProfile { sex: Sex::Male, weight_kg: 70.0, height_cm: 175.0, age: 30 };
//!     let prefs = Preferences { activity: ActivityLevel::Moderate, goal: Goal::Lose };
//!     let summary = generate_plan(&profile, &prefs, &db, &NutritionConfig::default()).await?;
//!
//!     println!("target: {} kcal", summary.targets.target_calories);
//!     Ok(())
//! }
//! ```

/// Typed calculation parameters with evidence-based defaults
pub mod config;

/// Application constants and environment-based configuration values
pub mod constants;

/// Seeded meal catalog backed by `SQLite`
pub mod database;

/// Unified error handling system with standard error codes
pub mod errors;

/// Energy calculation, meal selection, and day-plan assembly
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain models for body metrics, preferences, and meals
pub mod models;
