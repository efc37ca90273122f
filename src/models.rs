// ABOUTME: Core data models and types for the calorie planner
// ABOUTME: Defines BodyProfile, Preferences, MealRecord, DayPlan and related enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! This module contains the core data structures used throughout the calorie
//! planner.
//!
//! ## Design Principles
//!
//! - **Tolerant Inputs**: User-supplied categorical values (sex, activity,
//!   goal) never fail to parse — each has an explicit fallback policy
//! - **Closed Slots**: Meal slots are a closed four-value set; unknown slot
//!   names are rejected
//! - **Serializable**: All models support JSON serialization
//!
//! ## Core Models
//!
//! - `BodyProfile` / `Preferences`: Per-request calculation inputs
//! - `NutritionTargets`: Computed energy and macro targets
//! - `MealRecord`: One seeded catalog entry
//! - `DayPlan` / `PlanSummary`: Assembled one-day plan output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Biological sex for BMR calculation
///
/// `Unspecified` is a deliberate tolerant-input policy, not an error state:
/// the BMR for an unspecified sex is the mean of the male and female formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (Mifflin-St Jeor constant +5)
    Male,
    /// Female (Mifflin-St Jeor constant -161)
    Female,
    /// Not given or not recognized; averaged formulas apply
    #[default]
    Unspecified,
}

impl Sex {
    /// Convert to canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unspecified => "unspecified",
        }
    }

    /// Parse from a user-supplied string
    ///
    /// Recognizes `male`/`m` and `female`/`f` case-insensitively; everything
    /// else (including empty input) maps to `Unspecified`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Unspecified,
        }
    }
}

/// Activity level for maintenance-calorie calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Very,
    /// Very hard exercise or a physical job
    Extreme,
}

impl ActivityLevel {
    /// Convert to canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Very => "very",
            Self::Extreme => "extreme",
        }
    }

    /// Parse from a user-supplied string; unrecognized values fall back to
    /// `Sedentary` (activity factor 1.2)
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "very" => Self::Very,
            "extreme" => Self::Extreme,
            _ => Self::Sedentary,
        }
    }
}

/// Weight goal for calorie-target adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit (maintenance x 0.85)
    Lose,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus (maintenance x 1.10)
    Gain,
}

impl Goal {
    /// Convert to canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }

    /// Parse from a user-supplied string; unrecognized values fall back to
    /// `Maintain` (target left unchanged)
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            _ => Self::Maintain,
        }
    }
}

/// One of the four meal occasions in a day
///
/// Unlike the input enums above, this is a closed set: unknown slot names are
/// an error rather than a fallback, since a mistyped slot would silently
/// select from the wrong catalog subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// First meal of the day
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snack
    Snack,
}

impl MealSlot {
    /// All slots in canonical plan order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parse from a string
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for anything outside the four known slots.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            other => Err(AppError::invalid_input(format!(
                "unknown meal slot '{other}'"
            ))),
        }
    }
}

/// Per-request body metrics
///
/// Constructed fresh for each calculation; never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Biological sex
    pub sex: Sex,
    /// Body weight in kilograms (must be positive)
    pub weight_kg: f64,
    /// Height in centimeters (must be positive)
    pub height_cm: f64,
    /// Age in years (must be positive)
    pub age: u32,
}

impl BodyProfile {
    /// Check that all metrics are positive
    ///
    /// The calculation chain itself does not self-validate; callers run this
    /// check before invoking it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the offending field.
    pub fn validate(&self) -> AppResult<()> {
        if self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input("weight_kg must be positive"));
        }
        if self.height_cm <= 0.0 {
            return Err(AppError::invalid_input("height_cm must be positive"));
        }
        if self.age == 0 {
            return Err(AppError::invalid_input("age must be positive"));
        }
        Ok(())
    }
}

/// Per-request lifestyle preferences
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Activity level for the maintenance multiplier
    pub activity: ActivityLevel,
    /// Weight goal for the target adjustment
    pub goal: Goal,
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein grams per day
    pub protein_g: f64,
    /// Fat grams per day
    pub fat_g: f64,
    /// Carbohydrate grams per day (never negative)
    pub carbs_g: f64,
}

/// Computed daily energy and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Basal Metabolic Rate (kcal/day, one decimal)
    pub bmr: f64,
    /// Maintenance calories (kcal/day, one decimal)
    pub maintenance: f64,
    /// Goal-adjusted calorie target (kcal/day, clamped at the safety floor)
    pub target_calories: u32,
    /// Macro split of the target
    pub macros: MacroTargets,
}

/// One seeded meal catalog entry
///
/// Owned by the catalog store; created once at seed time and never mutated or
/// deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Stable unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
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
    /// Free-text tags, possibly empty (e.g. "vegetarian")
    pub tags: String,
    /// When the record was seeded
    pub created_at: DateTime<Utc>,
}

/// One selected meal per slot
///
/// Serializes as a slot-keyed map; iteration order is the canonical plan
/// order (breakfast, lunch, dinner, snack).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Selected breakfast
    pub breakfast: MealRecord,
    /// Selected lunch
    pub lunch: MealRecord,
    /// Selected dinner
    pub dinner: MealRecord,
    /// Selected snack
    pub snack: MealRecord,
}

impl DayPlan {
    /// Get the selected meal for a slot
    #[must_use]
    pub const fn get(&self, slot: MealSlot) -> &MealRecord {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snack,
        }
    }

    /// Iterate slots and their selected meals in canonical plan order
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &MealRecord)> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// Full pipeline output: computed targets plus the assembled plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Energy and macro targets
    pub targets: NutritionTargets,
    /// One selected meal per slot
    pub plan: DayPlan,
}
