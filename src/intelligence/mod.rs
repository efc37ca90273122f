// ABOUTME: Intelligence module for the calorie planner's computation core
// ABOUTME: Groups the energy calculator, meal selector, and day-plan assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The computation core of the calorie planner: the pure energy/macro
//! calculation chain, the nearest-match meal selector, and the day-plan
//! assembler that composes them against the meal catalog.

/// BMR, maintenance, goal-target, and macro calculations
pub mod energy_calculator;

/// Nearest-match meal selection for a slot
pub mod meal_selector;

/// Day-plan assembly and the full pipeline entry point
pub mod plan_generator;

pub use energy_calculator::{
    calculate_nutrition_targets, compute_bmr, goal_calories, macro_targets, maintenance_calories,
};
pub use meal_selector::pick_meal_for_slot;
pub use plan_generator::{generate_day_plan, generate_plan};
