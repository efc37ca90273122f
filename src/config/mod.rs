// ABOUTME: Configuration management module for calculation parameters
// ABOUTME: Groups BMR, activity factor, macro split, and slot weight settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the calorie planner
//!
//! This module provides centralized configuration for the calculation chain:
//!
//! - **Nutrition**: BMR coefficients, activity factors, goal adjustments,
//!   macro split parameters, and meal slot weights
//!
//! All structs carry evidence-based defaults; the defaults are the normative
//! values of the calculation, and overriding them is an explicit opt-in.

/// Nutrition calculation configuration
pub mod nutrition;

pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroSplitConfig, NutritionConfig,
    SlotWeightsConfig,
};
