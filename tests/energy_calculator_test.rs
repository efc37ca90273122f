// ABOUTME: Algorithm tests for the energy calculation chain
// ABOUTME: Covers BMR, maintenance, goal targets, macro split, and the documented invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Algorithm tests for the energy calculator
//!
//! Covers the full calculation chain:
//! - Mifflin-St Jeor BMR for male/female/unspecified sex
//! - Maintenance calories for all five activity levels
//! - Goal adjustment with the safety-floor clamp
//! - Macro split with the carbohydrate zero-floor
//! - The worked end-to-end scenario used as the reference fixture

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use calorie_planner::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroSplitConfig, NutritionConfig,
};
use calorie_planner::intelligence::{
    calculate_nutrition_targets, compute_bmr, goal_calories, macro_targets, maintenance_calories,
};
use calorie_planner::models::{ActivityLevel, BodyProfile, Goal, Preferences, Sex};

mod common;

// ============================================================================
// BMR CALCULATION TESTS - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_bmr_male_typical() {
    let config = BmrConfig::default();

    // 30-year-old male, 70kg, 175cm
    let bmr = compute_bmr(Sex::Male, 70.0, 175.0, 30, &config);

    // 10*70 + 6.25*175 - 5*30 + 5 = 1673.75, rounded to one decimal
    assert!((bmr - 1673.8).abs() < f64::EPSILON);
}

#[test]
fn test_bmr_female_typical() {
    let config = BmrConfig::default();

    // 25-year-old female, 60kg, 165cm
    let bmr = compute_bmr(Sex::Female, 60.0, 165.0, 25, &config);

    // 10*60 + 6.25*165 - 5*25 - 161 = 1345.25 -> 1345.3
    assert!((bmr - 1345.3).abs() < f64::EPSILON);
}

#[test]
fn test_bmr_sex_constants_differ_by_166() {
    let config = BmrConfig::default();

    for (weight, height, age) in [(50.0, 150.0, 20), (70.0, 175.0, 30), (110.0, 195.0, 60)] {
        let male = compute_bmr(Sex::Male, weight, height, age, &config);
        let female = compute_bmr(Sex::Female, weight, height, age, &config);
        assert!(
            ((male - female) - 166.0).abs() < 1e-9,
            "male and female BMR should differ by exactly 166 for {weight}kg/{height}cm/{age}y"
        );
    }
}

#[test]
fn test_bmr_unspecified_sex_averages_both_formulas() {
    let config = BmrConfig::default();

    let male = compute_bmr(Sex::Male, 82.5, 178.0, 41, &config);
    let female = compute_bmr(Sex::Female, 82.5, 178.0, 41, &config);
    let unspecified = compute_bmr(Sex::Unspecified, 82.5, 178.0, 41, &config);

    assert!((unspecified - (male + female) / 2.0).abs() < 0.05 + f64::EPSILON);
}

// ============================================================================
// MAINTENANCE CALORIES - Activity Factors
// ============================================================================

#[test]
fn test_maintenance_all_activity_factors() {
    let config = ActivityFactorsConfig::default();
    let bmr = 1500.0;

    let cases = [
        (ActivityLevel::Sedentary, 1800.0),
        (ActivityLevel::Light, 2062.5),
        (ActivityLevel::Moderate, 2325.0),
        (ActivityLevel::Very, 2587.5),
        (ActivityLevel::Extreme, 2850.0),
    ];

    for (level, expected) in cases {
        let maintenance = maintenance_calories(bmr, level, &config);
        assert!(
            (maintenance - expected).abs() < f64::EPSILON,
            "maintenance for {level:?} should be {expected}"
        );
    }
}

#[test]
fn test_maintenance_rounds_to_one_decimal() {
    let config = ActivityFactorsConfig::default();

    // 1673.8 * 1.55 = 2594.39 -> 2594.4
    let maintenance = maintenance_calories(1673.8, ActivityLevel::Moderate, &config);
    assert!((maintenance - 2594.4).abs() < f64::EPSILON);
}

// ============================================================================
// GOAL CALORIES - Adjustment and Safety Floor
// ============================================================================

#[test]
fn test_goal_calories_adjustments() {
    let config = GoalAdjustmentsConfig::default();

    assert_eq!(goal_calories(2000.0, Goal::Lose, &config), 1700);
    assert_eq!(goal_calories(2000.0, Goal::Maintain, &config), 2000);
    assert_eq!(goal_calories(2000.0, Goal::Gain, &config), 2200);
}

#[test]
fn test_goal_calories_rounds_to_nearest_integer() {
    let config = GoalAdjustmentsConfig::default();

    // 2594.4 * 0.85 = 2205.24 -> 2205
    assert_eq!(goal_calories(2594.4, Goal::Lose, &config), 2205);
}

#[test]
fn test_goal_calories_never_below_safety_floor() {
    let config = GoalAdjustmentsConfig::default();

    // A maintenance already below the floor stays clamped
    assert_eq!(goal_calories(1100.0, Goal::Lose, &config), 1200);
    assert_eq!(goal_calories(900.0, Goal::Maintain, &config), 1200);
    assert_eq!(goal_calories(0.0, Goal::Lose, &config), 1200);

    // Extreme low-weight profile end to end
    let bmr_config = BmrConfig::default();
    let activity_config = ActivityFactorsConfig::default();
    let bmr = compute_bmr(Sex::Female, 35.0, 140.0, 80, &bmr_config);
    let maintenance = maintenance_calories(bmr, ActivityLevel::Sedentary, &activity_config);
    assert!(goal_calories(maintenance, Goal::Lose, &config) >= 1200);
}

// ============================================================================
// MACRO SPLIT - Protein/Fat/Carbs
// ============================================================================

#[test]
fn test_macro_targets_standard_split() {
    let config = MacroSplitConfig::default();

    let macros = macro_targets(70.0, 2205, &config);

    // protein: 2.0 * 70 = 140.0 g (560 kcal)
    assert!((macros.protein_g - 140.0).abs() < f64::EPSILON);
    // fat: 0.25 * 2205 = 551.25 kcal / 9 = 61.25 -> 61.3 g
    assert!((macros.fat_g - 61.3).abs() < f64::EPSILON);
    // carbs: (2205 - 560 - 551.25) / 4 = 273.4375 -> 273.4 g
    assert!((macros.carbs_g - 273.4).abs() < f64::EPSILON);
}

#[test]
fn test_macro_targets_carbs_floor_at_zero() {
    let config = MacroSplitConfig::default();

    // 150kg of body weight puts protein alone at 1200 kcal, far above a
    // 1200 kcal target once fat is added; carbs must clamp to zero silently
    let macros = macro_targets(150.0, 1200, &config);
    assert!(macros.carbs_g.abs() < f64::EPSILON);
    assert!(macros.protein_g > 0.0);
    assert!(macros.fat_g > 0.0);
}

#[test]
fn test_macro_targets_zero_target() {
    let config = MacroSplitConfig::default();

    let macros = macro_targets(70.0, 0, &config);
    assert!(macros.carbs_g.abs() < f64::EPSILON);
    assert!(macros.fat_g.abs() < f64::EPSILON);
}

// ============================================================================
// FULL CHAIN - Worked Reference Scenario
// ============================================================================

#[test]
fn test_reference_scenario_70kg_male_moderate_lose() {
    let config = NutritionConfig::default();
    let profile = BodyProfile {
        sex: Sex::Male,
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 30,
    };
    let preferences = Preferences {
        activity: ActivityLevel::Moderate,
        goal: Goal::Lose,
    };

    let targets = calculate_nutrition_targets(&profile, &preferences, &config);

    assert!((targets.bmr - 1673.8).abs() < f64::EPSILON);
    assert!((targets.maintenance - 2594.4).abs() < f64::EPSILON);
    assert_eq!(targets.target_calories, 2205);
    assert!((targets.macros.protein_g - 140.0).abs() < f64::EPSILON);
    assert!((targets.macros.fat_g - 61.3).abs() < f64::EPSILON);
    assert!((targets.macros.carbs_g - 273.4).abs() < f64::EPSILON);
}

#[test]
fn test_full_chain_is_deterministic() {
    let config = NutritionConfig::default();
    let profile = BodyProfile {
        sex: Sex::Unspecified,
        weight_kg: 58.2,
        height_cm: 162.5,
        age: 45,
    };
    let preferences = Preferences {
        activity: ActivityLevel::Light,
        goal: Goal::Gain,
    };

    let first = calculate_nutrition_targets(&profile, &preferences, &config);
    let second = calculate_nutrition_targets(&profile, &preferences, &config);
    assert_eq!(first, second);
}
