// ABOUTME: Energy calculation chain using the Mifflin-St Jeor equation
// ABOUTME: BMR, maintenance calories, goal-adjusted targets, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Calculator Module
//!
//! Implements the calculation chain from body metrics to daily targets:
//! BMR → maintenance calories → goal-adjusted target → macro split.
//! All functions are pure and deterministic.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology:
//!   Nutrition, Energy, and Human Performance. Activity factor table.

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroSplitConfig, NutritionConfig,
};
use crate::constants::energy::{
    CAL_PER_G_CARB, CAL_PER_G_FAT, CAL_PER_G_PROTEIN, SAFETY_FLOOR_KCAL,
};
use crate::models::{
    ActivityLevel, BodyProfile, Goal, MacroTargets, NutritionTargets, Preferences, Sex,
};

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
/// - Unspecified: mean of the male and female results (tolerant-input
///   fallback policy, not a third equation)
///
/// Result is rounded to one decimal place.
///
/// This function does not self-validate: positivity of weight, height, and
/// age is the caller's contract (see `BodyProfile::validate`).
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn compute_bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: u32, config: &BmrConfig) -> f64 {
    let base = config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(age);

    let bmr = match sex {
        Sex::Male => base + config.msj_male_constant,
        Sex::Female => base + config.msj_female_constant,
        Sex::Unspecified => {
            let male = base + config.msj_male_constant;
            let female = base + config.msj_female_constant;
            (male + female) / 2.0
        }
    };

    round1(bmr)
}

/// Calculate maintenance calories from BMR and activity level
///
/// Formula: maintenance = BMR x activity factor, rounded to one decimal.
///
/// Activity factors based on `McArdle` et al. (2010):
/// sedentary 1.2, light 1.375, moderate 1.55, very 1.725, extreme 1.9.
/// Unrecognized activity strings are folded to `Sedentary` at parse time, so
/// the 1.2 factor is the effective default.
#[must_use]
pub fn maintenance_calories(bmr: f64, activity: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    round1(bmr * config.factor_for(activity))
}

/// Calculate the goal-adjusted daily calorie target
///
/// Lose → maintenance x 0.85, gain → maintenance x 1.10, maintain →
/// unchanged. The result is rounded to the nearest integer and then clamped
/// below at the safety floor (1200 kcal/day). The clamp is a hard invariant:
/// the output is never below the floor no matter how aggressive the deficit
/// implied by the inputs.
#[must_use]
pub fn goal_calories(maintenance: f64, goal: Goal, config: &GoalAdjustmentsConfig) -> u32 {
    let adjusted = match goal {
        Goal::Lose => maintenance * config.lose_multiplier,
        Goal::Gain => maintenance * config.gain_multiplier,
        Goal::Maintain => maintenance,
    };

    let rounded = adjusted.round().max(0.0) as u32;
    rounded.max(SAFETY_FLOOR_KCAL)
}

/// Calculate daily macro targets from body weight and the calorie target
///
/// - protein grams = `protein_g_per_kg` x weight (default 2.0 g/kg)
/// - fat calories = `fat_percent_of_target` x target (default 25%), at
///   9 kcal/g
/// - carbohydrates absorb the remaining calories at 4 kcal/g, floored at
///   zero grams — when protein and fat calories already exceed the target
///   the excess is absorbed silently, not reported
///
/// All gram values are rounded to one decimal place.
#[must_use]
pub fn macro_targets(weight_kg: f64, target_cal: u32, config: &MacroSplitConfig) -> MacroTargets {
    let protein_g = config.protein_g_per_kg * weight_kg;
    let protein_cals = protein_g * CAL_PER_G_PROTEIN;

    let fat_cals = config.fat_percent_of_target * f64::from(target_cal);
    let fat_g = fat_cals / CAL_PER_G_FAT;

    let carbs_cals = f64::from(target_cal) - (protein_cals + fat_cals);
    let carbs_g = (carbs_cals / CAL_PER_G_CARB).max(0.0);

    MacroTargets {
        protein_g: round1(protein_g),
        fat_g: round1(fat_g),
        carbs_g: round1(carbs_g),
    }
}

/// Run the full calculation chain for a profile and preferences
///
/// This is the main entry point combining BMR, maintenance, goal-target, and
/// macro calculations. Like the individual steps it does not self-validate;
/// callers check `BodyProfile::validate` first.
#[must_use]
pub fn calculate_nutrition_targets(
    profile: &BodyProfile,
    preferences: &Preferences,
    config: &NutritionConfig,
) -> NutritionTargets {
    let bmr = compute_bmr(
        profile.sex,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        &config.bmr,
    );

    let maintenance = maintenance_calories(bmr, preferences.activity, &config.activity_factors);

    let target_calories = goal_calories(maintenance, preferences.goal, &config.goal_adjustments);

    let macros = macro_targets(profile.weight_kg, target_calories, &config.macro_split);

    NutritionTargets {
        bmr,
        maintenance,
        target_calories,
        macros,
    }
}
