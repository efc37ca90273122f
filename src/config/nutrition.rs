// ABOUTME: Nutrition configuration for the energy and macro calculation chain
// ABOUTME: Configures BMR coefficients, activity factors, goal adjustments, and slot weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! Provides configuration for the calculation chain: BMR, maintenance
//! calories, goal-adjusted targets, macro split, and day-plan slot weights.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle` et al. (2010) - Exercise Physiology

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityLevel, MealSlot};

/// Nutrition calculation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for maintenance calories
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-based target adjustments
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Macronutrient split parameters
    pub macro_split: MacroSplitConfig,
    /// Day-plan slot weight table
    pub slot_weights: SlotWeightsConfig,
}

impl NutritionConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` from the first section that fails validation.
    pub fn validate(&self) -> AppResult<()> {
        self.goal_adjustments.validate()?;
        self.macro_split.validate()?;
        self.slot_weights.validate()
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. American Journal of Clinical Nutrition, 51(2),
/// 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for maintenance-calorie calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub very: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extreme: f64,
}

impl ActivityFactorsConfig {
    /// Get the multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Very => self.very,
            ActivityLevel::Extreme => self.extreme,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            very: 1.725,
            extreme: 1.9,
        }
    }
}

/// Goal-based multipliers applied to maintenance calories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Weight-loss multiplier (0.85, a 15% deficit)
    pub lose_multiplier: f64,
    /// Weight-gain multiplier (1.10, a 10% surplus)
    pub gain_multiplier: f64,
}

impl GoalAdjustmentsConfig {
    /// Validate multipliers are positive and ordered around 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a multiplier would invert the goal's intent.
    pub fn validate(&self) -> AppResult<()> {
        if self.lose_multiplier <= 0.0 || self.lose_multiplier > 1.0 {
            return Err(AppError::config(format!(
                "lose_multiplier must be within (0.0, 1.0], got {}",
                self.lose_multiplier
            )));
        }
        if self.gain_multiplier < 1.0 {
            return Err(AppError::config(format!(
                "gain_multiplier must be at least 1.0, got {}",
                self.gain_multiplier
            )));
        }
        Ok(())
    }
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            lose_multiplier: 0.85,
            gain_multiplier: 1.10,
        }
    }
}

/// Macronutrient split parameters
///
/// Protein is weight-proportional, fat is a fixed share of the calorie
/// target, and carbohydrates absorb the remainder (floored at zero).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein grams per kilogram of body weight (2.0)
    pub protein_g_per_kg: f64,
    /// Fat share of the calorie target, 0.0-1.0 (0.25)
    pub fat_percent_of_target: f64,
}

impl MacroSplitConfig {
    /// Validate split parameters
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a non-positive protein factor or a fat share
    /// outside 0.0-1.0.
    pub fn validate(&self) -> AppResult<()> {
        if self.protein_g_per_kg <= 0.0 {
            return Err(AppError::config(format!(
                "protein_g_per_kg must be positive, got {}",
                self.protein_g_per_kg
            )));
        }
        if !(0.0..=1.0).contains(&self.fat_percent_of_target) {
            return Err(AppError::config(format!(
                "fat_percent_of_target must be between 0.0 and 1.0, got {}",
                self.fat_percent_of_target
            )));
        }
        Ok(())
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 2.0,
            fat_percent_of_target: 0.25,
        }
    }
}

/// Share of the daily calorie target assigned to each meal slot
///
/// The four weights must sum to 1.0 so the slot sub-targets partition the
/// daily target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotWeightsConfig {
    /// Breakfast share (0.25)
    pub breakfast: f64,
    /// Lunch share (0.35)
    pub lunch: f64,
    /// Dinner share (0.30)
    pub dinner: f64,
    /// Snack share (0.10)
    pub snack: f64,
}

impl SlotWeightsConfig {
    /// Tolerance for the sum-to-one check
    const SUM_EPSILON: f64 = 1e-9;

    /// Get the weight for a specific slot
    #[must_use]
    pub const fn weight_for(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snack => self.snack,
        }
    }

    /// Calorie sub-target for a slot, rounded to the nearest integer
    #[must_use]
    pub fn slot_target(&self, target_cal: u32, slot: MealSlot) -> u32 {
        (f64::from(target_cal) * self.weight_for(slot)).round() as u32
    }

    /// Validate that the weights partition the daily target
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any weight is outside 0.0-1.0 or the weights
    /// do not sum to 1.0.
    pub fn validate(&self) -> AppResult<()> {
        let weights = [
            ("breakfast", self.breakfast),
            ("lunch", self.lunch),
            ("dinner", self.dinner),
            ("snack", self.snack),
        ];

        for (name, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                return Err(AppError::config(format!(
                    "{name} weight must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        let sum = self.breakfast + self.lunch + self.dinner + self.snack;
        if (sum - 1.0).abs() > Self::SUM_EPSILON {
            return Err(AppError::config(format!(
                "slot weights must sum to 1.0, got {sum}"
            )));
        }

        Ok(())
    }
}

impl Default for SlotWeightsConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snack: 0.10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_slot_weights_sum_to_one() {
        let weights = SlotWeightsConfig::default();
        let sum = weights.breakfast + weights.lunch + weights.dinner + weights.snack;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_slot_weights_reject_bad_sum() {
        let weights = SlotWeightsConfig {
            snack: 0.2,
            ..SlotWeightsConfig::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_slot_target_rounds_to_nearest() {
        let weights = SlotWeightsConfig::default();
        // 2205 * 0.35 = 771.75 -> 772
        assert_eq!(weights.slot_target(2205, MealSlot::Lunch), 772);
        // 2205 * 0.10 = 220.5 -> 221 (round half away from zero)
        assert_eq!(weights.slot_target(2205, MealSlot::Snack), 221);
    }

    #[test]
    fn test_macro_split_rejects_fat_share_above_one() {
        let split = MacroSplitConfig {
            fat_percent_of_target: 1.5,
            ..MacroSplitConfig::default()
        };
        assert!(split.validate().is_err());
    }

    #[test]
    fn test_goal_adjustments_reject_inverted_multipliers() {
        let adjustments = GoalAdjustmentsConfig {
            lose_multiplier: 1.2,
            ..GoalAdjustmentsConfig::default()
        };
        assert!(adjustments.validate().is_err());

        let adjustments = GoalAdjustmentsConfig {
            gain_multiplier: 0.9,
            ..GoalAdjustmentsConfig::default()
        };
        assert!(adjustments.validate().is_err());
    }
}
