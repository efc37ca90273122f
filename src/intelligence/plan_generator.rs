// ABOUTME: Day-plan assembly from slot sub-targets and the meal catalog
// ABOUTME: Splits a daily target by fixed slot weights and resolves each slot independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Day Plan Assembler Module
//!
//! Splits a daily calorie target into slot sub-targets by the configured
//! weight table and resolves each slot through the meal selector. Slots are
//! independent; processing follows the canonical order (breakfast, lunch,
//! dinner, snack) so fixtures stay reproducible.

use tracing::debug;

use crate::config::{NutritionConfig, SlotWeightsConfig};
use crate::database::MealCatalog;
use crate::errors::AppResult;
use crate::intelligence::energy_calculator::calculate_nutrition_targets;
use crate::intelligence::meal_selector::pick_meal_for_slot;
use crate::models::{BodyProfile, DayPlan, MealRecord, MealSlot, PlanSummary, Preferences};

/// Resolve one slot: compute its sub-target and pick the closest meal
async fn select_for_slot(
    slot: MealSlot,
    target_cal: u32,
    catalog: &impl MealCatalog,
    weights: &SlotWeightsConfig,
) -> AppResult<MealRecord> {
    let slot_target = weights.slot_target(target_cal, slot);
    let candidates = catalog.find_by_meal_type(slot).await?;
    let picked = pick_meal_for_slot(slot, slot_target, &candidates)?;

    debug!(
        slot = slot.as_str(),
        slot_target, meal_id = picked.id, "selected meal for slot"
    );

    Ok(picked.clone())
}

/// Assemble a one-day plan for a daily calorie target
///
/// Each slot's sub-target is `round(target_cal x weight)`; each slot is
/// resolved independently against the catalog subset for that slot.
///
/// # Errors
///
/// Propagates `EmptyCatalogSlot` from the selector and database errors from
/// the catalog lookup.
pub async fn generate_day_plan(
    target_cal: u32,
    catalog: &impl MealCatalog,
    weights: &SlotWeightsConfig,
) -> AppResult<DayPlan> {
    let breakfast = select_for_slot(MealSlot::Breakfast, target_cal, catalog, weights).await?;
    let lunch = select_for_slot(MealSlot::Lunch, target_cal, catalog, weights).await?;
    let dinner = select_for_slot(MealSlot::Dinner, target_cal, catalog, weights).await?;
    let snack = select_for_slot(MealSlot::Snack, target_cal, catalog, weights).await?;

    Ok(DayPlan {
        breakfast,
        lunch,
        dinner,
        snack,
    })
}

/// Full pipeline: validate inputs, compute targets, assemble the plan
///
/// The positivity check on body metrics lives here, at the pipeline
/// boundary — the calculation chain itself stays total.
///
/// # Errors
///
/// Returns `InvalidInput` for non-positive body metrics, `EmptyCatalogSlot`
/// when a slot has no catalog records, and database errors from catalog
/// lookups.
pub async fn generate_plan(
    profile: &BodyProfile,
    preferences: &Preferences,
    catalog: &impl MealCatalog,
    config: &NutritionConfig,
) -> AppResult<PlanSummary> {
    profile.validate()?;

    let targets = calculate_nutrition_targets(profile, preferences, config);

    debug!(
        bmr = targets.bmr,
        maintenance = targets.maintenance,
        target_calories = targets.target_calories,
        "computed nutrition targets"
    );

    let plan = generate_day_plan(targets.target_calories, catalog, &config.slot_weights).await?;

    Ok(PlanSummary { targets, plan })
}
