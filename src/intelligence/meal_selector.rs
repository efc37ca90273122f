// ABOUTME: Nearest-match meal selection for a single meal slot
// ABOUTME: Picks the catalog record whose calories are closest to the slot target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Selector Module
//!
//! Given a calorie sub-target for one meal slot and the catalog records for
//! that slot, returns the record with the smallest absolute calorie distance
//! to the target. Pure and deterministic for a stable input ordering.

use crate::errors::{AppError, AppResult};
use crate::models::{MealRecord, MealSlot};

/// Pick the catalog record closest in calories to the slot target
///
/// Records are filtered to `slot` before selection, so a caller may pass
/// either a pre-filtered subset or the whole catalog. Ties on calorie
/// distance resolve to the first record in input order; the catalog returns
/// rows ordered by id ascending, which makes the tie-break deterministic.
///
/// # Errors
///
/// Returns `EmptyCatalogSlot` when no record matches the slot. A missing
/// slot must fail loudly — silently substituting a placeholder would corrupt
/// the assembled plan.
pub fn pick_meal_for_slot(
    slot: MealSlot,
    slot_target_kcal: u32,
    meals: &[MealRecord],
) -> AppResult<&MealRecord> {
    let mut best: Option<(&MealRecord, u32)> = None;

    for meal in meals.iter().filter(|m| m.meal_type == slot) {
        let distance = meal.calories.abs_diff(slot_target_kcal);
        // Strict comparison keeps the first record on equal distance
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((meal, distance)),
        }
    }

    best.map(|(meal, _)| meal)
        .ok_or_else(|| AppError::empty_catalog_slot(slot.as_str()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::Utc;

    fn meal(id: i64, slot: MealSlot, calories: u32) -> MealRecord {
        MealRecord {
            id,
            name: format!("meal-{id}"),
            meal_type: slot,
            calories,
            protein_g: 10.0,
            carbs_g: 20.0,
            fat_g: 5.0,
            tags: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_picks_closest_by_absolute_distance() {
        let meals = vec![
            meal(1, MealSlot::Breakfast, 350),
            meal(2, MealSlot::Breakfast, 280),
        ];
        let picked = pick_meal_for_slot(MealSlot::Breakfast, 300, &meals).unwrap();
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn test_filters_to_requested_slot() {
        let meals = vec![
            meal(1, MealSlot::Lunch, 300),
            meal(2, MealSlot::Breakfast, 500),
        ];
        let picked = pick_meal_for_slot(MealSlot::Breakfast, 300, &meals).unwrap();
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn test_tie_resolves_to_first_record() {
        // 250 and 350 are both 50 away from 300; the earlier row wins
        let meals = vec![
            meal(1, MealSlot::Snack, 250),
            meal(2, MealSlot::Snack, 350),
        ];
        let picked = pick_meal_for_slot(MealSlot::Snack, 300, &meals).unwrap();
        assert_eq!(picked.id, 1);
    }

    #[test]
    fn test_empty_slot_is_an_explicit_error() {
        let meals = vec![meal(1, MealSlot::Lunch, 650)];
        let error = pick_meal_for_slot(MealSlot::Dinner, 600, &meals).unwrap_err();
        assert_eq!(
            error.code,
            crate::errors::ErrorCode::EmptyCatalogSlot
        );
        assert_eq!(error.context.resource_id.as_deref(), Some("dinner"));
    }

    #[test]
    fn test_exact_match_wins() {
        let meals = vec![
            meal(1, MealSlot::Dinner, 550),
            meal(2, MealSlot::Dinner, 600),
            meal(3, MealSlot::Dinner, 650),
        ];
        let picked = pick_meal_for_slot(MealSlot::Dinner, 600, &meals).unwrap();
        assert_eq!(picked.id, 2);
    }
}
