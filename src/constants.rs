// ABOUTME: System-wide constants and configuration values for the calorie planner
// ABOUTME: Contains energy-density constants, safety limits, and environment defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable configuration.

/// Energy-density constants used by the macro split
///
/// References:
/// - Atwater general factors: Merrill, A.L. & Watt, B.K. (1973). Energy Value
///   of Foods. USDA Agriculture Handbook No. 74.
pub mod energy {
    /// Calories per gram of protein (Atwater general factor)
    pub const CAL_PER_G_PROTEIN: f64 = 4.0;

    /// Calories per gram of carbohydrate (Atwater general factor)
    pub const CAL_PER_G_CARB: f64 = 4.0;

    /// Calories per gram of fat (Atwater general factor)
    pub const CAL_PER_G_FAT: f64 = 9.0;

    /// Hard lower bound on the daily calorie target (kcal/day)
    ///
    /// Goal-adjusted targets are clamped here no matter how aggressive the
    /// implied deficit. Sustained intakes below this level are considered
    /// very-low-calorie diets that require medical supervision.
    pub const SAFETY_FLOOR_KCAL: u32 = 1200;
}

/// Service identity for structured logging
pub mod service_names {
    /// Canonical service name
    pub const CALORIE_PLANNER: &str = "calorie-planner";
}

/// Environment-based configuration
pub mod env_config {
    use std::env;

    /// Get database `URL` from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./data/meals.db".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_constants() {
        assert!((energy::CAL_PER_G_PROTEIN - energy::CAL_PER_G_CARB).abs() < f64::EPSILON);
        assert!(energy::CAL_PER_G_FAT > energy::CAL_PER_G_PROTEIN);
        assert_eq!(energy::SAFETY_FLOOR_KCAL, 1200);
    }
}
