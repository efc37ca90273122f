// ABOUTME: One-shot plan computation CLI for the calorie planner
// ABOUTME: Computes nutrition targets and a day plan from body metrics on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Command-line front end for the calorie planner.
//!
//! Usage:
//! ```bash
//! # Human-readable plan
//! planner-cli --weight-kg 70 --height-cm 175 --age 30 \
//!     --sex male --activity moderate --goal lose
//!
//! # JSON output for scripting
//! planner-cli --weight-kg 70 --height-cm 175 --age 30 --json
//! ```
//!
//! Sex, activity, and goal accept free-form strings with the planner's
//! tolerant fallbacks (unknown sex averages the formulas, unknown activity
//! means sedentary, unknown goal means maintain). The catalog must be seeded
//! first (`seed-meals`).

use anyhow::{Context, Result};
use clap::Parser;

use calorie_planner::config::NutritionConfig;
use calorie_planner::constants::env_config;
use calorie_planner::database::Database;
use calorie_planner::intelligence::generate_plan;
use calorie_planner::models::{ActivityLevel, BodyProfile, Goal, Preferences, Sex};

#[derive(Parser)]
#[command(
    name = "planner-cli",
    about = "Calorie Planner command line",
    long_about = "Compute daily nutrition targets and a one-day meal plan from body metrics."
)]
struct Cli {
    /// Body weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// Height in centimeters
    #[arg(long)]
    height_cm: f64,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Biological sex (male/female; anything else averages the formulas)
    #[arg(long, default_value = "")]
    sex: String,

    /// Activity level (sedentary/light/moderate/very/extreme)
    #[arg(long, default_value = "sedentary")]
    activity: String,

    /// Goal (lose/maintain/gain)
    #[arg(long, default_value = "maintain")]
    goal: String,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if args.verbose && std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "debug");
    }
    calorie_planner::logging::init_from_env()?;

    let profile = BodyProfile {
        sex: Sex::parse(&args.sex),
        weight_kg: args.weight_kg,
        height_cm: args.height_cm,
        age: args.age,
    };
    let preferences = Preferences {
        activity: ActivityLevel::parse(&args.activity),
        goal: Goal::parse(&args.goal),
    };

    let database_url = args
        .database_url
        .unwrap_or_else(env_config::database_url);
    let db = Database::new(&database_url)
        .await
        .context("failed to open meal catalog")?;

    let config = NutritionConfig::default();
    let summary = generate_plan(&profile, &preferences, &db, &config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let targets = &summary.targets;
    println!("BMR:          {:.1} kcal/day", targets.bmr);
    println!("Maintenance:  {:.1} kcal/day", targets.maintenance);
    println!("Target:       {} kcal/day", targets.target_calories);
    println!(
        "Macros:       {:.1} g protein / {:.1} g fat / {:.1} g carbs",
        targets.macros.protein_g, targets.macros.fat_g, targets.macros.carbs_g
    );
    println!();
    for (slot, meal) in summary.plan.iter() {
        println!(
            "{:<10} {} ({} kcal, {:.0}p/{:.0}c/{:.0}f)",
            slot.as_str(),
            meal.name,
            meal.calories,
            meal.protein_g,
            meal.carbs_g,
            meal.fat_g
        );
    }

    Ok(())
}
