// ABOUTME: Meal catalog seeding utility for the calorie planner
// ABOUTME: Creates the default meal records in the database before first use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal catalog seeder for the calorie planner.
//!
//! The planner requires at least one catalog record per meal slot before it
//! can assemble a plan. Run this once against a fresh database.
//!
//! Usage:
//! ```bash
//! # Seed the default meals (uses DATABASE_URL from environment)
//! cargo run --bin seed-meals
//!
//! # Override database URL
//! cargo run --bin seed-meals -- --database-url sqlite:./data/meals.db
//!
//! # Verbose output
//! cargo run --bin seed-meals -- -v
//!
//! # Insert even when the catalog already has rows
//! cargo run --bin seed-meals -- --force
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use calorie_planner::constants::env_config;
use calorie_planner::database::Database;

#[derive(Parser)]
#[command(
    name = "seed-meals",
    about = "Calorie Planner meal catalog seeder",
    long_about = "Create the default meal records (one per slot) for the calorie planner"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Insert even when the catalog already has rows
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    if args.verbose && std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "debug");
    }
    calorie_planner::logging::init_from_env()?;

    let database_url = args
        .database_url
        .unwrap_or_else(env_config::database_url);

    info!(database_url = %database_url, "connecting to meal catalog");
    let db = Database::new(&database_url).await?;

    let existing = db.meal_count().await?;
    let inserted = db.seed_default_meals(args.force).await?;

    if inserted == 0 {
        info!(existing, "catalog already seeded; nothing to do");
        println!("Catalog already has {existing} meals; use --force to insert anyway.");
    } else {
        info!(inserted, "seeded meal catalog");
        println!("Seeded {inserted} meals.");
    }

    Ok(())
}
