// ABOUTME: Demo CLI for the sevenday engine
// ABOUTME: Builds a profile from flags and prints the weekly plan and diet target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sevenday

//! Demo CLI for the sevenday engine.
//!
//! Usage:
//! ```bash
//! # Human-readable plan for a profile
//! cargo run --bin sevenday-cli -- --age 25 --height-cm 175 --weight-kg 70 \
//!     --goal fat-loss --location home --experience beginner
//!
//! # JSON output for piping into other tools
//! cargo run --bin sevenday-cli -- --age 25 --height-cm 175 --weight-kg 70 \
//!     --goal muscle-gain --location gym --experience intermediate --json
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use sevenday::models::{weekday_label, Experience, Goal, Location, UserProfile};
use sevenday::{NutritionCalculator, WorkoutPlanGenerator};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GoalArg {
    StayHealthy,
    MuscleGain,
    FatLoss,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocationArg {
    Gym,
    Home,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExperienceArg {
    Beginner,
    Intermediate,
}

impl From<GoalArg> for Goal {
    fn from(arg: GoalArg) -> Self {
        match arg {
            GoalArg::StayHealthy => Self::StayHealthy,
            GoalArg::MuscleGain => Self::MuscleGain,
            GoalArg::FatLoss => Self::FatLoss,
        }
    }
}

impl From<LocationArg> for Location {
    fn from(arg: LocationArg) -> Self {
        match arg {
            LocationArg::Gym => Self::Gym,
            LocationArg::Home => Self::Home,
        }
    }
}

impl From<ExperienceArg> for Experience {
    fn from(arg: ExperienceArg) -> Self {
        match arg {
            ExperienceArg::Beginner => Self::Beginner,
            ExperienceArg::Intermediate => Self::Intermediate,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "sevenday-cli",
    about = "Sevenday planning engine demo",
    long_about = "Derive a weekly workout plan and daily nutrition target from a profile"
)]
struct Cli {
    /// Age in years (1-120)
    #[arg(long)]
    age: u32,

    /// Height in centimeters
    #[arg(long)]
    height_cm: f64,

    /// Body weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// Training goal
    #[arg(long, value_enum)]
    goal: GoalArg,

    /// Training location
    #[arg(long, value_enum)]
    location: LocationArg,

    /// Experience tier
    #[arg(long, value_enum)]
    experience: ExperienceArg,

    /// Emit the plan and diet as a single JSON document
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let profile = UserProfile {
        age: cli.age,
        height_cm: cli.height_cm,
        weight_kg: cli.weight_kg,
        goal: cli.goal.into(),
        location: cli.location.into(),
        experience: cli.experience.into(),
        onboarded: true,
    };

    let plan = WorkoutPlanGenerator::new().generate(&profile)?;
    let diet = NutritionCalculator::new().calculate(&profile)?;

    if cli.json {
        let document = serde_json::json!({
            "profile": profile,
            "weeklyPlan": plan,
            "dietPlan": diet,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    println!("Weekly plan");
    println!("-----------");
    for day in &plan.days {
        let label = weekday_label(day.weekday);
        if day.is_rest {
            println!("{label:<10} Rest");
        } else {
            let session = day
                .session_type
                .map_or("Session", sevenday::models::SessionType::label);
            println!("{label:<10} {session}");
            for exercise in &day.exercises {
                println!("           - {} ({} x {})", exercise.name, exercise.sets, exercise.reps);
            }
        }
    }

    println!();
    println!("Daily nutrition target");
    println!("----------------------");
    println!("Calories: {} kcal", diet.calories);
    println!("Protein:  {} g", diet.protein_g);
    println!("Meal ideas:");
    for meal in &diet.meals {
        println!("  - {meal}");
    }

    Ok(())
}
