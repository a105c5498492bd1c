// ABOUTME: Library entry point for the sevenday planning and nutrition engine
// ABOUTME: Exposes pure, deterministic profile-to-plan and profile-to-diet computations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sevenday

#![deny(unsafe_code)]

//! # Sevenday
//!
//! A personal fitness planning engine: given a user's physical profile and
//! goals, deterministically derive a recurring seven-day workout schedule
//! and a daily nutrition target.
//!
//! Both computations are pure functions of a [`UserProfile`](models::UserProfile):
//! no I/O, no randomness, no shared state. They may be called concurrently
//! from any number of threads. Everything around them — onboarding forms,
//! persistence, authentication, presentation, and any external coaching
//! message service — belongs to the host application.
//!
//! ## Example
//!
//! ```rust
//! use sevenday::models::{Experience, Goal, Location, UserProfile};
//! use sevenday::nutrition::NutritionCalculator;
//! use sevenday::plan::WorkoutPlanGenerator;
//!
//! let profile = UserProfile {
//!     age: 25,
//!     height_cm: 175.0,
//!     weight_kg: 70.0,
//!     goal: Goal::FatLoss,
//!     location: Location::Home,
//!     experience: Experience::Beginner,
//!     onboarded: true,
//! };
//!
//! let plan = WorkoutPlanGenerator::new().generate(&profile)?;
//! assert_eq!(plan.days.len(), 7);
//!
//! let diet = NutritionCalculator::new().calculate(&profile)?;
//! assert!(diet.calories > 0);
//! # Ok::<(), sevenday::errors::AppError>(())
//! ```

/// Engine coefficient configuration with environment overrides
pub mod config;

/// Unified error handling with validation/configuration categories
pub mod errors;

/// Profile inputs and plan/diet outputs
pub mod models;

/// Daily nutrition target calculation
pub mod nutrition;

/// Weekly workout plan generation
pub mod plan;

pub use errors::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use nutrition::NutritionCalculator;
pub use plan::WorkoutPlanGenerator;
