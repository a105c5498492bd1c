// ABOUTME: Core data model for the planning and nutrition engine
// ABOUTME: Defines UserProfile inputs and WeeklyPlan/DietPlan outputs with serde support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sevenday

//! Engine data model.
//!
//! [`UserProfile`] is the sole input to both engine components. The outputs
//! ([`WeeklyPlan`], [`DietPlan`]) are plain immutable values; any persistence
//! or wire serialization of them is the host application's concern, which is
//! why every type here carries serde derives with the host-contract field
//! names (`heightCm`, `dayName`, `isRest`, ...).

use crate::errors::{AppError, AppResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Training goal driving both the weekly split and the calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    /// General health maintenance (no calorie adjustment)
    StayHealthy,
    /// Hypertrophy focus (caloric surplus)
    MuscleGain,
    /// Weight reduction (caloric deficit)
    FatLoss,
}

/// Where the user trains; constrains exercise selection to available equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Location {
    /// Full equipment access
    Gym,
    /// Bodyweight / no-equipment exercises only
    Home,
}

/// Training experience tier; scales set/rep dosage, never exercise choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Experience {
    /// New to structured training (2-3 sets, gentler rep targets)
    Beginner,
    /// Consistent training history (3-4 sets)
    Intermediate,
}

/// User profile, immutable once created; sole input to both engine components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Age in years, valid 1-120
    pub age: u32,
    /// Height in centimeters, strictly positive
    pub height_cm: f64,
    /// Body weight in kilograms, strictly positive
    pub weight_kg: f64,
    /// Training goal
    pub goal: Goal,
    /// Training location
    pub location: Location,
    /// Experience tier
    pub experience: Experience,
    /// Profile completeness flag set by the onboarding flow
    pub onboarded: bool,
}

impl UserProfile {
    /// Validate that every numeric field is inside its documented domain
    /// and the profile has completed onboarding.
    ///
    /// # Errors
    ///
    /// Returns a validation-category [`AppError`] naming the offending field.
    pub fn validate(&self) -> AppResult<()> {
        if !self.onboarded {
            return Err(AppError::missing_field("onboarded"));
        }
        if !(1..=120).contains(&self.age) {
            return Err(AppError::out_of_range(format!(
                "age must be between 1 and 120 years, got {}",
                self.age
            )));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "height must be a positive number of centimeters, got {}",
                self.height_cm
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "weight must be a positive number of kilograms, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

/// Session label for a non-rest day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    #[serde(rename = "Upper Body")]
    UpperBody,
    #[serde(rename = "Lower Body")]
    LowerBody,
    #[serde(rename = "Full Body")]
    FullBody,
    Cardio,
    Core,
}

impl SessionType {
    /// Human-readable session label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpperBody => "Upper Body",
            Self::LowerBody => "Lower Body",
            Self::FullBody => "Full Body",
            Self::Cardio => "Cardio",
            Self::Core => "Core",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single prescribed exercise with its set/rep dosage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name, e.g. "Push-ups"
    pub name: String,
    /// Number of sets, always positive
    pub sets: u8,
    /// Rep target; supports ranges like "8-12" and timed holds like "30s"
    pub reps: String,
}

/// One calendar day of the weekly plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Calendar weekday this plan entry belongs to
    #[serde(rename = "dayName", with = "weekday_name")]
    pub weekday: Weekday,
    /// Whether this is a scheduled rest day
    pub is_rest: bool,
    /// Session label; only meaningful when `is_rest` is false
    #[serde(rename = "type")]
    pub session_type: Option<SessionType>,
    /// Ordered exercises for the session; empty exactly when `is_rest` is true
    pub exercises: Vec<Exercise>,
}

/// A full recurring week, Monday through Sunday in fixed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Exactly 7 entries, one per weekday, Monday first
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    /// Look up the plan entry for a given weekday.
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.weekday == weekday)
    }

    /// Number of non-rest days in the week.
    #[must_use]
    pub fn active_day_count(&self) -> usize {
        self.days.iter().filter(|d| !d.is_rest).count()
    }
}

/// Daily nutrition target derived from the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    /// Daily calorie target (kcal), always positive
    pub calories: u32,
    /// Daily protein target (grams), always positive
    #[serde(rename = "protein")]
    pub protein_g: u32,
    /// Fixed-size list of meal suggestions for the goal
    pub meals: Vec<String>,
}

/// Canonical week, Monday through Sunday; the fixed output order of
/// [`WeeklyPlan`] regardless of the day the computation runs on.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name for a weekday ("Monday" .. "Sunday")
#[must_use]
pub const fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Serde adapter serializing `chrono::Weekday` as its full English name,
/// the host contract's `dayName` representation.
mod weekday_name {
    use chrono::Weekday;
    use serde::de::{self, Deserializer};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_label(*weekday))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        struct NameVisitor;

        impl de::Visitor<'_> for NameVisitor {
            type Value = Weekday;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a full English weekday name")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Weekday, E> {
                super::WEEK
                    .into_iter()
                    .find(|w| super::weekday_label(*w) == value)
                    .ok_or_else(|| E::custom(format!("unknown weekday name: {value}")))
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}
