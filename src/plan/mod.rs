// ABOUTME: Workout plan generation from a user profile
// ABOUTME: Pure table-driven mapping of (goal, experience, location) to a seven-day plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sevenday

//! Weekly workout plan generation.
//!
//! [`WorkoutPlanGenerator::generate`] maps a [`UserProfile`] to a
//! [`WeeklyPlan`] by pure table lookup over the catalog in
//! [`catalog`]: the goal selects the weekly structure, the location picks
//! each movement's exercise variant, and the experience tier picks the
//! set/rep dosage. The same profile always yields the identical plan; there
//! is no randomness and no hidden state. Selecting "today's" session from
//! the returned week is the caller's concern.

pub mod catalog;

use crate::errors::{AppError, AppResult};
use crate::models::{DayPlan, Exercise, UserProfile, WeeklyPlan, WEEK};
use catalog::DaySlot;
use tracing::debug;

/// Deterministic workout plan generator.
///
/// Stateless and synchronous; safe to share across threads and call
/// concurrently. Numeric profile fields are not re-validated here (the
/// onboarding flow owns input validation); the only failure mode is a
/// configuration-category error for a rule-table gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutPlanGenerator;

impl WorkoutPlanGenerator {
    /// Create a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate the full recurring week for a profile, Monday through
    /// Sunday.
    ///
    /// # Errors
    ///
    /// Returns a configuration-category [`AppError`] if the catalog has no
    /// weekly structure for the profile's goal or no movement list for a
    /// referenced session type. With the shipped tables this is
    /// unreachable; surfacing it instead of defaulting keeps a table gap
    /// from being silently masked.
    pub fn generate(&self, profile: &UserProfile) -> AppResult<WeeklyPlan> {
        debug!(
            goal = ?profile.goal,
            location = ?profile.location,
            experience = ?profile.experience,
            "generating weekly plan"
        );

        let structure = catalog::weekly_structure(profile.goal)
            .ok_or_else(|| AppError::template_missing(format!("goal {:?}", profile.goal)))?;

        let mut days = Vec::with_capacity(WEEK.len());
        for (weekday, slot) in WEEK.into_iter().zip(structure) {
            let day = match slot {
                DaySlot::Rest => DayPlan {
                    weekday,
                    is_rest: true,
                    session_type: None,
                    exercises: Vec::new(),
                },
                DaySlot::Session(session) => {
                    let movements = catalog::movements(*session).ok_or_else(|| {
                        AppError::template_missing(format!("session type {session}"))
                    })?;
                    if movements.is_empty() {
                        return Err(AppError::template_missing(format!(
                            "empty movement list for session type {session}"
                        )));
                    }
                    let exercises = movements
                        .iter()
                        .map(|movement| {
                            let dosage = movement.dosage(profile.experience);
                            Exercise {
                                name: movement.variant(profile.location).to_owned(),
                                sets: dosage.sets,
                                reps: dosage.reps.to_owned(),
                            }
                        })
                        .collect();
                    DayPlan {
                        weekday,
                        is_rest: false,
                        session_type: Some(*session),
                        exercises,
                    }
                }
            };
            days.push(day);
        }

        Ok(WeeklyPlan { days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Experience, Goal, Location};

    fn profile(goal: Goal) -> UserProfile {
        UserProfile {
            age: 30,
            height_cm: 178.0,
            weight_kg: 74.0,
            goal,
            location: Location::Gym,
            experience: Experience::Intermediate,
            onboarded: true,
        }
    }

    #[test]
    fn test_generate_returns_seven_days_monday_first() {
        let plan = WorkoutPlanGenerator::new()
            .generate(&profile(Goal::MuscleGain))
            .unwrap();
        assert_eq!(plan.days.len(), 7);
        let names: Vec<_> = plan
            .days
            .iter()
            .map(|d| crate::models::weekday_label(d.weekday))
            .collect();
        assert_eq!(
            names,
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }

    #[test]
    fn test_rest_days_have_no_session_and_no_exercises() {
        let plan = WorkoutPlanGenerator::new()
            .generate(&profile(Goal::StayHealthy))
            .unwrap();
        for day in &plan.days {
            if day.is_rest {
                assert!(day.session_type.is_none());
                assert!(day.exercises.is_empty());
            } else {
                assert!(day.session_type.is_some());
                assert!(!day.exercises.is_empty());
            }
        }
    }
}
