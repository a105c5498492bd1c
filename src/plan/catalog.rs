// ABOUTME: Static rule tables for weekly split templates, movements, and dosage
// ABOUTME: Lookups return Option so a table gap surfaces as a configuration error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sevenday

//! Split template and movement catalog.
//!
//! All workout planning rules live here as plain data tables searched by
//! key. Adding a goal, session type, or experience tier means adding table
//! rows, not control flow. Lookups return `Option` rather than panicking;
//! the generator turns a miss into a configuration error.
//!
//! Rest placement and session labels are keyed by [`Goal`] alone, so two
//! profiles that differ only in location or experience always share the
//! same weekly structure. Location picks the exercise variant within a
//! movement; experience picks the dosage.

use crate::models::{Experience, Goal, Location, SessionType};

/// One slot of a weekly structure: a rest day or a labelled session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySlot {
    /// Scheduled rest day, no exercises
    Rest,
    /// Active day with the given session label
    Session(SessionType),
}

/// Set/rep dosage for one movement at one experience tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dosage {
    /// Number of sets
    pub sets: u8,
    /// Rep target: a range like "8-12" or a timed hold like "30s"
    pub reps: &'static str,
}

/// A movement slot within a session: equipment and bodyweight variants plus
/// per-experience dosage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    /// Equipment-based variant prescribed for gym profiles
    pub gym: &'static str,
    /// Bodyweight variant prescribed for home profiles
    pub home: &'static str,
    /// Dosage for beginners (fewer sets, gentler targets)
    pub beginner: Dosage,
    /// Dosage for intermediates
    pub intermediate: Dosage,
}

impl Movement {
    /// Exercise name variant for a training location
    #[must_use]
    pub const fn variant(&self, location: Location) -> &'static str {
        match location {
            Location::Gym => self.gym,
            Location::Home => self.home,
        }
    }

    /// Set/rep dosage for an experience tier
    #[must_use]
    pub const fn dosage(&self, experience: Experience) -> Dosage {
        match experience {
            Experience::Beginner => self.beginner,
            Experience::Intermediate => self.intermediate,
        }
    }
}

/// Weekly structures keyed by goal, Monday first.
///
/// Muscle gain and fat loss schedule more active days than the maintenance
/// split; every row keeps at least one rest day.
static WEEKLY_STRUCTURES: &[(Goal, [DaySlot; 7])] = &[
    (
        Goal::StayHealthy,
        [
            DaySlot::Session(SessionType::FullBody),
            DaySlot::Rest,
            DaySlot::Session(SessionType::Cardio),
            DaySlot::Rest,
            DaySlot::Session(SessionType::FullBody),
            DaySlot::Session(SessionType::Core),
            DaySlot::Rest,
        ],
    ),
    (
        Goal::MuscleGain,
        [
            DaySlot::Session(SessionType::UpperBody),
            DaySlot::Session(SessionType::LowerBody),
            DaySlot::Rest,
            DaySlot::Session(SessionType::UpperBody),
            DaySlot::Session(SessionType::LowerBody),
            DaySlot::Session(SessionType::Core),
            DaySlot::Rest,
        ],
    ),
    (
        Goal::FatLoss,
        [
            DaySlot::Session(SessionType::Cardio),
            DaySlot::Session(SessionType::FullBody),
            DaySlot::Session(SessionType::Cardio),
            DaySlot::Session(SessionType::Core),
            DaySlot::Session(SessionType::Cardio),
            DaySlot::Session(SessionType::FullBody),
            DaySlot::Rest,
        ],
    ),
];

static UPPER_BODY: &[Movement] = &[
    Movement {
        gym: "Bench Press",
        home: "Push-ups",
        beginner: Dosage { sets: 3, reps: "10-12" },
        intermediate: Dosage { sets: 4, reps: "8-10" },
    },
    Movement {
        gym: "Lat Pulldown",
        home: "Towel Rows",
        beginner: Dosage { sets: 3, reps: "10-12" },
        intermediate: Dosage { sets: 4, reps: "8-10" },
    },
    Movement {
        gym: "Overhead Press",
        home: "Pike Push-ups",
        beginner: Dosage { sets: 2, reps: "10-12" },
        intermediate: Dosage { sets: 3, reps: "8-10" },
    },
    Movement {
        gym: "Barbell Curl",
        home: "Diamond Push-ups",
        beginner: Dosage { sets: 2, reps: "12-15" },
        intermediate: Dosage { sets: 3, reps: "10-12" },
    },
];

static LOWER_BODY: &[Movement] = &[
    Movement {
        gym: "Back Squat",
        home: "Bodyweight Squats",
        beginner: Dosage { sets: 3, reps: "10-12" },
        intermediate: Dosage { sets: 4, reps: "8-10" },
    },
    Movement {
        gym: "Leg Press",
        home: "Walking Lunges",
        beginner: Dosage { sets: 3, reps: "10-12" },
        intermediate: Dosage { sets: 4, reps: "10-12" },
    },
    Movement {
        gym: "Romanian Deadlift",
        home: "Glute Bridges",
        beginner: Dosage { sets: 2, reps: "12-15" },
        intermediate: Dosage { sets: 3, reps: "10-12" },
    },
    Movement {
        gym: "Standing Calf Raise",
        home: "Single-leg Calf Raises",
        beginner: Dosage { sets: 2, reps: "15-20" },
        intermediate: Dosage { sets: 3, reps: "12-15" },
    },
];

static FULL_BODY: &[Movement] = &[
    Movement {
        gym: "Deadlift",
        home: "Burpees",
        beginner: Dosage { sets: 3, reps: "8-10" },
        intermediate: Dosage { sets: 4, reps: "6-8" },
    },
    Movement {
        gym: "Dumbbell Thruster",
        home: "Jump Squats",
        beginner: Dosage { sets: 3, reps: "10-12" },
        intermediate: Dosage { sets: 4, reps: "10-12" },
    },
    Movement {
        gym: "Kettlebell Swing",
        home: "Mountain Climbers",
        beginner: Dosage { sets: 2, reps: "12-15" },
        intermediate: Dosage { sets: 3, reps: "15-20" },
    },
    Movement {
        gym: "Seated Cable Row",
        home: "Supermans",
        beginner: Dosage { sets: 2, reps: "10-12" },
        intermediate: Dosage { sets: 3, reps: "10-12" },
    },
];

static CARDIO: &[Movement] = &[
    Movement {
        gym: "Treadmill Intervals",
        home: "High Knees",
        beginner: Dosage { sets: 3, reps: "30s" },
        intermediate: Dosage { sets: 4, reps: "45s" },
    },
    Movement {
        gym: "Rowing Machine",
        home: "Jumping Jacks",
        beginner: Dosage { sets: 3, reps: "45s" },
        intermediate: Dosage { sets: 4, reps: "60s" },
    },
    Movement {
        gym: "Stationary Bike",
        home: "Skater Jumps",
        beginner: Dosage { sets: 2, reps: "60s" },
        intermediate: Dosage { sets: 3, reps: "90s" },
    },
];

// Core work is bodyweight in both locations.
static CORE: &[Movement] = &[
    Movement {
        gym: "Plank",
        home: "Plank",
        beginner: Dosage { sets: 2, reps: "30s" },
        intermediate: Dosage { sets: 3, reps: "60s" },
    },
    Movement {
        gym: "Hanging Leg Raises",
        home: "Lying Leg Raises",
        beginner: Dosage { sets: 2, reps: "10-12" },
        intermediate: Dosage { sets: 3, reps: "12-15" },
    },
    Movement {
        gym: "Cable Crunch",
        home: "Crunches",
        beginner: Dosage { sets: 2, reps: "12-15" },
        intermediate: Dosage { sets: 3, reps: "15-20" },
    },
    Movement {
        gym: "Russian Twists",
        home: "Russian Twists",
        beginner: Dosage { sets: 2, reps: "16-20" },
        intermediate: Dosage { sets: 3, reps: "20-30" },
    },
];

static SESSION_MOVEMENTS: &[(SessionType, &[Movement])] = &[
    (SessionType::UpperBody, UPPER_BODY),
    (SessionType::LowerBody, LOWER_BODY),
    (SessionType::FullBody, FULL_BODY),
    (SessionType::Cardio, CARDIO),
    (SessionType::Core, CORE),
];

/// Weekly structure for a goal, or `None` if the table has no row for it
#[must_use]
pub fn weekly_structure(goal: Goal) -> Option<&'static [DaySlot; 7]> {
    WEEKLY_STRUCTURES
        .iter()
        .find(|(g, _)| *g == goal)
        .map(|(_, days)| days)
}

/// Movement list for a session type, or `None` if the table has no row
#[must_use]
pub fn movements(session: SessionType) -> Option<&'static [Movement]> {
    SESSION_MOVEMENTS
        .iter()
        .find(|(s, _)| *s == session)
        .map(|(_, list)| *list)
}
