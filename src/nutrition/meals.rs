// ABOUTME: Fixed meal-suggestion catalog keyed by training goal
// ABOUTME: Same goal always returns the same fixed-length list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sevenday

//! Meal suggestion catalog.
//!
//! Four suggestions per goal (breakfast, lunch, dinner, snack), selected
//! deterministically. The list length is constant across goals so hosts can
//! lay out a fixed number of meal cards.

use crate::models::Goal;

/// Number of meal suggestions returned for every goal
pub const MEAL_COUNT: usize = 4;

static MEAL_CATALOG: &[(Goal, [&str; MEAL_COUNT])] = &[
    (
        Goal::StayHealthy,
        [
            "Oatmeal with berries and nuts",
            "Grilled chicken salad with olive oil",
            "Baked salmon with quinoa and vegetables",
            "Greek yogurt with honey",
        ],
    ),
    (
        Goal::MuscleGain,
        [
            "Scrambled eggs with whole-grain toast and avocado",
            "Beef and rice bowl with black beans",
            "Chicken pasta with tomato sauce",
            "Cottage cheese with banana and peanut butter",
        ],
    ),
    (
        Goal::FatLoss,
        [
            "Egg-white omelette with spinach",
            "Tuna salad with leafy greens",
            "Grilled turkey breast with steamed broccoli",
            "Apple slices with a handful of almonds",
        ],
    ),
];

/// Meal suggestions for a goal, or `None` if the catalog has no row
#[must_use]
pub fn meal_suggestions(goal: Goal) -> Option<&'static [&'static str; MEAL_COUNT]> {
    MEAL_CATALOG
        .iter()
        .find(|(g, _)| *g == goal)
        .map(|(_, meals)| meals)
}
