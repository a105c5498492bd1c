// ABOUTME: Integration tests for the nutrition target calculator
// ABOUTME: Covers positivity, determinism, goal monotonicity, boundaries, and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sevenday

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sevenday::config::NutritionConfig;
use sevenday::errors::ErrorCategory;
use sevenday::models::{Experience, Goal, Location, UserProfile};
use sevenday::nutrition::meals::MEAL_COUNT;
use sevenday::NutritionCalculator;

const ALL_GOALS: [Goal; 3] = [Goal::StayHealthy, Goal::MuscleGain, Goal::FatLoss];

fn profile(goal: Goal) -> UserProfile {
    UserProfile {
        age: 25,
        height_cm: 175.0,
        weight_kg: 70.0,
        goal,
        location: Location::Home,
        experience: Experience::Beginner,
        onboarded: true,
    }
}

/// Calculator pinned to built-in defaults so expectations stay stable even
/// when the test process carries `SEVENDAY_*` overrides.
fn calculator() -> NutritionCalculator {
    NutritionCalculator::with_config(NutritionConfig::default())
}

#[test]
fn test_calories_and_protein_are_positive_for_all_goals() {
    for goal in ALL_GOALS {
        let diet = calculator().calculate(&profile(goal)).unwrap();
        assert!(diet.calories > 0, "{goal:?} produced zero calories");
        assert!(diet.protein_g > 0, "{goal:?} produced zero protein");
    }
}

#[test]
fn test_calculate_is_deterministic() {
    for goal in ALL_GOALS {
        let first = calculator().calculate(&profile(goal)).unwrap();
        let second = calculator().calculate(&profile(goal)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_goal_monotonicity_of_calories() {
    let healthy = calculator().calculate(&profile(Goal::StayHealthy)).unwrap();
    let gain = calculator().calculate(&profile(Goal::MuscleGain)).unwrap();
    let loss = calculator().calculate(&profile(Goal::FatLoss)).unwrap();
    assert!(gain.calories >= healthy.calories);
    assert!(healthy.calories >= loss.calories);
}

#[test]
fn test_reference_profile_values() {
    // BMR = 10*70 + 6.25*175 - 5*25 + 5 = 1673.75
    // StayHealthy: 1673.75 * 1.375 = 2301.40625 -> 2301 kcal, 70*1.2 = 84 g
    // FatLoss:     1673.75 * 1.55 * 0.82 = 2127.33... -> 2127 kcal, 70*1.6 = 112 g
    // MuscleGain:  1673.75 * 1.55 * 1.12 = 2905.63... -> 2906 kcal, 70*1.8 = 126 g
    let healthy = calculator().calculate(&profile(Goal::StayHealthy)).unwrap();
    assert_eq!(healthy.calories, 2301);
    assert_eq!(healthy.protein_g, 84);

    let loss = calculator().calculate(&profile(Goal::FatLoss)).unwrap();
    assert_eq!(loss.calories, 2127);
    assert_eq!(loss.protein_g, 112);

    let gain = calculator().calculate(&profile(Goal::MuscleGain)).unwrap();
    assert_eq!(gain.calories, 2906);
    assert_eq!(gain.protein_g, 126);
}

#[test]
fn test_fat_loss_stays_below_stay_healthy_baseline() {
    // The spec's reference scenario: same body stats, FatLoss vs StayHealthy.
    let baseline = calculator().calculate(&profile(Goal::StayHealthy)).unwrap();
    let cutting = calculator().calculate(&profile(Goal::FatLoss)).unwrap();
    assert!(cutting.calories < baseline.calories);
}

#[test]
fn test_age_boundaries_produce_positive_finite_targets() {
    for age in [1, 120] {
        for goal in ALL_GOALS {
            let mut p = profile(goal);
            p.age = age;
            let diet = calculator().calculate(&p).unwrap();
            assert!(diet.calories > 0, "age {age}, {goal:?}");
            assert!(diet.protein_g > 0, "age {age}, {goal:?}");
        }
    }
}

#[test]
fn test_extreme_but_valid_body_stats_do_not_overflow() {
    let mut p = profile(Goal::MuscleGain);
    p.weight_kg = 250.0;
    p.height_cm = 230.0;
    p.age = 120;
    let diet = calculator().calculate(&p).unwrap();
    assert!(diet.calories > 0);
    assert!(diet.protein_g > 0);
}

#[test]
fn test_meal_list_length_is_constant_across_goals() {
    for goal in ALL_GOALS {
        let diet = calculator().calculate(&profile(goal)).unwrap();
        assert_eq!(diet.meals.len(), MEAL_COUNT);
        assert!(diet.meals.iter().all(|m| !m.is_empty()));
    }
}

#[test]
fn test_out_of_domain_inputs_fail_with_validation_errors() {
    let cases: Vec<UserProfile> = vec![
        UserProfile { age: 0, ..profile(Goal::StayHealthy) },
        UserProfile { age: 121, ..profile(Goal::StayHealthy) },
        UserProfile { weight_kg: 0.0, ..profile(Goal::StayHealthy) },
        UserProfile { weight_kg: -70.0, ..profile(Goal::StayHealthy) },
        UserProfile { height_cm: 0.0, ..profile(Goal::StayHealthy) },
        UserProfile { height_cm: f64::NAN, ..profile(Goal::StayHealthy) },
        UserProfile { onboarded: false, ..profile(Goal::StayHealthy) },
    ];
    for case in cases {
        let err = calculator().calculate(&case).unwrap_err();
        assert_eq!(
            err.category(),
            ErrorCategory::Validation,
            "expected validation error for {case:?}"
        );
    }
}

#[test]
fn test_diet_plan_serializes_with_host_contract_field_names() {
    let diet = calculator().calculate(&profile(Goal::StayHealthy)).unwrap();
    let json = serde_json::to_value(&diet).unwrap();
    assert!(json.get("calories").is_some());
    assert!(json.get("protein").is_some());
    assert_eq!(json["meals"].as_array().unwrap().len(), MEAL_COUNT);
}

#[test]
fn test_custom_config_changes_output() {
    let mut config = NutritionConfig::default();
    config.goal_adjustments.fat_loss_deficit_pct = 25.0;
    let stricter = NutritionCalculator::with_config(config);
    let default_loss = calculator().calculate(&profile(Goal::FatLoss)).unwrap();
    let stricter_loss = stricter.calculate(&profile(Goal::FatLoss)).unwrap();
    assert!(stricter_loss.calories < default_loss.calories);
}
