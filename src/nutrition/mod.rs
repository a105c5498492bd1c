// ABOUTME: Daily nutrition target calculation from a user profile
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, goal-adjusted calories and protein
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sevenday

//! Nutrition target calculation.
//!
//! [`NutritionCalculator::calculate`] maps a [`UserProfile`] to a
//! [`DietPlan`] in four deterministic steps: BMR via the Mifflin-St Jeor
//! equation, TDEE via an activity multiplier, a goal-based calorie
//! adjustment, and a goal-based protein factor. Every coefficient comes
//! from [`NutritionConfig`] so the numeric truth is inspectable in one
//! place.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

pub mod meals;

use crate::config::{ActivityFactorsConfig, BmrConfig, EngineConfig, NutritionConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{DietPlan, Goal, UserProfile};
use tracing::debug;

/// Activity level for TDEE calculation (`McArdle` et al. 2010 ladder)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    /// Little/no exercise: 1.2
    Sedentary,
    /// 1-3 training days/week: 1.375
    LightlyActive,
    /// 3-5 training days/week: 1.55
    ModeratelyActive,
    /// 6-7 training days/week: 1.725
    VeryActive,
    /// Hard training twice a day: 1.9
    ExtraActive,
}

impl ActivityLevel {
    /// Activity level implied by a goal's split template volume:
    /// maintenance trains 4 days/week, the other goals 5-6.
    #[must_use]
    pub const fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::StayHealthy => Self::LightlyActive,
            Goal::MuscleGain | Goal::FatLoss => Self::ModeratelyActive,
        }
    }

    /// TDEE multiplier for this level from the config table
    #[must_use]
    pub const fn factor(self, config: &ActivityFactorsConfig) -> f64 {
        match self {
            Self::Sedentary => config.sedentary,
            Self::LightlyActive => config.lightly_active,
            Self::ModeratelyActive => config.moderately_active,
            Self::VeryActive => config.very_active,
            Self::ExtraActive => config.extra_active,
        }
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + C
///
/// The profile carries no gender field, so `C` is the single configurable
/// reference constant from [`BmrConfig`]. Output is floored at
/// `config.floor_kcal` as a safety check.
///
/// # Errors
///
/// Returns a validation-category error if weight or height is not positive.
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    config: &BmrConfig,
) -> AppResult<f64> {
    if weight_kg <= 0.0 {
        return Err(AppError::out_of_range("weight must be positive"));
    }
    if height_cm <= 0.0 {
        return Err(AppError::out_of_range("height must be positive"));
    }

    let bmr = config.weight_coef * weight_kg
        + config.height_coef * height_cm
        + config.age_coef * f64::from(age)
        + config.reference_constant;

    Ok(bmr.max(config.floor_kcal))
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity factor (`McArdle` et al. 2010)
///
/// # Errors
///
/// Returns a validation-category error if BMR is not positive.
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if bmr <= 0.0 {
        return Err(AppError::out_of_range("BMR must be positive"));
    }
    Ok(bmr * activity_level.factor(config))
}

/// Deterministic nutrition target calculator.
///
/// Stateless apart from its coefficient tables; safe to share across
/// threads and call concurrently.
#[derive(Debug, Clone)]
pub struct NutritionCalculator {
    config: NutritionConfig,
}

impl Default for NutritionCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl NutritionCalculator {
    /// Create a calculator backed by the global configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::global().nutrition.clone(),
        }
    }

    /// Create a calculator with explicit coefficient tables.
    #[must_use]
    pub const fn with_config(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Calculate the daily nutrition target for a profile.
    ///
    /// The same profile always yields the same [`DietPlan`]; calories and
    /// protein are strictly positive for every valid profile.
    ///
    /// # Errors
    ///
    /// Returns a validation-category [`AppError`] for any profile value
    /// outside its documented domain, or a configuration-category error if
    /// the meal catalog has no row for the goal.
    pub fn calculate(&self, profile: &UserProfile) -> AppResult<DietPlan> {
        profile.validate()?;

        let bmr = calculate_mifflin_st_jeor(
            profile.weight_kg,
            profile.height_cm,
            profile.age,
            &self.config.bmr,
        )?;
        let tdee = calculate_tdee(
            bmr,
            ActivityLevel::for_goal(profile.goal),
            &self.config.activity_factors,
        )?;

        let adjusted = match profile.goal {
            Goal::StayHealthy => tdee,
            Goal::MuscleGain => {
                tdee * (1.0 + self.config.goal_adjustments.muscle_gain_surplus_pct / 100.0)
            }
            Goal::FatLoss => {
                tdee * (1.0 - self.config.goal_adjustments.fat_loss_deficit_pct / 100.0)
            }
        };
        if adjusted <= 0.0 || !adjusted.is_finite() {
            return Err(AppError::config_invalid(format!(
                "goal adjustment produced a non-positive calorie target: {adjusted}"
            )));
        }

        let protein_factor = match profile.goal {
            Goal::StayHealthy => self.config.protein.stay_healthy_g_per_kg,
            Goal::MuscleGain => self.config.protein.muscle_gain_g_per_kg,
            Goal::FatLoss => self.config.protein.fat_loss_g_per_kg,
        };
        let protein = profile.weight_kg * protein_factor;
        if protein <= 0.0 || !protein.is_finite() {
            return Err(AppError::config_invalid(format!(
                "protein factor produced a non-positive target: {protein}"
            )));
        }

        let meals = meals::meal_suggestions(profile.goal)
            .ok_or_else(|| AppError::template_missing(format!("meals for goal {:?}", profile.goal)))?
            .iter()
            .map(|m| (*m).to_owned())
            .collect();

        debug!(bmr, tdee, calories = adjusted, protein, "calculated nutrition target");

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let calories = (adjusted.round() as u32).max(1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let protein_g = (protein.round() as u32).max(1);

        Ok(DietPlan {
            calories,
            protein_g,
            meals,
        })
    }
}
