// ABOUTME: Coefficient tables for BMR, TDEE, goal adjustment, and protein targets
// ABOUTME: Const defaults with environment-variable overrides and a process-wide singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sevenday

//! Engine coefficient configuration.
//!
//! Every numeric rule in the nutrition calculation lives here as inspectable
//! data rather than inline constants, so formulas can be tuned per
//! deployment without touching control flow. Defaults come from published
//! formulas:
//!
//! - BMR: Mifflin, M.D., et al. (1990). A new predictive equation for
//!   resting energy expenditure. *American Journal of Clinical Nutrition*,
//!   51(2), 241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - Activity factors: `McArdle` et al. (2010), Exercise Physiology.
//! - Protein ranges: Phillips & Van Loon (2011).
//!   <https://doi.org/10.1080/02640414.2011.619204>
//!
//! Overrides are read once from `SEVENDAY_*` environment variables; a value
//! that fails to parse is logged and ignored in favor of the default.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::warn;

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Nutrition coefficient tables
    pub nutrition: NutritionConfig,
}

/// Nutrition calculation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    pub bmr: BmrConfig,
    pub activity_factors: ActivityFactorsConfig,
    pub goal_adjustments: GoalAdjustmentConfig,
    pub protein: ProteinConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub age_coef: f64,
    /// Formula constant (+5.0). The profile carries no gender field, so the
    /// equation's male reference constant is used as a single configurable
    /// baseline.
    pub reference_constant: f64,
    /// Safety floor for BMR output (1000 kcal/day)
    pub floor_kcal: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

/// Goal-based calorie adjustment percentages applied on top of TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Surplus for muscle gain, percent of TDEE (12.0)
    pub muscle_gain_surplus_pct: f64,
    /// Deficit for fat loss, percent of TDEE (18.0)
    pub fat_loss_deficit_pct: f64,
}

/// Protein targets in grams per kilogram bodyweight, keyed by goal
///
/// Reference: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinConfig {
    /// General health maintenance: 1.2 g/kg
    pub stay_healthy_g_per_kg: f64,
    /// Fat loss (muscle preservation in a deficit): 1.6 g/kg
    pub fat_loss_g_per_kg: f64,
    /// Muscle gain: 1.8 g/kg
    pub muscle_gain_g_per_kg: f64,
}

/// Process-wide configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Get the global configuration, loading it from the environment on
    /// first access.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(Self::from_env)
    }

    /// Build a configuration from built-in defaults with `SEVENDAY_*`
    /// environment overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let bmr = &mut config.nutrition.bmr;
        load_env_f64("SEVENDAY_BMR_WEIGHT_COEF", &mut bmr.weight_coef);
        load_env_f64("SEVENDAY_BMR_HEIGHT_COEF", &mut bmr.height_coef);
        load_env_f64("SEVENDAY_BMR_AGE_COEF", &mut bmr.age_coef);
        load_env_f64("SEVENDAY_BMR_REFERENCE_CONSTANT", &mut bmr.reference_constant);
        load_env_f64("SEVENDAY_BMR_FLOOR_KCAL", &mut bmr.floor_kcal);

        let adjust = &mut config.nutrition.goal_adjustments;
        load_env_f64(
            "SEVENDAY_MUSCLE_GAIN_SURPLUS_PCT",
            &mut adjust.muscle_gain_surplus_pct,
        );
        load_env_f64(
            "SEVENDAY_FAT_LOSS_DEFICIT_PCT",
            &mut adjust.fat_loss_deficit_pct,
        );

        let protein = &mut config.nutrition.protein;
        load_env_f64(
            "SEVENDAY_PROTEIN_STAY_HEALTHY_G_PER_KG",
            &mut protein.stay_healthy_g_per_kg,
        );
        load_env_f64(
            "SEVENDAY_PROTEIN_FAT_LOSS_G_PER_KG",
            &mut protein.fat_loss_g_per_kg,
        );
        load_env_f64(
            "SEVENDAY_PROTEIN_MUSCLE_GAIN_G_PER_KG",
            &mut protein.muscle_gain_g_per_kg,
        );

        config
    }

    /// Create default BMR configuration (Mifflin-St Jeor, Mifflin et al. 1990)
    const fn default_bmr_config() -> BmrConfig {
        BmrConfig {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            reference_constant: 5.0,
            floor_kcal: 1000.0,
        }
    }

    /// Create default activity factors (`McArdle` et al. 2010)
    const fn default_activity_factors_config() -> ActivityFactorsConfig {
        ActivityFactorsConfig {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }

    const fn default_goal_adjustment_config() -> GoalAdjustmentConfig {
        GoalAdjustmentConfig {
            muscle_gain_surplus_pct: 12.0,
            fat_loss_deficit_pct: 18.0,
        }
    }

    /// Create default protein configuration (Phillips & Van Loon 2011)
    const fn default_protein_config() -> ProteinConfig {
        ProteinConfig {
            stay_healthy_g_per_kg: 1.2,
            fat_loss_g_per_kg: 1.6,
            muscle_gain_g_per_kg: 1.8,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            nutrition: NutritionConfig::default(),
        }
    }
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            bmr: EngineConfig::default_bmr_config(),
            activity_factors: EngineConfig::default_activity_factors_config(),
            goal_adjustments: EngineConfig::default_goal_adjustment_config(),
            protein: EngineConfig::default_protein_config(),
        }
    }
}

/// Overwrite `target` with the parsed value of `key` if the variable is set
/// and parses; otherwise keep the default.
fn load_env_f64(key: &str, target: &mut f64) {
    if let Ok(raw) = std::env::var(key) {
        match raw.parse::<f64>() {
            Ok(value) => *target = value,
            Err(_) => warn!("ignoring unparseable {key}={raw}, keeping default {target}"),
        }
    }
}
