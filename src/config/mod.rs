// ABOUTME: Configuration module for the planning and nutrition engine
// ABOUTME: Exposes the coefficient tables behind every numeric rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sevenday

//! Engine configuration.

pub mod engine_config;

pub use engine_config::{
    ActivityFactorsConfig, BmrConfig, EngineConfig, GoalAdjustmentConfig, NutritionConfig,
    ProteinConfig,
};
