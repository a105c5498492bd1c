// ABOUTME: Unified error handling for the planning and nutrition engine
// ABOUTME: Defines standard error codes split into validation and configuration categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sevenday

//! # Unified Error Handling
//!
//! Every failure the engine can produce falls into one of two categories:
//! a [`Validation`](ErrorCategory::Validation) error (the caller supplied a
//! profile value outside its defined domain) or a
//! [`Configuration`](ErrorCategory::Configuration) error (an internal rule
//! table has no entry for an otherwise valid enum combination). The engine
//! never retries and never returns partial results; a call either fully
//! succeeds or fails with one of these.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    #[serde(rename = "TEMPLATE_MISSING")]
    TemplateMissing = 6000,
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

/// Coarse error taxonomy: user-facing input problems vs internal table gaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Input profile value outside its defined domain
    Validation,
    /// No matching rule-table entry for a valid enum combination
    Configuration,
}

impl ErrorCode {
    /// Get the category this error code belongs to
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => {
                ErrorCategory::Validation
            }
            Self::TemplateMissing | Self::ConfigInvalid => ErrorCategory::Configuration,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the profile",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::TemplateMissing => "No rule-table entry matches this profile combination",
            Self::ConfigInvalid => "Engine configuration is invalid",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the category of this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Invalid input value
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its documented range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Required profile field absent or unset
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("required field not set: {}", field.into()),
        )
    }

    /// Rule table has no entry for the given lookup key
    pub fn template_missing(key: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::TemplateMissing,
            format!("no template entry for {}", key.into()),
        )
    }

    /// Engine configuration value is unusable
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Conversion from `anyhow::Error` for host-application glue code
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_category() {
        assert_eq!(
            ErrorCode::InvalidInput.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ErrorCode::ValueOutOfRange.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ErrorCode::TemplateMissing.category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_app_error_display() {
        let error = AppError::out_of_range("age must be between 1 and 120, got 0");
        let rendered = error.to_string();
        assert!(rendered.contains("outside the acceptable range"));
        assert!(rendered.contains("got 0"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::TemplateMissing).unwrap();
        assert_eq!(json, "\"TEMPLATE_MISSING\"");
    }
}
