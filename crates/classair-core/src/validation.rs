//! Input range checks for classroom parameters.
//!
//! The model functions in [`crate::estimator`] and [`crate::advisory`] accept
//! any value and never fail. Front ends run inputs through an
//! [`InputValidator`] first so that only the documented ranges reach the
//! model.
//!
//! # Example
//!
//! ```
//! use classair_core::InputValidator;
//! use classair_types::ClassroomInput;
//!
//! let validator = InputValidator::default();
//!
//! let result = validator.validate(&ClassroomInput::default());
//! assert!(result.is_valid);
//!
//! let result = validator.validate(&ClassroomInput::new(0, 50, 50.0));
//! assert!(!result.is_valid);
//! ```

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use classair_types::ClassroomInput;

use crate::error::{Error, Result};

/// A single out-of-range parameter.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new warning types
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub enum ValidationWarning {
    /// Student count outside the accepted range.
    StudentsOutOfRange { value: u32, min: u32, max: u32 },
    /// Session length outside the accepted range.
    DurationOutOfRange { value: u32, min: u32, max: u32 },
    /// Floor area outside the accepted range.
    AreaOutOfRange { value: f64, min: f64, max: f64 },
    /// Outside temperature outside the accepted range.
    TemperatureOutOfRange { value: f64, min: f64, max: f64 },
    /// A numeric field is NaN or infinite.
    NotFinite { field: &'static str },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::StudentsOutOfRange { value, min, max } => {
                write!(f, "{} students is outside {}-{}", value, min, max)
            }
            ValidationWarning::DurationOutOfRange { value, min, max } => {
                write!(f, "Duration {} min is outside {}-{} min", value, min, max)
            }
            ValidationWarning::AreaOutOfRange { value, min, max } => {
                write!(f, "Area {} m² is outside {}-{} m²", value, min, max)
            }
            ValidationWarning::TemperatureOutOfRange { value, min, max } => {
                write!(
                    f,
                    "Outside temperature {}°C is outside {}-{}°C",
                    value, min, max
                )
            }
            ValidationWarning::NotFinite { field } => {
                write!(f, "{} must be a finite number", field)
            }
        }
    }
}

/// Result of validating an input.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the input is within every range.
    pub is_valid: bool,
    /// Every violated range.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create a successful validation result with no warnings.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            warnings: Vec::new(),
        }
    }

    /// Create an invalid result with the given warnings.
    pub fn invalid(warnings: Vec<ValidationWarning>) -> Self {
        Self {
            is_valid: false,
            warnings,
        }
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Convert into a `Result`, failing with [`Error::InvalidInput`].
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(Error::InvalidInput(self.warnings))
        }
    }
}

/// Accepted parameter ranges (all inclusive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Student count.
    pub students: RangeInclusive<u32>,
    /// Session length in minutes.
    pub duration_minutes: RangeInclusive<u32>,
    /// Floor area in m².
    pub area_m2: RangeInclusive<f64>,
    /// Outside temperature in °C.
    pub outside_temp_c: RangeInclusive<f64>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            students: 1..=50,
            duration_minutes: 10..=120,
            area_m2: 10.0..=100.0,
            outside_temp_c: -20.0..=50.0,
        }
    }
}

impl ValidatorConfig {
    /// Create new validator config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the student range.
    #[must_use]
    pub fn students(mut self, min: u32, max: u32) -> Self {
        self.students = min..=max;
        self
    }

    /// Set the session length range.
    #[must_use]
    pub fn duration_minutes(mut self, min: u32, max: u32) -> Self {
        self.duration_minutes = min..=max;
        self
    }

    /// Set the floor area range.
    #[must_use]
    pub fn area_m2(mut self, min: f64, max: f64) -> Self {
        self.area_m2 = min..=max;
        self
    }

    /// Set the outside temperature range.
    #[must_use]
    pub fn outside_temp_c(mut self, min: f64, max: f64) -> Self {
        self.outside_temp_c = min..=max;
        self
    }
}

/// Checks classroom inputs against a [`ValidatorConfig`].
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    config: ValidatorConfig,
}

impl InputValidator {
    /// Create a validator with the given ranges.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Collect every range violation in `input`.
    pub fn validate(&self, input: &ClassroomInput) -> ValidationResult {
        let cfg = &self.config;
        let mut warnings = Vec::new();

        if !cfg.students.contains(&input.students) {
            warnings.push(ValidationWarning::StudentsOutOfRange {
                value: input.students,
                min: *cfg.students.start(),
                max: *cfg.students.end(),
            });
        }

        if !cfg.duration_minutes.contains(&input.duration_minutes) {
            warnings.push(ValidationWarning::DurationOutOfRange {
                value: input.duration_minutes,
                min: *cfg.duration_minutes.start(),
                max: *cfg.duration_minutes.end(),
            });
        }

        if !input.area_m2.is_finite() {
            warnings.push(ValidationWarning::NotFinite { field: "area_m2" });
        } else if !cfg.area_m2.contains(&input.area_m2) {
            warnings.push(ValidationWarning::AreaOutOfRange {
                value: input.area_m2,
                min: *cfg.area_m2.start(),
                max: *cfg.area_m2.end(),
            });
        }

        if !input.outside_temp_c.is_finite() {
            warnings.push(ValidationWarning::NotFinite {
                field: "outside_temp_c",
            });
        } else if !cfg.outside_temp_c.contains(&input.outside_temp_c) {
            warnings.push(ValidationWarning::TemperatureOutOfRange {
                value: input.outside_temp_c,
                min: *cfg.outside_temp_c.start(),
                max: *cfg.outside_temp_c.end(),
            });
        }

        if warnings.is_empty() {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(warnings)
        }
    }

    /// Validate and fail with [`Error::InvalidInput`] on any violation.
    pub fn check(&self, input: &ClassroomInput) -> Result<()> {
        self.validate(input).into_result()
    }
}
