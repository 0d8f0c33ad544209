//! CO₂ tier classification.
//!
//! Concentrations are sorted into three tiers with fixed lower bounds:
//!
//! | Tier | Range |
//! |------|-------|
//! | Good | < 1000 ppm |
//! | Moderate | 1000 – 1499.99 ppm |
//! | Danger | ≥ 1500 ppm |
//!
//! # Example
//!
//! ```
//! use classair_core::{Co2Tier, tier};
//!
//! assert_eq!(tier(999.99), Co2Tier::Good);
//! assert_eq!(tier(1000.0), Co2Tier::Moderate);
//! assert_eq!(tier(1500.0), Co2Tier::Danger);
//!
//! println!("{}", tier(1200.0).action());
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

/// Lowest concentration classified as [`Co2Tier::Moderate`].
pub const MODERATE_PPM: f64 = 1000.0;

/// Lowest concentration classified as [`Co2Tier::Danger`].
pub const DANGER_PPM: f64 = 1500.0;

/// Air-quality tier for a CO₂ concentration.
///
/// Tiers are ordered by severity: `Good < Moderate < Danger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Co2Tier {
    /// Below the ventilation guideline.
    Good,
    /// Ventilation recommended.
    Moderate,
    /// Ventilate immediately.
    Danger,
}

impl Co2Tier {
    /// Classify a concentration in ppm.
    #[must_use]
    pub fn from_ppm(ppm: f64) -> Self {
        if ppm >= DANGER_PPM {
            Co2Tier::Danger
        } else if ppm >= MODERATE_PPM {
            Co2Tier::Moderate
        } else {
            Co2Tier::Good
        }
    }

    /// Lowest ppm value in this tier, `None` for [`Co2Tier::Good`].
    #[must_use]
    pub fn lower_bound_ppm(&self) -> Option<f64> {
        match self {
            Co2Tier::Good => None,
            Co2Tier::Moderate => Some(MODERATE_PPM),
            Co2Tier::Danger => Some(DANGER_PPM),
        }
    }

    /// Get a human-readable description of the tier.
    pub fn description(&self) -> &'static str {
        match self {
            Co2Tier::Good => "Air quality is good",
            Co2Tier::Moderate => "Moderate air quality",
            Co2Tier::Danger => "Dangerous CO2 level",
        }
    }

    /// Get the suggested action for this tier.
    pub fn action(&self) -> &'static str {
        match self {
            Co2Tier::Good => "Keep the current state",
            Co2Tier::Moderate => "Ventilation is recommended",
            Co2Tier::Danger => "Open the windows and ventilate right now",
        }
    }
}

impl fmt::Display for Co2Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Co2Tier::Good => write!(f, "Good"),
            Co2Tier::Moderate => write!(f, "Moderate"),
            Co2Tier::Danger => write!(f, "Danger"),
        }
    }
}

/// Classify a concentration in ppm.
#[must_use]
pub fn tier(ppm: f64) -> Co2Tier {
    Co2Tier::from_ppm(ppm)
}
