//! CO₂ accumulation model and ventilation advisories for classrooms.
//!
//! This crate estimates how CO₂ builds up in a classroom over a session and
//! turns the estimate into advice: an air-quality tier, a heat-loss score
//! when heating or cooling is running, and a ventilation routine.
//!
//! # Features
//!
//! - **Estimation**: closed-form concentration after any number of minutes
//! - **Series**: minute-by-minute curve for charting
//! - **Tiers**: Good / Moderate / Danger at 1000 and 1500 ppm
//! - **Heat loss**: energy cost of the current window state under HVAC
//! - **Routines**: ventilation schedule per HVAC/window combination
//! - **Validation**: accepted parameter ranges for front ends
//!
//! Every model function is pure and synchronous. Range checks are left to the
//! caller (see [`validation`]).
//!
//! # Quick Start
//!
//! ```
//! use classair_core::{Co2Tier, Prediction};
//! use classair_types::{ClassroomInput, WindowState};
//!
//! let input = ClassroomInput::new(30, 50, 50.0).window(WindowState::Open);
//! let prediction = Prediction::compute(&input);
//!
//! assert_eq!(prediction.final_ppm, 5901.64);
//! assert_eq!(prediction.tier(), Co2Tier::Danger);
//! println!("Ventilate: {}", prediction.advisory.routine.text);
//! ```

pub mod advisory;
pub mod error;
pub mod estimator;
pub mod prediction;
pub mod thresholds;
pub mod validation;

pub use advisory::{
    Advisory, HeatLoss, HeatLossLevel, Routine, RoutineNote, advise, heat_loss, routine,
};
pub use error::{Error, Result};
pub use estimator::{
    Co2Series, SeriesPoint, estimate, room_volume_m3, series, total_emitted_liters,
};
pub use prediction::Prediction;
pub use thresholds::{Co2Tier, DANGER_PPM, MODERATE_PPM, tier};
pub use validation::{InputValidator, ValidationResult, ValidationWarning, ValidatorConfig};

// Re-export from classair-types
pub use classair_types::{ClassroomInput, HvacState, ParseError, WindowState};
