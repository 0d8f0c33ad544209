//! Closed-form CO₂ accumulation model.
//!
//! Exhaled CO₂ is assumed to accumulate linearly over the session and to be
//! diluted by the room volume and the window's ventilation factor:
//!
//! ```text
//! volume    = area × 2.5
//! generated = students × 0.3 × minutes              (litres)
//! ppm       = generated / (volume × 1000) × 10⁶ / (factor + 0.01)
//! ```
//!
//! None of these functions check their inputs. Front ends are expected to
//! enforce the documented ranges first (see [`crate::validation`]).
//!
//! # Example
//!
//! ```
//! use classair_core::estimator::{estimate, series};
//! use classair_types::WindowState;
//!
//! let ppm = estimate(30, 50, 50.0, WindowState::Open);
//! assert_eq!(ppm, 5901.64);
//!
//! let curve = series(30, 50, 50.0, WindowState::Open);
//! assert_eq!(curve.len(), 50);
//! assert_eq!(curve.final_ppm(), Some(ppm));
//! ```

use serde::Serialize;

use classair_types::WindowState;

use crate::thresholds::Co2Tier;

/// CO₂ exhaled per student, in litres per minute.
pub const GENERATION_RATE_L_PER_MIN: f64 = 0.3;

/// Assumed ceiling height in metres.
pub const CEILING_HEIGHT_M: f64 = 2.5;

/// Added to the ventilation factor so the divisor never reaches zero.
pub const VENTILATION_EPSILON: f64 = 0.01;

/// Round `value` to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Room volume in m³ for a floor area in m².
#[must_use]
pub fn room_volume_m3(area_m2: f64) -> f64 {
    area_m2 * CEILING_HEIGHT_M
}

/// Estimated CO₂ concentration in ppm after `elapsed_minutes`.
///
/// The result is rounded to two decimals.
#[must_use]
pub fn estimate(students: u32, elapsed_minutes: u32, area_m2: f64, window: WindowState) -> f64 {
    let volume = room_volume_m3(area_m2);
    let generated_l =
        f64::from(students) * GENERATION_RATE_L_PER_MIN * f64::from(elapsed_minutes);
    let divisor = window.ventilation_factor() + VENTILATION_EPSILON;
    let ppm = (generated_l / (volume * 1000.0)) * 1_000_000.0 / divisor;
    round_to(ppm, 2)
}

/// Total CO₂ exhaled over a session, in litres, rounded to one decimal.
#[must_use]
pub fn total_emitted_liters(students: u32, duration_minutes: u32) -> f64 {
    let per_minute = f64::from(students) * GENERATION_RATE_L_PER_MIN;
    round_to(per_minute * f64::from(duration_minutes), 1)
}

/// One sample of a [`Co2Series`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Minutes since the start of the session (1-based).
    pub minute: u32,
    /// Estimated concentration at that minute.
    pub ppm: f64,
}

/// Minute-by-minute concentration curve for one session.
///
/// Minutes run from 1 to the session length with no gaps, and `ppm` never
/// decreases along the series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Co2Series {
    points: Vec<SeriesPoint>,
}

impl Co2Series {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no samples (zero-length session).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples in minute order.
    #[must_use]
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Iterate over the samples.
    pub fn iter(&self) -> std::slice::Iter<'_, SeriesPoint> {
        self.points.iter()
    }

    /// Concentration at the last minute.
    #[must_use]
    pub fn final_ppm(&self) -> Option<f64> {
        self.points.last().map(|p| p.ppm)
    }

    /// Highest concentration in the series.
    ///
    /// Equal to [`final_ppm`](Self::final_ppm) for this model, since the
    /// curve is non-decreasing.
    #[must_use]
    pub fn peak(&self) -> Option<f64> {
        self.points.iter().map(|p| p.ppm).reduce(f64::max)
    }

    /// First minute whose concentration is at or above `ppm`.
    #[must_use]
    pub fn first_minute_at_or_above(&self, ppm: f64) -> Option<u32> {
        self.points.iter().find(|p| p.ppm >= ppm).map(|p| p.minute)
    }

    /// First minute classified as `tier` or worse.
    ///
    /// `Co2Tier::Good` always matches the first sample.
    #[must_use]
    pub fn first_minute_in_tier(&self, tier: Co2Tier) -> Option<u32> {
        match tier.lower_bound_ppm() {
            Some(bound) => self.first_minute_at_or_above(bound),
            None => self.points.first().map(|p| p.minute),
        }
    }
}

impl<'a> IntoIterator for &'a Co2Series {
    type Item = &'a SeriesPoint;
    type IntoIter = std::slice::Iter<'a, SeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Concentration curve sampled at every minute `1..=duration_minutes`.
///
/// Each sample is exactly `estimate(students, minute, area_m2, window)`.
#[must_use]
pub fn series(
    students: u32,
    duration_minutes: u32,
    area_m2: f64,
    window: WindowState,
) -> Co2Series {
    let points = (1..=duration_minutes)
        .map(|minute| SeriesPoint {
            minute,
            ppm: estimate(students, minute, area_m2, window),
        })
        .collect();
    Co2Series { points }
}
