//! One full evaluation pass for a classroom session.

use serde::Serialize;
use tracing::debug;

use classair_types::ClassroomInput;

use crate::advisory::{Advisory, advise};
use crate::error::Result;
use crate::estimator::{Co2Series, estimate, room_volume_m3, series, total_emitted_liters};
use crate::thresholds::Co2Tier;
use crate::validation::InputValidator;

/// Everything a front end renders for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// The inputs this prediction was computed from.
    pub input: ClassroomInput,
    /// Room volume in m³.
    pub volume_m3: f64,
    /// Concentration at the end of the session.
    pub final_ppm: f64,
    /// CO₂ exhaled over the session, in litres.
    pub total_emitted_liters: f64,
    /// First minute the room reaches the Moderate tier.
    pub moderate_at_minute: Option<u32>,
    /// First minute the room reaches the Danger tier.
    pub danger_at_minute: Option<u32>,
    /// Tier, heat loss and routine.
    pub advisory: Advisory,
    /// Minute-by-minute curve.
    pub series: Co2Series,
}

impl Prediction {
    /// Evaluate `input` without range checks.
    pub fn compute(input: &ClassroomInput) -> Self {
        let final_ppm = estimate(
            input.students,
            input.duration_minutes,
            input.area_m2,
            input.window_state,
        );
        let series = series(
            input.students,
            input.duration_minutes,
            input.area_m2,
            input.window_state,
        );
        let advisory = advise(
            final_ppm,
            input.hvac_state,
            input.window_state,
            input.outside_temp_c,
            input.duration_minutes,
        );

        debug!(
            students = input.students,
            minutes = input.duration_minutes,
            area_m2 = input.area_m2,
            window = %input.window_state,
            hvac = %input.hvac_state,
            final_ppm,
            tier = %advisory.tier,
            "computed CO2 prediction"
        );

        Self {
            input: *input,
            volume_m3: room_volume_m3(input.area_m2),
            final_ppm,
            total_emitted_liters: total_emitted_liters(input.students, input.duration_minutes),
            moderate_at_minute: series.first_minute_in_tier(Co2Tier::Moderate),
            danger_at_minute: series.first_minute_in_tier(Co2Tier::Danger),
            advisory,
            series,
        }
    }

    /// Check `input` against `validator`, then evaluate it.
    pub fn compute_checked(input: &ClassroomInput, validator: &InputValidator) -> Result<Self> {
        validator.check(input)?;
        Ok(Self::compute(input))
    }

    /// Tier of the end-of-session concentration.
    pub fn tier(&self) -> Co2Tier {
        self.advisory.tier
    }
}
