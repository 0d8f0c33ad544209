//! Heat-loss ranking and ventilation routines.
//!
//! When heating or cooling is running, opening a window trades energy for
//! fresh air. [`heat_loss`] scores that trade and [`routine`] picks a
//! ventilation schedule from a fixed table keyed on HVAC and window state.
//!
//! # Example
//!
//! ```
//! use classair_core::advisory::{HeatLossLevel, heat_loss, routine};
//! use classair_types::{HvacState, WindowState};
//!
//! let loss = heat_loss(HvacState::Cooling, WindowState::Cracked, 15.0, 50).unwrap();
//! assert_eq!(loss.index, 135.0);
//! assert_eq!(loss.level, HeatLossLevel::High);
//!
//! assert!(heat_loss(HvacState::Off, WindowState::Open, 15.0, 50).is_none());
//!
//! let r = routine(HvacState::Heating, WindowState::Cracked);
//! assert_eq!(r.text, "Hold current crack 2 min after each 25-min session");
//! ```

use core::fmt;

use serde::Serialize;

use classair_types::{HvacState, WindowState};

use crate::estimator::round_to;
use crate::thresholds::Co2Tier;

/// Heat-loss index above which loss is ranked [`HeatLossLevel::High`].
pub const HIGH_LOSS_INDEX: f64 = 100.0;

/// Heat-loss index above which loss is ranked [`HeatLossLevel::Moderate`].
pub const MODERATE_LOSS_INDEX: f64 = 50.0;

/// Ranking of a heat-loss index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HeatLossLevel {
    /// Index ≤ 50.
    Negligible,
    /// 50 < index ≤ 100.
    Moderate,
    /// Index > 100.
    High,
}

impl HeatLossLevel {
    /// Rank a heat-loss index.
    #[must_use]
    pub fn from_index(index: f64) -> Self {
        if index > HIGH_LOSS_INDEX {
            HeatLossLevel::High
        } else if index > MODERATE_LOSS_INDEX {
            HeatLossLevel::Moderate
        } else {
            HeatLossLevel::Negligible
        }
    }

    /// What the loss means for the room.
    pub fn summary(&self) -> &'static str {
        match self {
            HeatLossLevel::High => "Heating/cooling loss may be significant",
            HeatLossLevel::Moderate => "Some heating/cooling loss is expected",
            HeatLossLevel::Negligible => "Heating/cooling loss is negligible",
        }
    }

    /// What to do about it.
    pub fn recommendation(&self) -> &'static str {
        match self {
            HeatLossLevel::High => {
                "Narrow the window to a crack if possible, or ventilate in 10 minutes"
            }
            HeatLossLevel::Moderate => "Ventilate anyway if air quality is poor",
            HeatLossLevel::Negligible => "Safe to ventilate with the current window state",
        }
    }
}

impl fmt::Display for HeatLossLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeatLossLevel::High => write!(f, "high loss"),
            HeatLossLevel::Moderate => write!(f, "moderate loss"),
            HeatLossLevel::Negligible => write!(f, "negligible loss"),
        }
    }
}

/// Heat-loss score for a session with heating or cooling running.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatLoss {
    /// Indoor temperature held by the HVAC system.
    pub target_temp_c: f64,
    /// Absolute indoor/outdoor difference.
    pub temp_diff_c: f64,
    /// `temp_diff × ventilation_factor × minutes`, rounded to two decimals.
    pub index: f64,
    /// Ranking of `index`.
    pub level: HeatLossLevel,
}

/// Score the heat lost through the window over a session.
///
/// Returns `None` when HVAC is off; there is nothing to lose and the caller
/// should fall back to an air-quality-only routine.
#[must_use]
pub fn heat_loss(
    hvac: HvacState,
    window: WindowState,
    outside_temp_c: f64,
    duration_minutes: u32,
) -> Option<HeatLoss> {
    let target_temp_c = hvac.target_temp_c()?;
    let temp_diff_c = (outside_temp_c - target_temp_c).abs();
    let index = round_to(
        temp_diff_c * window.ventilation_factor() * f64::from(duration_minutes),
        2,
    );
    Some(HeatLoss {
        target_temp_c,
        temp_diff_c,
        index,
        level: HeatLossLevel::from_index(index),
    })
}

/// Why a routine was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoutineNote {
    /// HVAC off: schedule driven by air quality alone.
    AirQualityFocus,
    /// HVAC on with a fully open window, which wastes energy.
    FullOpenInefficient,
    /// HVAC on with a cracked window, the best trade-off.
    Optimal,
    /// HVAC on with the window closed: minimum airing needed.
    MinimumRequired,
}

impl RoutineNote {
    /// Explanation shown alongside the routine.
    pub fn message(&self) -> &'static str {
        match self {
            RoutineNote::AirQualityFocus => {
                "HVAC is off, so the routine targets air quality only"
            }
            RoutineNote::FullOpenInefficient => {
                "Short, intermittent airing is more efficient than a fully open window while HVAC runs"
            }
            RoutineNote::Optimal => "The current crack balances energy use and fresh air",
            RoutineNote::MinimumRequired => {
                "With the window closed, ventilate at least this often"
            }
        }
    }
}

/// Recommended ventilation schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Routine {
    /// The schedule itself.
    pub text: &'static str,
    /// Why this row of the table applies.
    pub note: RoutineNote,
}

const AIR_QUALITY_ROUTINE: Routine = Routine {
    text: "Open window 3 min every 20 min",
    note: RoutineNote::AirQualityFocus,
};

const OPEN_WINDOW_ROUTINE: Routine = Routine {
    text: "Crack window 2 min every 30 min",
    note: RoutineNote::FullOpenInefficient,
};

const CRACKED_WINDOW_ROUTINE: Routine = Routine {
    text: "Hold current crack 2 min after each 25-min session",
    note: RoutineNote::Optimal,
};

const CLOSED_WINDOW_ROUTINE: Routine = Routine {
    text: "Ventilate at least 3 min every 40 min",
    note: RoutineNote::MinimumRequired,
};

/// Pick the ventilation routine for an HVAC/window combination.
#[must_use]
pub fn routine(hvac: HvacState, window: WindowState) -> Routine {
    match (hvac, window) {
        (HvacState::Off, _) => AIR_QUALITY_ROUTINE,
        (HvacState::Cooling | HvacState::Heating, WindowState::Open) => OPEN_WINDOW_ROUTINE,
        (HvacState::Cooling | HvacState::Heating, WindowState::Cracked) => CRACKED_WINDOW_ROUTINE,
        (HvacState::Cooling | HvacState::Heating, WindowState::Closed) => CLOSED_WINDOW_ROUTINE,
    }
}

/// Everything the advisory panel shows for one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Advisory {
    /// Tier of the end-of-session concentration.
    pub tier: Co2Tier,
    /// Heat-loss score, absent when HVAC is off.
    pub heat_loss: Option<HeatLoss>,
    /// Ventilation schedule.
    pub routine: Routine,
}

/// Build the advisory for a session ending at `ppm`.
#[must_use]
pub fn advise(
    ppm: f64,
    hvac: HvacState,
    window: WindowState,
    outside_temp_c: f64,
    duration_minutes: u32,
) -> Advisory {
    Advisory {
        tier: Co2Tier::from_ppm(ppm),
        heat_loss: heat_loss(hvac, window, outside_temp_c, duration_minutes),
        routine: routine(hvac, window),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_loss_off_is_none() {
        for window in WindowState::ALL {
            assert!(heat_loss(HvacState::Off, window, -20.0, 120).is_none());
            assert!(heat_loss(HvacState::Off, window, 50.0, 10).is_none());
        }
    }

    #[test]
    fn test_heat_loss_cooling_cracked_scenario() {
        let loss = heat_loss(HvacState::Cooling, WindowState::Cracked, 15.0, 50).unwrap();
        assert_eq!(loss.target_temp_c, 24.0);
        assert_eq!(loss.temp_diff_c, 9.0);
        assert_eq!(loss.index, 135.0);
        assert_eq!(loss.level, HeatLossLevel::High);
    }

    #[test]
    fn test_heat_loss_heating_uses_22() {
        let loss = heat_loss(HvacState::Heating, WindowState::Closed, 2.0, 20).unwrap();
        assert_eq!(loss.target_temp_c, 22.0);
        assert_eq!(loss.temp_diff_c, 20.0);
        // 20 × 0.1 × 20
        assert_eq!(loss.index, 40.0);
        assert_eq!(loss.level, HeatLossLevel::Negligible);
    }

    #[test]
    fn test_heat_loss_outside_warmer_than_target() {
        let loss = heat_loss(HvacState::Cooling, WindowState::Closed, 34.0, 60).unwrap();
        assert_eq!(loss.temp_diff_c, 10.0);
        assert_eq!(loss.index, 60.0);
        assert_eq!(loss.level, HeatLossLevel::Moderate);
    }

    #[test]
    fn test_heat_loss_zero_difference() {
        let loss = heat_loss(HvacState::Heating, WindowState::Open, 22.0, 120).unwrap();
        assert_eq!(loss.index, 0.0);
        assert_eq!(loss.level, HeatLossLevel::Negligible);
    }

    #[test]
    fn test_heat_loss_level_boundaries() {
        assert_eq!(HeatLossLevel::from_index(50.0), HeatLossLevel::Negligible);
        assert_eq!(HeatLossLevel::from_index(50.01), HeatLossLevel::Moderate);
        assert_eq!(HeatLossLevel::from_index(100.0), HeatLossLevel::Moderate);
        assert_eq!(HeatLossLevel::from_index(100.01), HeatLossLevel::High);
    }

    #[test]
    fn test_heat_loss_level_text() {
        assert_eq!(HeatLossLevel::High.to_string(), "high loss");
        assert!(HeatLossLevel::High.recommendation().contains("10 minutes"));
        assert!(HeatLossLevel::Moderate.recommendation().contains("air quality"));
    }

    #[test]
    fn test_routine_table() {
        for window in WindowState::ALL {
            assert_eq!(
                routine(HvacState::Off, window).text,
                "Open window 3 min every 20 min"
            );
        }
        for hvac in [HvacState::Cooling, HvacState::Heating] {
            assert_eq!(
                routine(hvac, WindowState::Open).text,
                "Crack window 2 min every 30 min"
            );
            assert_eq!(
                routine(hvac, WindowState::Cracked).text,
                "Hold current crack 2 min after each 25-min session"
            );
            assert_eq!(
                routine(hvac, WindowState::Closed).text,
                "Ventilate at least 3 min every 40 min"
            );
        }
    }

    #[test]
    fn test_routine_notes() {
        assert_eq!(
            routine(HvacState::Off, WindowState::Open).note,
            RoutineNote::AirQualityFocus
        );
        assert_eq!(
            routine(HvacState::Heating, WindowState::Open).note,
            RoutineNote::FullOpenInefficient
        );
        assert_eq!(
            routine(HvacState::Cooling, WindowState::Cracked).note,
            RoutineNote::Optimal
        );
        assert_eq!(
            routine(HvacState::Cooling, WindowState::Closed).note,
            RoutineNote::MinimumRequired
        );
    }

    #[test]
    fn test_advise_bundles_results() {
        let advisory = advise(5901.64, HvacState::Off, WindowState::Open, 15.0, 50);
        assert_eq!(advisory.tier, Co2Tier::Danger);
        assert!(advisory.heat_loss.is_none());
        assert_eq!(advisory.routine.note, RoutineNote::AirQualityFocus);

        let advisory = advise(800.0, HvacState::Cooling, WindowState::Cracked, 15.0, 50);
        assert_eq!(advisory.tier, Co2Tier::Good);
        assert_eq!(advisory.heat_loss.map(|h| h.level), Some(HeatLossLevel::High));
    }

    #[test]
    fn test_advisory_serialization() {
        let advisory = advise(1200.0, HvacState::Off, WindowState::Closed, 10.0, 30);
        let json = serde_json::to_string(&advisory).unwrap();
        assert!(json.contains("\"tier\":\"Moderate\""));
        assert!(json.contains("\"heat_loss\":null"));
        assert!(json.contains("Open window 3 min every 20 min"));
    }
}
