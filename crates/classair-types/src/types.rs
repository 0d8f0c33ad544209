//! Core types describing a classroom session.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Window aperture during the session.
///
/// # Ordering
///
/// Values are ordered by aperture: `Closed < Cracked < Open`, so a wider
/// window always has a larger [`ventilation_factor`](Self::ventilation_factor).
///
/// ```
/// use classair_types::WindowState;
///
/// assert!(WindowState::Open > WindowState::Cracked);
/// assert_eq!("cracked".parse::<WindowState>(), Ok(WindowState::Cracked));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WindowState {
    /// Window shut.
    #[default]
    Closed,
    /// Window opened a crack.
    Cracked,
    /// Window fully opened.
    Open,
}

impl WindowState {
    /// All window states, narrowest aperture first.
    pub const ALL: [WindowState; 3] = [WindowState::Closed, WindowState::Cracked, WindowState::Open];

    /// Dimensionless air-exchange coefficient for this aperture.
    #[must_use]
    pub fn ventilation_factor(&self) -> f64 {
        match self {
            WindowState::Closed => 0.1,
            WindowState::Cracked => 0.3,
            WindowState::Open => 0.6,
        }
    }

    /// Lowercase identifier, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowState::Closed => "closed",
            WindowState::Cracked => "cracked",
            WindowState::Open => "open",
        }
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowState::Closed => write!(f, "Closed"),
            WindowState::Cracked => write!(f, "Cracked open"),
            WindowState::Open => write!(f, "Fully open"),
        }
    }
}

impl FromStr for WindowState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "closed" | "shut" => Ok(WindowState::Closed),
            "cracked" | "crack" => Ok(WindowState::Cracked),
            "open" | "opened" => Ok(WindowState::Open),
            _ => Err(ParseError::UnknownWindowState(s.to_string())),
        }
    }
}

/// Heating/cooling mode during the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HvacState {
    /// No heating or cooling running.
    #[default]
    Off,
    /// Air conditioning running.
    Cooling,
    /// Heating running.
    Heating,
}

impl HvacState {
    /// All HVAC states.
    pub const ALL: [HvacState; 3] = [HvacState::Off, HvacState::Cooling, HvacState::Heating];

    /// Indoor temperature the system is holding, in °C.
    ///
    /// Returns `None` when nothing is running.
    ///
    /// ```
    /// use classair_types::HvacState;
    ///
    /// assert_eq!(HvacState::Cooling.target_temp_c(), Some(24.0));
    /// assert_eq!(HvacState::Heating.target_temp_c(), Some(22.0));
    /// assert_eq!(HvacState::Off.target_temp_c(), None);
    /// ```
    #[must_use]
    pub fn target_temp_c(&self) -> Option<f64> {
        match self {
            HvacState::Off => None,
            HvacState::Cooling => Some(24.0),
            HvacState::Heating => Some(22.0),
        }
    }

    /// Whether heating or cooling is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, HvacState::Off)
    }

    /// Lowercase identifier, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            HvacState::Off => "off",
            HvacState::Cooling => "cooling",
            HvacState::Heating => "heating",
        }
    }
}

impl fmt::Display for HvacState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HvacState::Off => write!(f, "Off"),
            HvacState::Cooling => write!(f, "Cooling"),
            HvacState::Heating => write!(f, "Heating"),
        }
    }
}

impl FromStr for HvacState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" => Ok(HvacState::Off),
            "cooling" | "cool" => Ok(HvacState::Cooling),
            "heating" | "heat" => Ok(HvacState::Heating),
            _ => Err(ParseError::UnknownHvacState(s.to_string())),
        }
    }
}

/// Default number of students.
pub const DEFAULT_STUDENTS: u32 = 30;

/// Default session length in minutes.
pub const DEFAULT_DURATION_MINUTES: u32 = 50;

/// Default floor area in m².
pub const DEFAULT_AREA_M2: f64 = 50.0;

/// Default outside temperature in °C.
pub const DEFAULT_OUTSIDE_TEMP_C: f64 = 15.0;

/// Parameters of one classroom session.
///
/// Range checks are the caller's job; see `classair_core::validation`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassroomInput {
    /// Number of students in the room.
    pub students: u32,
    /// Session length in minutes.
    pub duration_minutes: u32,
    /// Floor area in m².
    pub area_m2: f64,
    /// Window aperture.
    pub window_state: WindowState,
    /// Heating/cooling mode.
    pub hvac_state: HvacState,
    /// Outside temperature in °C.
    pub outside_temp_c: f64,
}

impl Default for ClassroomInput {
    fn default() -> Self {
        Self {
            students: DEFAULT_STUDENTS,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            area_m2: DEFAULT_AREA_M2,
            window_state: WindowState::default(),
            hvac_state: HvacState::default(),
            outside_temp_c: DEFAULT_OUTSIDE_TEMP_C,
        }
    }
}

impl ClassroomInput {
    /// Create an input with the given occupancy, length and area, window
    /// closed and HVAC off.
    #[must_use]
    pub fn new(students: u32, duration_minutes: u32, area_m2: f64) -> Self {
        Self {
            students,
            duration_minutes,
            area_m2,
            ..Self::default()
        }
    }

    /// Set the window state.
    #[must_use]
    pub fn window(mut self, window_state: WindowState) -> Self {
        self.window_state = window_state;
        self
    }

    /// Set the HVAC state.
    #[must_use]
    pub fn hvac(mut self, hvac_state: HvacState) -> Self {
        self.hvac_state = hvac_state;
        self
    }

    /// Set the outside temperature.
    #[must_use]
    pub fn outside_temp(mut self, outside_temp_c: f64) -> Self {
        self.outside_temp_c = outside_temp_c;
        self
    }
}
