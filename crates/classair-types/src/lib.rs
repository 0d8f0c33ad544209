//! Shared types for the classair classroom CO₂ estimator.
//!
//! This crate holds the plain data that describes a classroom session. It has
//! no model logic, so front ends and the estimator core can both depend on it.
//!
//! # Example
//!
//! ```
//! use classair_types::{ClassroomInput, HvacState, WindowState};
//!
//! let input = ClassroomInput::new(28, 45, 60.0)
//!     .window(WindowState::Cracked)
//!     .hvac(HvacState::Heating)
//!     .outside_temp(3.0);
//!
//! assert_eq!(input.window_state.ventilation_factor(), 0.3);
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{
    ClassroomInput, DEFAULT_AREA_M2, DEFAULT_DURATION_MINUTES, DEFAULT_OUTSIDE_TEMP_C,
    DEFAULT_STUDENTS, HvacState, WindowState,
};

#[cfg(test)]
mod tests {
    use super::*;

    // --- WindowState tests ---

    #[test]
    fn test_ventilation_factors() {
        assert_eq!(WindowState::Closed.ventilation_factor(), 0.1);
        assert_eq!(WindowState::Cracked.ventilation_factor(), 0.3);
        assert_eq!(WindowState::Open.ventilation_factor(), 0.6);
    }

    #[test]
    fn test_ventilation_factor_grows_with_aperture() {
        let factors: Vec<f64> = WindowState::ALL
            .iter()
            .map(|w| w.ventilation_factor())
            .collect();
        assert!(factors.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(factors.iter().all(|f| *f > 0.0));
    }

    #[test]
    fn test_window_state_from_str() {
        assert_eq!("closed".parse::<WindowState>(), Ok(WindowState::Closed));
        assert_eq!("CRACKED".parse::<WindowState>(), Ok(WindowState::Cracked));
        assert_eq!(" open ".parse::<WindowState>(), Ok(WindowState::Open));
        assert_eq!("crack".parse::<WindowState>(), Ok(WindowState::Cracked));
        assert_eq!("shut".parse::<WindowState>(), Ok(WindowState::Closed));
    }

    #[test]
    fn test_window_state_from_str_unknown() {
        let err = "ajar".parse::<WindowState>().unwrap_err();
        assert_eq!(err, ParseError::UnknownWindowState("ajar".to_string()));
        assert!(err.to_string().contains("ajar"));
    }

    #[test]
    fn test_window_state_as_str_parses_back() {
        for state in WindowState::ALL {
            assert_eq!(state.as_str().parse::<WindowState>(), Ok(state));
        }
    }

    #[test]
    fn test_window_state_display() {
        assert_eq!(WindowState::Closed.to_string(), "Closed");
        assert_eq!(WindowState::Cracked.to_string(), "Cracked open");
        assert_eq!(WindowState::Open.to_string(), "Fully open");
    }

    // --- HvacState tests ---

    #[test]
    fn test_hvac_from_str() {
        assert_eq!("off".parse::<HvacState>(), Ok(HvacState::Off));
        assert_eq!("none".parse::<HvacState>(), Ok(HvacState::Off));
        assert_eq!("Cooling".parse::<HvacState>(), Ok(HvacState::Cooling));
        assert_eq!("heat".parse::<HvacState>(), Ok(HvacState::Heating));
        assert!(matches!(
            "fan".parse::<HvacState>(),
            Err(ParseError::UnknownHvacState(_))
        ));
    }

    #[test]
    fn test_hvac_is_active() {
        assert!(!HvacState::Off.is_active());
        assert!(HvacState::Cooling.is_active());
        assert!(HvacState::Heating.is_active());
    }

    #[test]
    fn test_hvac_target_temps() {
        assert_eq!(HvacState::Off.target_temp_c(), None);
        assert_eq!(HvacState::Cooling.target_temp_c(), Some(24.0));
        assert_eq!(HvacState::Heating.target_temp_c(), Some(22.0));
    }

    // --- ClassroomInput tests ---

    #[test]
    fn test_classroom_input_default() {
        let input = ClassroomInput::default();
        assert_eq!(input.students, 30);
        assert_eq!(input.duration_minutes, 50);
        assert_eq!(input.area_m2, 50.0);
        assert_eq!(input.window_state, WindowState::Closed);
        assert_eq!(input.hvac_state, HvacState::Off);
        assert_eq!(input.outside_temp_c, 15.0);
    }

    #[test]
    fn test_classroom_input_builder() {
        let input = ClassroomInput::new(20, 90, 75.5)
            .window(WindowState::Open)
            .hvac(HvacState::Cooling)
            .outside_temp(31.0);

        assert_eq!(input.students, 20);
        assert_eq!(input.duration_minutes, 90);
        assert_eq!(input.area_m2, 75.5);
        assert_eq!(input.window_state, WindowState::Open);
        assert_eq!(input.hvac_state, HvacState::Cooling);
        assert_eq!(input.outside_temp_c, 31.0);
    }

    // --- Serialization tests ---

    #[test]
    fn test_enum_serialization_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&WindowState::Cracked).unwrap(),
            "\"cracked\""
        );
        assert_eq!(
            serde_json::to_string(&HvacState::Heating).unwrap(),
            "\"heating\""
        );
    }

    #[test]
    fn test_classroom_input_deserialization() {
        let json = r#"{"students":25,"duration_minutes":40,"area_m2":60.0,"window_state":"open","hvac_state":"cooling","outside_temp_c":30.5}"#;

        let input: ClassroomInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.students, 25);
        assert_eq!(input.window_state, WindowState::Open);
        assert_eq!(input.hvac_state, HvacState::Cooling);
        assert_eq!(input.outside_temp_c, 30.5);
    }

    #[test]
    fn test_classroom_input_rejects_unknown_window() {
        let json = r#"{"students":25,"duration_minutes":40,"area_m2":60.0,"window_state":"ajar","hvac_state":"off","outside_temp_c":10.0}"#;
        assert!(serde_json::from_str::<ClassroomInput>(json).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn window_parse_never_panics(s in ".{0,16}") {
                let _ = s.parse::<WindowState>();
            }

            #[test]
            fn hvac_parse_never_panics(s in ".{0,16}") {
                let _ = s.parse::<HvacState>();
            }
        }
    }
}
