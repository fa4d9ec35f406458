//! Data-driven game balance
//!
//! Defaults mirror [`crate::consts`]. A page may override any subset of the
//! fields with an inline `<script id="tuning" type="application/json">` block.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Play-field width (moving slab bounces between 0 and this)
    pub field_width: f32,
    /// Height of one floor
    pub slab_height: f32,
    /// Width of the base slab
    pub initial_width: f32,
    /// Left edge of the base slab
    pub initial_x: f32,
    /// Speed at score 0, in field units per frame callback
    pub base_speed: f32,
    /// Speed added per placed floor
    pub speed_growth: f32,
    /// Floors kept on screen before the camera scrolls
    pub visible_floors: u32,
    /// World rows shown in the viewport
    pub view_floors: u32,
    /// Hue of the base slab (degrees)
    pub hue_base: u32,
    /// Hue advance per floor (degrees)
    pub hue_step: u32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            slab_height: SLAB_HEIGHT,
            initial_width: INITIAL_WIDTH,
            initial_x: INITIAL_X,
            base_speed: BASE_SPEED,
            speed_growth: SPEED_GROWTH,
            visible_floors: VISIBLE_FLOORS,
            view_floors: VIEW_FLOORS,
            hue_base: HUE_BASE,
            hue_step: HUE_STEP,
            saturation: SATURATION,
            lightness: LIGHTNESS,
        }
    }
}

/// Reasons a tuning document is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// A size or speed that must be strictly positive is not
    NonPositive(&'static str),
    /// Speed growth would make the slab slow down
    NegativeGrowth,
    /// The base slab does not fit inside the play field
    BaseOutsideField,
    /// Colour components outside 0..=1
    ColourRange,
    /// The camera would start scrolling only after the tower left the view
    ScrollBeyondView,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::NonPositive(field) => write!(f, "{field} must be greater than zero"),
            TuningError::NegativeGrowth => write!(f, "speed_growth must not be negative"),
            TuningError::BaseOutsideField => {
                write!(f, "base slab must lie inside the play field")
            }
            TuningError::ColourRange => write!(f, "saturation and lightness must be in 0..=1"),
            TuningError::ScrollBeyondView => {
                write!(f, "visible_floors + 2 must not exceed view_floors")
            }
        }
    }
}

impl std::error::Error for TuningError {}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check that the tuning describes a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_width", self.field_width),
            ("slab_height", self.slab_height),
            ("initial_width", self.initial_width),
            ("base_speed", self.base_speed),
        ];
        for (name, value) in positive {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(TuningError::NonPositive(name));
            }
        }
        if self.view_floors == 0 {
            return Err(TuningError::NonPositive("view_floors"));
        }
        // Placed floors plus the base and the moving slab must fit before scrolling starts
        if self.visible_floors.saturating_add(2) > self.view_floors {
            return Err(TuningError::ScrollBeyondView);
        }
        if !(self.speed_growth >= 0.0) {
            return Err(TuningError::NegativeGrowth);
        }
        if !(self.initial_x >= 0.0) || self.initial_x + self.initial_width > self.field_width {
            return Err(TuningError::BaseOutsideField);
        }
        if !(0.0..=1.0).contains(&self.saturation) || !(0.0..=1.0).contains(&self.lightness) {
            return Err(TuningError::ColourRange);
        }
        Ok(())
    }

    /// Return self if valid, otherwise log the problem and fall back to defaults
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Rejected tuning ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Element id of the inline tuning block
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "tuning";

    /// Load tuning from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(text) = text {
            match Self::from_json(&text) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from page");
                    return tuning.or_default();
                }
                Err(e) => log::warn!("Invalid tuning JSON: {e}"),
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "base_speed": 3.5, "visible_floors": 8 }"#).unwrap();
        assert_eq!(tuning.base_speed, 3.5);
        assert_eq!(tuning.visible_floors, 8);
        assert_eq!(tuning.field_width, FIELD_WIDTH);
        assert_eq!(tuning.initial_width, INITIAL_WIDTH);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ base_speed: }").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_speed = Tuning {
            base_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(
            zero_speed.validate(),
            Err(TuningError::NonPositive("base_speed"))
        );

        let nan_width = Tuning {
            field_width: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            nan_width.validate(),
            Err(TuningError::NonPositive("field_width"))
        );

        let shrinking = Tuning {
            speed_growth: -0.1,
            ..Default::default()
        };
        assert_eq!(shrinking.validate(), Err(TuningError::NegativeGrowth));

        let too_wide = Tuning {
            initial_x: 300.0,
            ..Default::default()
        };
        assert_eq!(too_wide.validate(), Err(TuningError::BaseOutsideField));
    }

    #[test]
    fn test_validate_rejects_empty_view() {
        let no_rows = Tuning {
            view_floors: 0,
            ..Default::default()
        };
        assert_eq!(
            no_rows.validate(),
            Err(TuningError::NonPositive("view_floors"))
        );
    }

    #[test]
    fn test_validate_rejects_scroll_past_view() {
        let late_scroll = Tuning {
            visible_floors: 12,
            view_floors: 12,
            ..Default::default()
        };
        assert_eq!(late_scroll.validate(), Err(TuningError::ScrollBeyondView));

        // Moving slab would sit on the row just above the view
        let one_short = Tuning {
            visible_floors: 11,
            view_floors: 12,
            ..Default::default()
        };
        assert_eq!(one_short.validate(), Err(TuningError::ScrollBeyondView));

        let tight = Tuning {
            visible_floors: 10,
            view_floors: 12,
            ..Default::default()
        };
        assert_eq!(tight.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_colour_out_of_range() {
        let oversaturated = Tuning {
            saturation: 1.5,
            ..Default::default()
        };
        assert_eq!(oversaturated.validate(), Err(TuningError::ColourRange));

        let negative_light = Tuning {
            lightness: -0.1,
            ..Default::default()
        };
        assert_eq!(negative_light.validate(), Err(TuningError::ColourRange));
    }

    #[test]
    fn test_or_default_replaces_invalid() {
        let bad = Tuning {
            slab_height: -1.0,
            ..Default::default()
        };
        assert_eq!(bad.or_default(), Tuning::default());

        let good = Tuning {
            base_speed: 4.0,
            ..Default::default()
        };
        assert_eq!(good.or_default(), good);
    }
}
