//! # Session Settings
//!
//! `ArmSettings` is the configuration a user session carries between
//! calculations: geometry offsets, reveal lengths, the hardware stack and
//! the display preferences. It is an ordinary value passed into every
//! calculation; edits build a new record.
//!
//! ## Structure
//!
//! ```text
//! ArmSettings
//! ├── offsets: GeometryOffsets (wall_axis, structure_axis)
//! ├── reveals: RevealSettings (clevis_reveal, tb_reveal)
//! ├── hardware: HardwareSet (clevis / turnbuckle / clevis)
//! └── display: DisplayConfig (rounding, display mode)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use crt_core::settings::{ArmSettings, RevealSettings};
//!
//! let settings = ArmSettings::default().with_reveals(RevealSettings {
//!     clevis_reveal: 2.0,
//!     tb_reveal: 3.0,
//! });
//! assert_eq!(settings.reveals.clevis_reveal, 2.0);
//! assert_eq!(settings.reveals, RevealSettings { clevis_reveal: 2.0, tb_reveal: 3.0 });
//! ```

use serde::{Deserialize, Serialize};

use crate::format::DisplayConfig;
use crate::hardware::HardwareSet;

/// Default wall-to-clip axis offset, inches
pub const DEFAULT_WALL_AXIS: f64 = 1.688;

/// Default structure-to-axis offset, inches
pub const DEFAULT_STRUCTURE_AXIS: f64 = 1.438;

/// Default clevis-side reveal, inches
pub const DEFAULT_CLEVIS_REVEAL: f64 = 1.5;

/// Default turnbuckle-side reveal, inches
pub const DEFAULT_TB_REVEAL: f64 = 3.5;

/// Tie-back clip geometry offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryOffsets {
    /// Wall face to clip pin axis, subtracted from the horizontal run
    pub wall_axis: f64,

    /// Structure face to pin axis, subtracted from the vertical drop
    pub structure_axis: f64,
}

impl Default for GeometryOffsets {
    fn default() -> Self {
        GeometryOffsets {
            wall_axis: DEFAULT_WALL_AXIS,
            structure_axis: DEFAULT_STRUCTURE_AXIS,
        }
    }
}

/// Threaded rod left exposed at each end of the tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealSettings {
    /// Exposed thread on the clevis side
    pub clevis_reveal: f64,

    /// Exposed thread on the turnbuckle side
    pub tb_reveal: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        RevealSettings {
            clevis_reveal: DEFAULT_CLEVIS_REVEAL,
            tb_reveal: DEFAULT_TB_REVEAL,
        }
    }
}

/// Everything a session keeps between calculations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArmSettings {
    pub offsets: GeometryOffsets,
    pub reveals: RevealSettings,
    pub hardware: HardwareSet,
    pub display: DisplayConfig,
}

impl ArmSettings {
    pub fn with_offsets(mut self, offsets: GeometryOffsets) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn with_reveals(mut self, reveals: RevealSettings) -> Self {
        self.reveals = reveals;
        self
    }

    pub fn with_hardware(mut self, hardware: HardwareSet) -> Self {
        self.hardware = hardware;
        self
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{DisplayMode, RoundingMode};

    #[test]
    fn test_defaults() {
        let settings = ArmSettings::default();
        assert_eq!(settings.offsets.wall_axis, 1.688);
        assert_eq!(settings.offsets.structure_axis, 1.438);
        assert_eq!(settings.reveals.clevis_reveal, 1.5);
        assert_eq!(settings.reveals.tb_reveal, 3.5);
        assert_eq!(settings.display.rounding, RoundingMode::Sixteenth);
        assert_eq!(settings.display.display, DisplayMode::Fraction);
    }

    #[test]
    fn test_builders_replace_one_section() {
        let base = ArmSettings::default();
        let edited = base.clone().with_offsets(GeometryOffsets {
            wall_axis: 2.0,
            structure_axis: 1.0,
        });
        assert_eq!(edited.offsets.wall_axis, 2.0);
        assert_eq!(edited.reveals, base.reveals);
        assert_eq!(edited.hardware, base.hardware);

        let edited = edited.with_display(DisplayConfig::new(RoundingMode::Half, DisplayMode::Decimal));
        assert_eq!(edited.display.rounding, RoundingMode::Half);
        assert_eq!(edited.offsets.wall_axis, 2.0);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = ArmSettings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert!(json.contains("wall_axis"));
        assert!(json.contains("Sixteenth"));
        let roundtrip: ArmSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, settings);
    }
}
