//! # Arm Hardware
//!
//! The three stock parts of a tie-back arm, ordered from the structure to
//! the wall:
//!
//! ```text
//! structure ── clevis 1 ── rod ── turnbuckle ── rod ── clevis 2 ── wall
//! ```
//!
//! Each part carries a catalog model string (printed in the report notes)
//! and its center-to-center length in inches.

use serde::{Deserialize, Serialize};

/// Default clevis catalog model (used on both ends)
pub const DEFAULT_CLEVIS_MODEL: &str = "CL25300-0531";

/// Default turnbuckle catalog model
pub const DEFAULT_TURNBUCKLE_MODEL: &str = "TB0900-0001";

/// Default center-to-center length of each stock part, inches
pub const DEFAULT_PART_LENGTH: f64 = 4.0;

/// A single catalog part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareItem {
    /// Catalog model identifier (e.g., "CL25300-0531")
    pub model: String,

    /// Center-to-center length in inches
    pub length: f64,
}

impl HardwareItem {
    pub fn new(model: impl Into<String>, length: f64) -> Self {
        HardwareItem {
            model: model.into(),
            length,
        }
    }
}

/// The clevis / turnbuckle / clevis stack of one arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareSet {
    /// Clevis at the tie-back clip end
    pub structure_clevis: HardwareItem,

    /// Center connector
    pub turnbuckle: HardwareItem,

    /// Clevis at the wall plate end
    pub wall_clevis: HardwareItem,
}

impl Default for HardwareSet {
    fn default() -> Self {
        HardwareSet {
            structure_clevis: HardwareItem::new(DEFAULT_CLEVIS_MODEL, DEFAULT_PART_LENGTH),
            turnbuckle: HardwareItem::new(DEFAULT_TURNBUCKLE_MODEL, DEFAULT_PART_LENGTH),
            wall_clevis: HardwareItem::new(DEFAULT_CLEVIS_MODEL, DEFAULT_PART_LENGTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hardware() {
        let hw = HardwareSet::default();
        assert_eq!(hw.structure_clevis.model, "CL25300-0531");
        assert_eq!(hw.turnbuckle.model, "TB0900-0001");
        assert_eq!(hw.wall_clevis.model, "CL25300-0531");
        assert_eq!(hw.structure_clevis.length, 4.0);
        assert_eq!(hw.turnbuckle.length, 4.0);
        assert_eq!(hw.wall_clevis.length, 4.0);
    }

    #[test]
    fn test_serialization() {
        let hw = HardwareSet::default();
        let json = serde_json::to_string(&hw).unwrap();
        assert!(json.contains("TB0900-0001"));
        let roundtrip: HardwareSet = serde_json::from_str(&json).unwrap();
        assert_eq!(hw, roundtrip);
    }
}
