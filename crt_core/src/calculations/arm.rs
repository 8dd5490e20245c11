//! # Tie-Back Arm Geometry
//!
//! Computes the cut lengths of a clevis-rod-turnbuckle tie-back arm from the
//! job dimensions and the session settings. All arms in a job share the
//! same geometry, so quantity is carried through for the report only.
//!
//! ## Formula chain
//!
//! ```text
//! ctc_total           = clevis_1_len + turnbuckle_len + clevis_2_len
//! horizontal          = projection - clip_setback - wall_axis
//! vertical            = drop - structure_axis
//! p2p                 = sqrt(horizontal^2 + vertical^2)
//! n                   = p2p - ctc_total
//! rod_length          = n / 2
//! threaded_rod_length = clevis_reveal + tb_reveal
//! tube_length         = rod_length - threaded_rod_length
//! ```
//!
//! Inputs are not validated. Negative or oversized values flow through the
//! chain, and a negative `tube_length` is a normal result that the caller
//! flags (see [`DerivedLengths::is_feasible`]).
//!
//! ## Example
//!
//! ```rust
//! use crt_core::calculations::arm::{compute, GeometryInputs, JobInputs};
//! use crt_core::settings::ArmSettings;
//!
//! let inputs = GeometryInputs::from_settings(&JobInputs::default(), &ArmSettings::default());
//! let lengths = compute(&inputs);
//! assert_eq!(lengths.ctc_total, 12.0);
//! assert_eq!(lengths.threaded_rod_length, 5.0);
//! assert!(lengths.is_feasible());
//! ```

use serde::{Deserialize, Serialize};

use crate::settings::ArmSettings;

/// Per-request dimensions typed in by the user.
///
/// ## JSON Example
///
/// ```json
/// {
///   "projection": 48.0,
///   "drop": 55.2,
///   "clip_setback": 10.0,
///   "quantity": 1
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobInputs {
    /// Wall face to the far end of the arm, inches
    pub projection: f64,

    /// Vertical drop from the structure to the wall attachment, inches
    pub drop: f64,

    /// Tie-back clip center setback from the projection line, inches
    pub clip_setback: f64,

    /// Number of identical arms to fabricate
    pub quantity: u32,
}

impl Default for JobInputs {
    fn default() -> Self {
        JobInputs {
            projection: 48.0,
            drop: 55.2,
            clip_setback: 10.0,
            quantity: 1,
        }
    }
}

/// Flat input record for [`compute`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryInputs {
    pub projection: f64,
    pub drop: f64,
    pub clip_setback: f64,
    /// Informational; does not change per-arm geometry
    pub quantity: u32,
    pub wall_axis: f64,
    pub structure_axis: f64,
    pub clevis_reveal: f64,
    pub tb_reveal: f64,
    /// Structure-side clevis length
    pub clevis_1_len: f64,
    pub turnbuckle_len: f64,
    /// Wall-side clevis length
    pub clevis_2_len: f64,
}

impl GeometryInputs {
    /// Combine the user's job dimensions with the session settings.
    pub fn from_settings(job: &JobInputs, settings: &ArmSettings) -> Self {
        GeometryInputs {
            projection: job.projection,
            drop: job.drop,
            clip_setback: job.clip_setback,
            quantity: job.quantity,
            wall_axis: settings.offsets.wall_axis,
            structure_axis: settings.offsets.structure_axis,
            clevis_reveal: settings.reveals.clevis_reveal,
            tb_reveal: settings.reveals.tb_reveal,
            clevis_1_len: settings.hardware.structure_clevis.length,
            turnbuckle_len: settings.hardware.turnbuckle.length,
            clevis_2_len: settings.hardware.wall_clevis.length,
        }
    }
}

/// Lengths derived from one [`GeometryInputs`], all in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedLengths {
    /// Horizontal run between pin axes
    pub horizontal: f64,

    /// Vertical rise between pin axes
    pub vertical: f64,

    /// Pin-to-pin (clevis to clevis) distance
    pub p2p: f64,

    /// Combined center-to-center length of the hardware stack
    pub ctc_total: f64,

    /// Length left for the two rods
    pub n: f64,

    /// Rod length on each side of the turnbuckle
    pub rod_length: f64,

    /// Threaded rod welded into each tube
    pub threaded_rod_length: f64,

    /// Tube cut length
    pub tube_length: f64,
}

impl DerivedLengths {
    /// True when both the rod and the tube come out with positive length.
    pub fn is_feasible(&self) -> bool {
        self.rod_length > 0.0 && self.tube_length > 0.0
    }

    /// Human-readable notes about lengths that cannot be fabricated.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.rod_length <= 0.0 {
            warnings.push(format!(
                "Hardware stack ({:.4}\") is at least as long as the pin-to-pin distance ({:.4}\")",
                self.ctc_total, self.p2p
            ));
        }
        if self.tube_length <= 0.0 {
            warnings.push(format!(
                "Reveals ({:.4}\") leave no tube: rod length is only {:.4}\"",
                self.threaded_rod_length, self.rod_length
            ));
        }
        warnings
    }
}

/// Run the formula chain. Pure and total.
pub fn compute(inputs: &GeometryInputs) -> DerivedLengths {
    let ctc_total = inputs.clevis_1_len + inputs.turnbuckle_len + inputs.clevis_2_len;
    let horizontal = inputs.projection - inputs.clip_setback - inputs.wall_axis;
    let vertical = inputs.drop - inputs.structure_axis;
    let p2p = (horizontal * horizontal + vertical * vertical).sqrt();
    let n = p2p - ctc_total;
    let rod_length = n / 2.0;
    let threaded_rod_length = inputs.clevis_reveal + inputs.tb_reveal;
    let tube_length = rod_length - threaded_rod_length;

    let lengths = DerivedLengths {
        horizontal,
        vertical,
        p2p,
        ctc_total,
        n,
        rod_length,
        threaded_rod_length,
        tube_length,
    };
    log::debug!("arm geometry: {:?} -> {:?}", inputs, lengths);
    lengths
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::format::{format_length, DisplayMode, RoundingMode};
    use crate::hardware::{HardwareItem, HardwareSet};
    use crate::settings::RevealSettings;

    fn reference_inputs() -> GeometryInputs {
        GeometryInputs {
            projection: 48.0,
            drop: 55.2,
            clip_setback: 10.0,
            quantity: 1,
            wall_axis: 1.688,
            structure_axis: 1.438,
            clevis_reveal: 1.5,
            tb_reveal: 3.5,
            clevis_1_len: 4.0,
            turnbuckle_len: 4.0,
            clevis_2_len: 4.0,
        }
    }

    #[test]
    fn test_reference_geometry() {
        let lengths = compute(&reference_inputs());

        assert_relative_eq!(lengths.horizontal, 36.312, epsilon = 1e-9);
        assert_relative_eq!(lengths.vertical, 53.762, epsilon = 1e-9);
        assert_relative_eq!(
            lengths.p2p,
            (36.312f64 * 36.312 + 53.762 * 53.762).sqrt(),
            epsilon = 1e-9
        );
        assert_relative_eq!(lengths.p2p, 64.8761, epsilon = 1e-4);
        assert_eq!(lengths.ctc_total, 12.0);
        assert_relative_eq!(lengths.n, lengths.p2p - 12.0, epsilon = 1e-12);
        assert_relative_eq!(lengths.rod_length, lengths.n / 2.0, epsilon = 1e-12);
        assert_eq!(lengths.threaded_rod_length, 5.0);
        assert_relative_eq!(lengths.tube_length, lengths.rod_length - 5.0, epsilon = 1e-12);
        assert!(lengths.is_feasible());
        assert!(lengths.warnings().is_empty());
    }

    #[test]
    fn test_reference_formatting() {
        let lengths = compute(&reference_inputs());
        let fraction = |v| format_length(v, RoundingMode::Sixteenth, DisplayMode::Fraction);
        assert_eq!(fraction(lengths.p2p), "64 7/8\"");
        assert_eq!(fraction(lengths.rod_length), "26 7/16\"");
        assert_eq!(fraction(lengths.tube_length), "21 7/16\"");
        assert_eq!(fraction(lengths.threaded_rod_length), "5\"");

        let decimal = |v| format_length(v, RoundingMode::None, DisplayMode::Decimal);
        assert_eq!(decimal(lengths.p2p), "64.8761\"");
        assert_eq!(decimal(lengths.rod_length), "26.4381\"");
        assert_eq!(decimal(lengths.tube_length), "21.4381\"");
    }

    #[test]
    fn test_from_settings() {
        let settings = ArmSettings::default();
        let job = JobInputs::default();
        let inputs = GeometryInputs::from_settings(&job, &settings);
        assert_eq!(inputs, reference_inputs());
    }

    #[test]
    fn test_settings_feed_ctc_and_threaded_rod() {
        let settings = ArmSettings::default()
            .with_hardware(HardwareSet {
                structure_clevis: HardwareItem::new("A", 3.25),
                turnbuckle: HardwareItem::new("B", 6.0),
                wall_clevis: HardwareItem::new("C", 2.75),
            })
            .with_reveals(RevealSettings {
                clevis_reveal: 2.0,
                tb_reveal: 1.25,
            });
        let lengths = compute(&GeometryInputs::from_settings(&JobInputs::default(), &settings));

        assert_eq!(lengths.ctc_total, 12.0);
        assert_eq!(lengths.threaded_rod_length, 3.25);
        assert_relative_eq!(lengths.tube_length, lengths.rod_length - 3.25, epsilon = 1e-12);
    }

    #[test]
    fn test_quantity_does_not_change_geometry() {
        let mut many = reference_inputs();
        many.quantity = 24;
        assert_eq!(compute(&many), compute(&reference_inputs()));
    }

    #[test]
    fn test_negative_tube_is_reported_not_rejected() {
        let settings = ArmSettings::default().with_reveals(RevealSettings {
            clevis_reveal: 20.0,
            tb_reveal: 15.0,
        });
        let inputs = GeometryInputs::from_settings(&JobInputs::default(), &settings);
        let lengths = compute(&inputs);

        assert!(lengths.tube_length < 0.0);
        assert!(!lengths.is_feasible());
        assert_eq!(lengths.warnings().len(), 1);
        assert!(format_length(lengths.tube_length, RoundingMode::Sixteenth, DisplayMode::Fraction)
            .starts_with('-'));
        assert!(format_length(lengths.tube_length, RoundingMode::None, DisplayMode::Decimal)
            .starts_with('-'));
    }

    #[test]
    fn test_oversized_hardware_makes_rods_negative() {
        let hardware = HardwareSet {
            structure_clevis: HardwareItem::new("XL", 30.0),
            turnbuckle: HardwareItem::new("XL", 30.0),
            wall_clevis: HardwareItem::new("XL", 30.0),
        };
        let settings = ArmSettings::default().with_hardware(hardware);
        let lengths = compute(&GeometryInputs::from_settings(&JobInputs::default(), &settings));

        assert!(lengths.rod_length < 0.0);
        assert_eq!(lengths.warnings().len(), 2);
    }

    #[test]
    fn test_negative_inputs_propagate() {
        let mut inputs = reference_inputs();
        inputs.projection = -10.0;
        inputs.drop = -5.0;
        let lengths = compute(&inputs);
        assert_relative_eq!(lengths.horizontal, -21.688, epsilon = 1e-9);
        assert_relative_eq!(lengths.vertical, -6.438, epsilon = 1e-9);
        assert!(lengths.p2p > 0.0);
    }

    #[test]
    fn test_zero_distance() {
        let mut inputs = reference_inputs();
        inputs.projection = inputs.clip_setback + inputs.wall_axis;
        inputs.drop = inputs.structure_axis;
        let lengths = compute(&inputs);
        assert_relative_eq!(lengths.p2p, 0.0, epsilon = 1e-9);
        assert_relative_eq!(lengths.n, -12.0, epsilon = 1e-9);
        assert!(!lengths.is_feasible());
    }
}
