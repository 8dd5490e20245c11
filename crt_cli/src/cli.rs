//! Command-line arguments and how they map onto the core settings.
//!
//! The two `--edit-*` toggles gate the advanced values: reveal and offset
//! flags are only honoured when their toggle is on, the same way the form
//! only shows those fields after ticking the box.

use std::path::PathBuf;

use clap::Parser;

use crt_core::calculations::arm::JobInputs;
use crt_core::errors::CalcError;
use crt_core::format::{DisplayConfig, DisplayMode, RoundingMode};
use crt_core::hardware::{HardwareItem, HardwareSet};
use crt_core::settings::{ArmSettings, GeometryOffsets, RevealSettings};

#[derive(Parser, Debug)]
#[command(name = "crt_cli", version, about = "CRT Arm Calculator - tie-back arm cut lengths")]
pub struct Cli {
    #[arg(long, help = "Prompt for every visible value instead of reading flags only")]
    pub interactive: bool,

    #[arg(long, allow_negative_numbers = true, help = "Projection in inches [48.0]")]
    pub projection: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Drop / height in inches [55.2]")]
    pub drop: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Tie-back clip center setback in inches [10.0]")]
    pub clip_setback: Option<f64>,
    #[arg(long, help = "Quantity of arms [1]")]
    pub quantity: Option<u32>,

    #[arg(long, default_value = "1/16", value_parser = parse_rounding, help = "Rounding: none, 1/16, 1/8, 1/4, 1/2")]
    pub rounding: RoundingMode,
    #[arg(long, default_value = "fraction", value_parser = parse_display, help = "Display: decimal or fraction")]
    pub display: DisplayMode,

    #[arg(long, help = "Enable --clevis-reveal / --tb-reveal")]
    pub edit_reveals: bool,
    #[arg(long, allow_negative_numbers = true, help = "Clevis-side reveal in inches [1.5]")]
    pub clevis_reveal: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Turnbuckle-side reveal in inches [3.5]")]
    pub tb_reveal: Option<f64>,

    #[arg(long, help = "Enable --wall-axis / --structure-axis")]
    pub edit_offsets: bool,
    #[arg(long, allow_negative_numbers = true, help = "Wall-to-clip axis offset in inches [1.688]")]
    pub wall_axis: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Structure-to-axis offset in inches [1.438]")]
    pub structure_axis: Option<f64>,

    #[arg(long, help = "Structure-side clevis model [CL25300-0531]")]
    pub clevis_1_model: Option<String>,
    #[arg(long, allow_negative_numbers = true, help = "Structure-side clevis length in inches [4.0]")]
    pub clevis_1_len: Option<f64>,
    #[arg(long, help = "Turnbuckle model [TB0900-0001]")]
    pub turnbuckle_model: Option<String>,
    #[arg(long, allow_negative_numbers = true, help = "Turnbuckle length in inches [4.0]")]
    pub turnbuckle_len: Option<f64>,
    #[arg(long, help = "Wall-side clevis model [CL25300-0531]")]
    pub clevis_2_model: Option<String>,
    #[arg(long, allow_negative_numbers = true, help = "Wall-side clevis length in inches [4.0]")]
    pub clevis_2_len: Option<f64>,

    #[arg(long, value_name = "PATH", help = "Write the table as CSV")]
    pub csv: Option<PathBuf>,
    #[arg(long, help = "Print inputs, derived lengths and the table as JSON")]
    pub json: bool,
}

fn parse_rounding(s: &str) -> Result<RoundingMode, CalcError> {
    s.parse()
}

fn parse_display(s: &str) -> Result<DisplayMode, CalcError> {
    s.parse()
}

impl Cli {
    /// Job dimensions from flags, falling back to the defaults.
    pub fn job(&self) -> JobInputs {
        let defaults = JobInputs::default();
        JobInputs {
            projection: self.projection.unwrap_or(defaults.projection),
            drop: self.drop.unwrap_or(defaults.drop),
            clip_setback: self.clip_setback.unwrap_or(defaults.clip_setback),
            quantity: self.quantity.unwrap_or(defaults.quantity),
        }
    }

    /// Session settings from flags, falling back to the defaults.
    pub fn settings(&self) -> ArmSettings {
        let defaults = ArmSettings::default();

        let reveals = if self.edit_reveals {
            RevealSettings {
                clevis_reveal: self.clevis_reveal.unwrap_or(defaults.reveals.clevis_reveal),
                tb_reveal: self.tb_reveal.unwrap_or(defaults.reveals.tb_reveal),
            }
        } else {
            if self.clevis_reveal.is_some() || self.tb_reveal.is_some() {
                log::warn!("reveal values ignored without --edit-reveals");
            }
            defaults.reveals
        };

        let offsets = if self.edit_offsets {
            GeometryOffsets {
                wall_axis: self.wall_axis.unwrap_or(defaults.offsets.wall_axis),
                structure_axis: self.structure_axis.unwrap_or(defaults.offsets.structure_axis),
            }
        } else {
            if self.wall_axis.is_some() || self.structure_axis.is_some() {
                log::warn!("geometry offsets ignored without --edit-offsets");
            }
            defaults.offsets
        };

        let hw = &defaults.hardware;
        let hardware = HardwareSet {
            structure_clevis: merge_item(&hw.structure_clevis, &self.clevis_1_model, self.clevis_1_len),
            turnbuckle: merge_item(&hw.turnbuckle, &self.turnbuckle_model, self.turnbuckle_len),
            wall_clevis: merge_item(&hw.wall_clevis, &self.clevis_2_model, self.clevis_2_len),
        };

        ArmSettings {
            offsets,
            reveals,
            hardware,
            display: DisplayConfig::new(self.rounding, self.display),
        }
    }
}

fn merge_item(default: &HardwareItem, model: &Option<String>, length: Option<f64>) -> HardwareItem {
    HardwareItem {
        model: model.clone().unwrap_or_else(|| default.model.clone()),
        length: length.unwrap_or(default.length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crt_core::calculations::arm::{compute, GeometryInputs};

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["crt_cli"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.job(), JobInputs::default());
        assert_eq!(cli.settings(), ArmSettings::default());
        assert!(!cli.json);
        assert!(cli.csv.is_none());
    }

    #[test]
    fn test_job_flags() {
        let cli = parse(&["--projection", "60", "--drop", "40.5", "--clip-setback", "8", "--quantity", "6"]);
        let job = cli.job();
        assert_eq!(job.projection, 60.0);
        assert_eq!(job.drop, 40.5);
        assert_eq!(job.clip_setback, 8.0);
        assert_eq!(job.quantity, 6);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let cli = parse(&["--projection", "-12.5"]);
        assert_eq!(cli.job().projection, -12.5);
    }

    #[test]
    fn test_display_flags() {
        let cli = parse(&["--rounding", "none", "--display", "decimal"]);
        let display = cli.settings().display;
        assert_eq!(display.rounding, RoundingMode::None);
        assert_eq!(display.display, DisplayMode::Decimal);

        let cli = parse(&["--rounding", "1/2"]);
        assert_eq!(cli.settings().display.rounding, RoundingMode::Half);
    }

    #[test]
    fn test_bad_rounding_is_rejected() {
        assert!(Cli::try_parse_from(["crt_cli", "--rounding", "1/3"]).is_err());
        assert!(Cli::try_parse_from(["crt_cli", "--display", "metric"]).is_err());
    }

    #[test]
    fn test_reveals_gated_by_toggle() {
        let cli = parse(&["--clevis-reveal", "2.0", "--tb-reveal", "4.0"]);
        assert_eq!(cli.settings().reveals, RevealSettings::default());

        let cli = parse(&["--edit-reveals", "--clevis-reveal", "2.0"]);
        let reveals = cli.settings().reveals;
        assert_eq!(reveals.clevis_reveal, 2.0);
        assert_eq!(reveals.tb_reveal, 3.5);
    }

    #[test]
    fn test_offsets_gated_by_toggle() {
        let cli = parse(&["--wall-axis", "2.5"]);
        assert_eq!(cli.settings().offsets, GeometryOffsets::default());

        let cli = parse(&["--edit-offsets", "--wall-axis", "2.5", "--structure-axis", "1.0"]);
        let offsets = cli.settings().offsets;
        assert_eq!(offsets.wall_axis, 2.5);
        assert_eq!(offsets.structure_axis, 1.0);
    }

    #[test]
    fn test_hardware_flags() {
        let cli = parse(&["--turnbuckle-model", "TB1200-0002", "--turnbuckle-len", "6.0"]);
        let hardware = cli.settings().hardware;
        assert_eq!(hardware.turnbuckle.model, "TB1200-0002");
        assert_eq!(hardware.turnbuckle.length, 6.0);
        assert_eq!(hardware.structure_clevis, HardwareSet::default().structure_clevis);
        assert_eq!(hardware.wall_clevis.length, 4.0);

        let lengths = compute(&GeometryInputs::from_settings(&cli.job(), &cli.settings()));
        assert_eq!(lengths.ctc_total, 14.0);
    }

    #[test]
    fn test_output_flags() {
        let cli = parse(&["--json", "--csv", "out.csv"]);
        assert!(cli.json);
        assert_eq!(cli.csv, Some(PathBuf::from("out.csv")));
    }
}
