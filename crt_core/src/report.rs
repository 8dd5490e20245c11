//! # Report Table
//!
//! Turns one calculation into the three-column table shown to the user and
//! written to CSV:
//!
//! ```text
//! Component               | Length   | Model / Notes
//! --- Arm Components ---  |          |
//! Number of Arms          | 1        | Total arms to fabricate
//! Tube Length             | 21 7/16" | cut to spec
//! ...
//! ```
//!
//! Rows whose component is empty separate the sections; section headings
//! are rows with a blank length and note.

use serde::{Deserialize, Serialize};

use crate::calculations::arm::{compute, DerivedLengths, GeometryInputs, JobInputs};
use crate::errors::CalcResult;
use crate::format::DisplayConfig;
use crate::hardware::HardwareSet;
use crate::settings::ArmSettings;

/// Column headings, in order
pub const COLUMNS: [&str; 3] = ["Component", "Length", "Model / Notes"];

pub const ARM_COMPONENTS_HEADING: &str = "--- Arm Components ---";
pub const GLOBAL_PARAMETERS_HEADING: &str = "--- Global Parameters ---";
pub const HARDWARE_SPECS_HEADING: &str = "--- Hardware Specs ---";

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub component: String,
    pub length: String,
    pub note: String,
}

impl ReportRow {
    pub fn new(component: impl Into<String>, length: impl Into<String>, note: impl Into<String>) -> Self {
        ReportRow {
            component: component.into(),
            length: length.into(),
            note: note.into(),
        }
    }

    /// Section heading row
    pub fn heading(title: impl Into<String>) -> Self {
        ReportRow::new(title, "", "")
    }

    /// Blank separator row
    pub fn separator() -> Self {
        ReportRow::new("", "", "")
    }

    pub fn is_separator(&self) -> bool {
        self.component.is_empty()
    }

    /// The three cells in column order
    pub fn cells(&self) -> [&str; 3] {
        [&self.component, &self.length, &self.note]
    }
}

/// Ordered rows of a finished report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn from_rows(rows: Vec<ReportRow>) -> Self {
        Report { rows }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the first row for a component name.
    pub fn row(&self, component: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.component == component)
    }

    /// Plain-text table with padded columns, header first.
    pub fn to_text_table(&self) -> String {
        let mut widths = COLUMNS.map(|c| c.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let render = |cells: [&str; 3]| -> String {
            if cells.iter().all(|c| c.is_empty()) {
                return String::new();
            }
            let line = cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(" | ");
            line.trim_end().to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(render(COLUMNS));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        lines.extend(self.rows.iter().map(|row| render(row.cells())));
        lines.join("\n")
    }
}

/// One full request: assembled inputs, derived lengths and the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub inputs: GeometryInputs,
    pub lengths: DerivedLengths,
    pub report: Report,
}

impl Calculation {
    /// Compute and format one job with the session settings.
    ///
    /// ```rust
    /// use crt_core::calculations::arm::JobInputs;
    /// use crt_core::report::Calculation;
    /// use crt_core::settings::ArmSettings;
    ///
    /// let calc = Calculation::run(&JobInputs::default(), &ArmSettings::default());
    /// assert!(calc.lengths.is_feasible());
    /// assert_eq!(calc.report.row("Rod Length").unwrap().length, "26 7/16\"");
    /// ```
    pub fn run(job: &JobInputs, settings: &ArmSettings) -> Self {
        let inputs = GeometryInputs::from_settings(job, settings);
        let lengths = compute(&inputs);
        let report = build_report(&inputs, &lengths, &settings.hardware, &settings.display);
        Calculation {
            inputs,
            lengths,
            report,
        }
    }

    /// Pretty-printed JSON of inputs, lengths and rows.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Assemble the Arm Components, Global Parameters and Hardware Specs
/// sections for one calculation.
///
/// ```rust
/// use crt_core::calculations::arm::{compute, GeometryInputs, JobInputs};
/// use crt_core::report::build_report;
/// use crt_core::settings::ArmSettings;
///
/// let settings = ArmSettings::default();
/// let inputs = GeometryInputs::from_settings(&JobInputs::default(), &settings);
/// let report = build_report(&inputs, &compute(&inputs), &settings.hardware, &settings.display);
///
/// assert_eq!(report.row("Tube Length").unwrap().length, "21 7/16\"");
/// assert_eq!(report.row("P2P Distance").unwrap().length, "64 7/8\"");
/// ```
pub fn build_report(
    inputs: &GeometryInputs,
    lengths: &DerivedLengths,
    hardware: &HardwareSet,
    display: &DisplayConfig,
) -> Report {
    let fmt = |value: f64| display.format(value);

    let rows = vec![
        ReportRow::heading(ARM_COMPONENTS_HEADING),
        ReportRow::new("Number of Arms", inputs.quantity.to_string(), "Total arms to fabricate"),
        ReportRow::new("Tube Length", fmt(lengths.tube_length), "cut to spec"),
        ReportRow::new("Rod Length", fmt(lengths.rod_length), "each side of turnbuckle"),
        ReportRow::new("Threaded Rod Length", fmt(lengths.threaded_rod_length), "welded in tube"),
        ReportRow::separator(),
        ReportRow::heading(GLOBAL_PARAMETERS_HEADING),
        ReportRow::new("Clevis-Side Reveal", fmt(inputs.clevis_reveal), "used in rod calc"),
        ReportRow::new("Turnbuckle-Side Reveal", fmt(inputs.tb_reveal), "used in rod calc"),
        ReportRow::new("P2P Distance", fmt(lengths.p2p), "clevis to clevis"),
        ReportRow::separator(),
        ReportRow::heading(HARDWARE_SPECS_HEADING),
        ReportRow::new(
            "Structure-Side Clevis",
            fmt(inputs.clevis_1_len),
            format!("{} (tie-back clip end)", hardware.structure_clevis.model),
        ),
        ReportRow::new(
            "Turnbuckle",
            fmt(inputs.turnbuckle_len),
            format!("{} (center connector)", hardware.turnbuckle.model),
        ),
        ReportRow::new(
            "Wall-Side Clevis",
            fmt(inputs.clevis_2_len),
            format!("{} (wall plate end)", hardware.wall_clevis.model),
        ),
    ];

    Report::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::arm::{compute, JobInputs};
    use crate::format::{DisplayMode, RoundingMode};
    use crate::settings::ArmSettings;

    fn default_report(display: DisplayConfig) -> Report {
        let settings = ArmSettings::default();
        let inputs = GeometryInputs::from_settings(&JobInputs::default(), &settings);
        build_report(&inputs, &compute(&inputs), &settings.hardware, &display)
    }

    #[test]
    fn test_section_layout() {
        let report = default_report(DisplayConfig::default());
        let components: Vec<&str> = report.rows().iter().map(|r| r.component.as_str()).collect();
        assert_eq!(
            components,
            vec![
                "--- Arm Components ---",
                "Number of Arms",
                "Tube Length",
                "Rod Length",
                "Threaded Rod Length",
                "",
                "--- Global Parameters ---",
                "Clevis-Side Reveal",
                "Turnbuckle-Side Reveal",
                "P2P Distance",
                "",
                "--- Hardware Specs ---",
                "Structure-Side Clevis",
                "Turnbuckle",
                "Wall-Side Clevis",
            ]
        );
        assert_eq!(report.rows().iter().filter(|r| r.is_separator()).count(), 2);
    }

    #[test]
    fn test_default_fraction_values() {
        let report = default_report(DisplayConfig::default());
        let length = |name: &str| report.row(name).unwrap().length.clone();

        assert_eq!(length("Number of Arms"), "1");
        assert_eq!(length("Tube Length"), "21 7/16\"");
        assert_eq!(length("Rod Length"), "26 7/16\"");
        assert_eq!(length("Threaded Rod Length"), "5\"");
        assert_eq!(length("Clevis-Side Reveal"), "1 1/2\"");
        assert_eq!(length("Turnbuckle-Side Reveal"), "3 1/2\"");
        assert_eq!(length("P2P Distance"), "64 7/8\"");
        assert_eq!(length("Turnbuckle"), "4\"");
    }

    #[test]
    fn test_decimal_values() {
        let report = default_report(DisplayConfig::new(RoundingMode::None, DisplayMode::Decimal));
        assert_eq!(report.row("Tube Length").unwrap().length, "21.4381\"");
        assert_eq!(report.row("P2P Distance").unwrap().length, "64.8761\"");
        assert_eq!(report.row("Structure-Side Clevis").unwrap().length, "4.0\"");
    }

    #[test]
    fn test_hardware_notes_carry_models() {
        let report = default_report(DisplayConfig::default());
        assert_eq!(
            report.row("Structure-Side Clevis").unwrap().note,
            "CL25300-0531 (tie-back clip end)"
        );
        assert_eq!(report.row("Turnbuckle").unwrap().note, "TB0900-0001 (center connector)");
        assert_eq!(report.row("Wall-Side Clevis").unwrap().note, "CL25300-0531 (wall plate end)");
    }

    #[test]
    fn test_headings_have_blank_cells() {
        let report = default_report(DisplayConfig::default());
        let heading = report.row(HARDWARE_SPECS_HEADING).unwrap();
        assert!(heading.length.is_empty());
        assert!(heading.note.is_empty());
    }

    #[test]
    fn test_text_table() {
        let report = default_report(DisplayConfig::default());
        let table = report.to_text_table();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), report.len() + 2);
        assert!(lines[0].starts_with("Component"));
        assert!(lines[0].contains("Model / Notes"));
        assert!(lines[1].starts_with("---"));
        assert!(table.contains("Tube Length"));
        assert!(table.contains("21 7/16\""));
        // Separator rows render blank
        assert_eq!(lines[7], "");
    }

    #[test]
    fn test_calculation_run_matches_manual_pipeline() {
        let settings = ArmSettings::default();
        let calc = Calculation::run(&JobInputs::default(), &settings);
        assert_eq!(calc.report, default_report(settings.display));

        let json = serde_json::to_string(&calc).unwrap();
        assert!(json.contains("\"tube_length\""));
        assert!(json.contains("\"rows\""));
    }

    #[test]
    fn test_calculation_to_json() {
        let calc = Calculation::run(&JobInputs::default(), &ArmSettings::default());
        let json = calc.to_json().unwrap();
        assert!(json.contains("\n  \"inputs\": {"));

        let roundtrip: Calculation = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.report, calc.report);
        assert!((roundtrip.lengths.p2p - calc.lengths.p2p).abs() < 1e-9);
    }

    #[test]
    fn test_quantity_is_printed_verbatim() {
        let job = JobInputs {
            quantity: 12,
            ..JobInputs::default()
        };
        let calc = Calculation::run(&job, &ArmSettings::default());
        assert_eq!(calc.report.row("Number of Arms").unwrap().length, "12");
    }

    #[test]
    fn test_report_serialization() {
        let report = default_report(DisplayConfig::default());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"component\":\"Tube Length\""));
        let roundtrip: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, report);
    }
}
