//! # CSV Export
//!
//! Writes a [`Report`] as UTF-8 CSV with the header
//! `Component,Length,Model / Notes`. Every row of the table is written,
//! separators included, so the file matches what is on screen.
//!
//! Fields are quoted only when they contain a comma, a double quote or a
//! line break; embedded quotes are doubled. Since lengths end in `"`, they
//! come out as `"21 7/16"""`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use crt_core::calculations::arm::{compute, GeometryInputs, JobInputs};
//! use crt_core::export::{write_csv, DEFAULT_EXPORT_FILE_NAME};
//! use crt_core::report::build_report;
//! use crt_core::settings::ArmSettings;
//! use std::path::Path;
//!
//! let settings = ArmSettings::default();
//! let inputs = GeometryInputs::from_settings(&JobInputs::default(), &settings);
//! let report = build_report(&inputs, &compute(&inputs), &settings.hardware, &settings.display);
//! write_csv(&report, Path::new(DEFAULT_EXPORT_FILE_NAME))?;
//! # Ok::<(), crt_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::errors::{CalcError, CalcResult};
use crate::report::{Report, COLUMNS};

/// File name offered when exporting
pub const DEFAULT_EXPORT_FILE_NAME: &str = "crt_arm_output.csv";

/// Render the report as CSV text (header line first, `\n` line endings).
pub fn to_csv(report: &Report) -> String {
    let mut out = String::new();
    push_record(&mut out, COLUMNS);
    for row in report.rows() {
        push_record(&mut out, row.cells());
    }
    out
}

/// Write the report to `path` as CSV.
///
/// The file is written to a `.tmp` sibling, synced, then renamed over
/// `path`, so an interrupted export never leaves a half-written file.
pub fn write_csv(report: &Report, path: &Path) -> CalcResult<()> {
    let csv = to_csv(report);
    let tmp_path = path.with_extension("csv.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(csv.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::info!("exported {} rows to {}", report.len(), path.display());
    Ok(())
}

fn push_record(out: &mut String, cells: [&str; 3]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, cell);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
