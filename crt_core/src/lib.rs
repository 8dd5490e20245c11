//! # crt_core - Tie-Back Arm Geometry Engine
//!
//! `crt_core` computes cut lengths for clevis-rod-turnbuckle tie-back arms
//! and formats them for the shop table. All inputs and outputs are
//! JSON-serializable so the same engine drives the CLI, the GUI and any
//! scripted use.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Explicit settings**: Session configuration is a value passed in, never a global
//! - **No input policing**: Odd inputs produce odd (possibly negative) lengths, not errors
//!
//! ## Quick Start
//!
//! ```rust
//! use crt_core::calculations::arm::JobInputs;
//! use crt_core::report::Calculation;
//! use crt_core::settings::ArmSettings;
//! use crt_core::export::to_csv;
//!
//! let job = JobInputs { projection: 48.0, drop: 55.2, clip_setback: 10.0, quantity: 4 };
//! let calc = Calculation::run(&job, &ArmSettings::default());
//!
//! println!("{}", calc.report.to_text_table());
//! let csv = to_csv(&calc.report);
//! assert!(csv.starts_with("Component,Length,Model / Notes\n"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The arm formula chain
//! - [`format`] - Rounding and decimal / fraction rendering
//! - [`report`] - Report table assembly
//! - [`export`] - CSV export with atomic writes
//! - [`settings`] - Session configuration (offsets, reveals, hardware, display)
//! - [`hardware`] - Clevis and turnbuckle catalog parts
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod export;
pub mod format;
pub mod hardware;
pub mod report;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute, DerivedLengths, GeometryInputs, JobInputs};
pub use errors::{CalcError, CalcResult};
pub use export::{to_csv, write_csv};
pub use format::{format_length, DisplayConfig, DisplayMode, RoundingMode};
pub use report::{build_report, Calculation, Report, ReportRow};
pub use settings::ArmSettings;
