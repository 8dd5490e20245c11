//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Inputs` - Input parameters (JSON-serializable)
//! - a result record (JSON-serializable)
//! - a pure function from one to the other
//!
//! ## Available Calculations
//!
//! - [`arm`] - Tie-back arm geometry (pin-to-pin, rod, tube, threaded rod)

pub mod arm;

// Re-export commonly used types
pub use arm::{compute, DerivedLengths, GeometryInputs, JobInputs};
