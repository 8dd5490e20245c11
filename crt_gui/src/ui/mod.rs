//! UI module for the CRT Arm Calculator GUI
//!
//! # Panel Structure
//! - `input_panel` - Left sidebar: inputs, display settings, advanced sections
//! - `results_panel` - Main panel: report table, fabrication check, CSV download
//! - `status_bar` - Bottom status messages

pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
