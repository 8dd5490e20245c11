//! Interactive prompts.
//!
//! Each prompt shows its default in brackets; an empty line, unreadable
//! input or end of input keeps the default.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crt_core::calculations::arm::JobInputs;
use crt_core::format::DisplayConfig;
use crt_core::hardware::HardwareItem;
use crt_core::settings::ArmSettings;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    fn read_answer(&mut self, prompt: &str, default: &str) -> Option<String> {
        if write!(self.output, "{} [{}]: ", prompt, default).is_err() || self.output.flush().is_err() {
            return None;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line).is_err() {
            return None;
        }
        let answer = line.trim();
        if answer.is_empty() {
            None
        } else {
            Some(answer.to_string())
        }
    }

    pub fn parsed<T>(&mut self, prompt: &str, default: T) -> T
    where
        T: FromStr + ToString,
    {
        match self.read_answer(prompt, &default.to_string()) {
            Some(answer) => answer.parse().unwrap_or_else(|_| {
                log::warn!("could not read '{}' for {}, keeping {}", answer, prompt, default.to_string());
                default
            }),
            None => default,
        }
    }

    pub fn text(&mut self, prompt: &str, default: &str) -> String {
        self.read_answer(prompt, default).unwrap_or_else(|| default.to_string())
    }

    pub fn yes_no(&mut self, prompt: &str, default: bool) -> bool {
        let shown = if default { "Y/n" } else { "y/N" };
        match self.read_answer(prompt, shown) {
            Some(answer) => matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"),
            None => default,
        }
    }

    fn hardware_item(&mut self, name: &str, item: &HardwareItem) -> HardwareItem {
        HardwareItem {
            model: self.text(&format!("{} Model", name), &item.model),
            length: self.parsed(&format!("{} Length (in)", name), item.length),
        }
    }

    /// Walk the form: inputs, display settings, then the three optional
    /// sections. `job` and `settings` supply the defaults shown; the
    /// `edit_*` flags pre-open their sections.
    pub fn collect(
        &mut self,
        job: JobInputs,
        settings: ArmSettings,
        edit_reveals: bool,
        edit_offsets: bool,
    ) -> (JobInputs, ArmSettings) {
        let job = JobInputs {
            projection: self.parsed("Projection (in)", job.projection),
            drop: self.parsed("Drop / Height (in)", job.drop),
            clip_setback: self.parsed("Tie-Back Clip Center Setback (in)", job.clip_setback),
            quantity: self.parsed("Quantity of Arms", job.quantity),
        };

        let mut settings = settings;
        settings.display = DisplayConfig::new(
            self.parsed("Rounding Precision", settings.display.rounding),
            self.parsed("Display Format", settings.display.display),
        );

        if edit_reveals || self.yes_no("Edit Reveal Settings?", false) {
            settings.reveals.clevis_reveal =
                self.parsed("Clevis-Side Reveal (in)", settings.reveals.clevis_reveal);
            settings.reveals.tb_reveal =
                self.parsed("Turnbuckle-Side Reveal (in)", settings.reveals.tb_reveal);
        }

        if edit_offsets || self.yes_no("Edit Tie-Back Geometry Offsets?", false) {
            settings.offsets.wall_axis =
                self.parsed("Wall-to-Clip Axis Offset (in)", settings.offsets.wall_axis);
            settings.offsets.structure_axis =
                self.parsed("Structure-to-Axis Offset (in)", settings.offsets.structure_axis);
        }

        if self.yes_no("Edit Hardware Specifications?", false) {
            let hw = settings.hardware.clone();
            settings.hardware.structure_clevis = self.hardware_item("Structure-Side Clevis", &hw.structure_clevis);
            settings.hardware.turnbuckle = self.hardware_item("Turnbuckle", &hw.turnbuckle);
            settings.hardware.wall_clevis = self.hardware_item("Wall-Side Clevis", &hw.wall_clevis);
        }

        (job, settings)
    }
}
