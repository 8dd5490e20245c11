//! Form state: the raw text of each numeric field and how a field edit is
//! written back into the job inputs and session settings.
//!
//! Text that does not parse is kept on screen but leaves the last valid
//! value in place.

use crt_core::calculations::arm::JobInputs;
use crt_core::errors::{CalcError, CalcResult};
use crt_core::hardware::{HardwareItem, HardwareSet};
use crt_core::settings::ArmSettings;

/// Numeric form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Projection,
    Drop,
    ClipSetback,
    Quantity,
    ClevisReveal,
    TbReveal,
    WallAxis,
    StructureAxis,
    Clevis1Len,
    TurnbuckleLen,
    Clevis2Len,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Projection,
        Field::Drop,
        Field::ClipSetback,
        Field::Quantity,
        Field::ClevisReveal,
        Field::TbReveal,
        Field::WallAxis,
        Field::StructureAxis,
        Field::Clevis1Len,
        Field::TurnbuckleLen,
        Field::Clevis2Len,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Projection => "Projection (in)",
            Field::Drop => "Drop / Height (in)",
            Field::ClipSetback => "Tie-Back Clip Center Setback (in)",
            Field::Quantity => "Quantity of Arms",
            Field::ClevisReveal => "Clevis-Side Reveal (in)",
            Field::TbReveal => "Turnbuckle-Side Reveal (in)",
            Field::WallAxis => "Wall-to-Clip Axis Offset (in)",
            Field::StructureAxis => "Structure-to-Axis Offset (in)",
            Field::Clevis1Len => "Structure-Side Clevis Length (in)",
            Field::TurnbuckleLen => "Turnbuckle Length (in)",
            Field::Clevis2Len => "Wall-Side Clevis Length (in)",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Hardware parts with an editable model name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    StructureClevis,
    Turnbuckle,
    WallClevis,
}

impl Part {
    pub fn label(self) -> &'static str {
        match self {
            Part::StructureClevis => "Structure-Side Clevis Model",
            Part::Turnbuckle => "Turnbuckle Model",
            Part::WallClevis => "Wall-Side Clevis Model",
        }
    }
}

pub fn part_mut(hardware: &mut HardwareSet, part: Part) -> &mut HardwareItem {
    match part {
        Part::StructureClevis => &mut hardware.structure_clevis,
        Part::Turnbuckle => &mut hardware.turnbuckle,
        Part::WallClevis => &mut hardware.wall_clevis,
    }
}

pub fn part(hardware: &HardwareSet, part: Part) -> &HardwareItem {
    match part {
        Part::StructureClevis => &hardware.structure_clevis,
        Part::Turnbuckle => &hardware.turnbuckle,
        Part::WallClevis => &hardware.wall_clevis,
    }
}

/// Raw text of every numeric field, as typed.
#[derive(Debug, Clone)]
pub struct FormFields {
    text: [String; 11],
}

impl FormFields {
    pub fn from_values(job: &JobInputs, settings: &ArmSettings) -> Self {
        let text = Field::ALL.map(|field| match field {
            Field::Quantity => job.quantity.to_string(),
            _ => format_value(current_value(field, job, settings)),
        });
        FormFields { text }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.text[field.index()]
    }

    pub fn set(&mut self, field: Field, raw: String) {
        self.text[field.index()] = raw;
    }
}

/// `48` shows as `48.0`, matching how number inputs echo floats.
fn format_value(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

fn current_value(field: Field, job: &JobInputs, settings: &ArmSettings) -> f64 {
    match field {
        Field::Projection => job.projection,
        Field::Drop => job.drop,
        Field::ClipSetback => job.clip_setback,
        Field::Quantity => f64::from(job.quantity),
        Field::ClevisReveal => settings.reveals.clevis_reveal,
        Field::TbReveal => settings.reveals.tb_reveal,
        Field::WallAxis => settings.offsets.wall_axis,
        Field::StructureAxis => settings.offsets.structure_axis,
        Field::Clevis1Len => settings.hardware.structure_clevis.length,
        Field::TurnbuckleLen => settings.hardware.turnbuckle.length,
        Field::Clevis2Len => settings.hardware.wall_clevis.length,
    }
}

/// Parse `raw` and store it in the matching job or settings value.
pub fn apply(field: Field, raw: &str, job: &mut JobInputs, settings: &mut ArmSettings) -> CalcResult<()> {
    let slot = match field {
        Field::Quantity => {
            job.quantity = raw
                .trim()
                .parse()
                .map_err(|_| CalcError::invalid_input(field.label(), raw, "Expected a whole number"))?;
            return Ok(());
        }
        Field::Projection => &mut job.projection,
        Field::Drop => &mut job.drop,
        Field::ClipSetback => &mut job.clip_setback,
        Field::ClevisReveal => &mut settings.reveals.clevis_reveal,
        Field::TbReveal => &mut settings.reveals.tb_reveal,
        Field::WallAxis => &mut settings.offsets.wall_axis,
        Field::StructureAxis => &mut settings.offsets.structure_axis,
        Field::Clevis1Len => &mut settings.hardware.structure_clevis.length,
        Field::TurnbuckleLen => &mut settings.hardware.turnbuckle.length,
        Field::Clevis2Len => &mut settings.hardware.wall_clevis.length,
    };
    *slot = raw
        .trim()
        .parse()
        .map_err(|_| CalcError::invalid_input(field.label(), raw, "Expected a number"))?;
    Ok(())
}
