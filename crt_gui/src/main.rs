//! # CRT Arm Calculator GUI
//!
//! Desktop form for the tie-back arm calculator, built with Iced.
//! The sidebar holds the inputs and settings; the main panel shows the
//! report table and exports it to CSV.
//!
//! Session settings live in [`App`] for as long as the window is open and
//! are handed to the core on every recalculation.

mod form;
mod ui;

use std::collections::HashSet;

use iced::widget::{column, container, row, rule};
use iced::{Element, Length, Size};

use crt_core::calculations::arm::JobInputs;
use crt_core::export::{write_csv, DEFAULT_EXPORT_FILE_NAME};
use crt_core::format::{DisplayMode, RoundingMode};
use crt_core::report::Calculation;
use crt_core::settings::ArmSettings;

use crate::form::{Field, FormFields, Part};

fn main() -> iced::Result {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("CRT Arm Calculator v{} starting", env!("CARGO_PKG_VERSION"));

    iced::application(App::new, App::update, App::view)
        .title("CRT Arm Calculator")
        .window_size(Size::new(1100.0, 720.0))
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    // Numeric inputs (raw text as typed)
    FieldChanged(Field, String),
    // Hardware model names
    ModelChanged(Part, String),
    // Display settings
    RoundingSelected(RoundingMode),
    DisplaySelected(DisplayMode),
    // Advanced section toggles
    ToggleRevealSettings(bool),
    ToggleGeometryOffsets(bool),
    ToggleHardwareSpecs,
    // Export
    DownloadCsv,
}

/// Application state for one session.
pub struct App {
    pub job: JobInputs,
    pub settings: ArmSettings,
    pub fields: FormFields,
    pub calc: Calculation,
    pub edit_reveals: bool,
    pub edit_offsets: bool,
    pub hardware_open: bool,
    /// Fields whose text does not parse
    pub invalid_fields: HashSet<Field>,
    pub status: String,
}

impl App {
    fn new() -> Self {
        let job = JobInputs::default();
        let settings = ArmSettings::default();
        App {
            fields: FormFields::from_values(&job, &settings),
            calc: Calculation::run(&job, &settings),
            job,
            settings,
            edit_reveals: false,
            edit_offsets: false,
            hardware_open: false,
            invalid_fields: HashSet::new(),
            status: "Ready".to_string(),
        }
    }

    fn recalculate(&mut self) {
        self.calc = Calculation::run(&self.job, &self.settings);
        if !self.calc.lengths.is_feasible() {
            for warning in self.calc.lengths.warnings() {
                log::warn!("{}", warning);
            }
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::FieldChanged(field, raw) => {
                match form::apply(field, &raw, &mut self.job, &mut self.settings) {
                    Ok(()) => {
                        self.invalid_fields.remove(&field);
                        self.status = match self.invalid_fields.len() {
                            0 => "Ready".to_string(),
                            1 => "1 field still has an invalid value".to_string(),
                            n => format!("{} fields still have invalid values", n),
                        };
                        self.recalculate();
                    }
                    Err(e) => {
                        self.invalid_fields.insert(field);
                        self.status = e.to_string();
                    }
                }
                self.fields.set(field, raw);
            }
            Message::ModelChanged(part, model) => {
                form::part_mut(&mut self.settings.hardware, part).model = model;
                self.recalculate();
            }
            Message::RoundingSelected(rounding) => {
                self.settings.display.rounding = rounding;
                self.recalculate();
            }
            Message::DisplaySelected(display) => {
                self.settings.display.display = display;
                self.recalculate();
            }
            Message::ToggleRevealSettings(on) => self.edit_reveals = on,
            Message::ToggleGeometryOffsets(on) => self.edit_offsets = on,
            Message::ToggleHardwareSpecs => self.hardware_open = !self.hardware_open,
            Message::DownloadCsv => self.download_csv(),
        }
    }

    fn download_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Download CSV")
            .set_file_name(DEFAULT_EXPORT_FILE_NAME)
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };

        match write_csv(&self.calc.report, &path) {
            Ok(()) => self.status = format!("Saved {}", path.display()),
            Err(e) => {
                log::error!("CSV export failed: {}", e);
                self.status = e.to_string();
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let body = row![
            ui::input_panel::view_input_panel(self),
            rule::vertical(1),
            ui::results_panel::view_results_panel(self),
        ]
        .spacing(10)
        .height(Length::Fill);

        container(column![
            body,
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.status, !self.invalid_fields.is_empty()),
        ])
        .padding(10)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(app: &mut App, field: Field, raw: &str) {
        app.update(Message::FieldChanged(field, raw.to_string()));
    }

    #[test]
    fn test_valid_edit_recalculates() {
        let mut app = App::new();
        edit(&mut app, Field::Projection, "60");
        assert_eq!(app.job.projection, 60.0);
        assert_eq!(app.calc.inputs.projection, 60.0);
        assert_eq!(app.status, "Ready");
    }

    #[test]
    fn test_invalid_fields_tracked_independently() {
        let mut app = App::new();
        edit(&mut app, Field::Drop, "55.2x");
        assert!(app.invalid_fields.contains(&Field::Drop));
        assert_eq!(app.fields.get(Field::Drop), "55.2x");
        assert_eq!(app.job.drop, 55.2);

        // A valid edit elsewhere leaves the bad field flagged
        edit(&mut app, Field::Projection, "50");
        assert!(app.invalid_fields.contains(&Field::Drop));
        assert_ne!(app.status, "Ready");
        assert_eq!(app.job.projection, 50.0);

        edit(&mut app, Field::Drop, "40");
        assert!(app.invalid_fields.is_empty());
        assert_eq!(app.status, "Ready");
        assert_eq!(app.calc.inputs.drop, 40.0);
    }

    #[test]
    fn test_display_selection_reformats_report() {
        let mut app = App::new();
        app.update(Message::DisplaySelected(DisplayMode::Decimal));
        assert_eq!(app.calc.report.row("Rod Length").map(|r| r.length.as_str()), Some("26.4375\""));
    }
}
