//! Input Panel (Left Sidebar)
//!
//! Displays:
//! - Input parameters (projection, drop, clip setback, quantity)
//! - Display settings (rounding precision, display format)
//! - Reveal settings and geometry offsets behind their checkboxes
//! - Hardware specifications behind an expander

use iced::widget::{button, checkbox, column, container, pick_list, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use crt_core::format::{DisplayMode, RoundingMode};

use crate::form::{self, Field, Part};
use crate::{App, Message};

const SIDEBAR_WIDTH: f32 = 340.0;
const LABEL_WIDTH: f32 = 190.0;

/// Render the sidebar
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let inputs = column![
        text("Input Parameters").size(14),
        Space::new().height(4),
        labeled_input(app, Field::Projection),
        labeled_input(app, Field::Drop),
        labeled_input(app, Field::ClipSetback),
        labeled_input(app, Field::Quantity),
    ]
    .spacing(6);

    let display = column![
        text("Display Settings").size(14),
        Space::new().height(4),
        row![
            text("Rounding Precision").size(11).width(Length::Fixed(LABEL_WIDTH)),
            pick_list(
                &RoundingMode::ALL[..],
                Some(app.settings.display.rounding),
                Message::RoundingSelected
            )
            .width(Length::Fill)
            .text_size(11),
        ]
        .align_y(Alignment::Center),
        row![
            text("Display Format").size(11).width(Length::Fixed(LABEL_WIDTH)),
            pick_list(
                &DisplayMode::ALL[..],
                Some(app.settings.display.display),
                Message::DisplaySelected
            )
            .width(Length::Fill)
            .text_size(11),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(6);

    let mut panel = column![
        inputs,
        Space::new().height(12),
        display,
        Space::new().height(12),
        view_reveal_settings(app),
        Space::new().height(8),
        view_geometry_offsets(app),
        Space::new().height(8),
        view_hardware_specs(app),
    ];

    if !app.invalid_fields.is_empty() {
        panel = panel.push(Space::new().height(8));
        for field in Field::ALL.into_iter().filter(|f| app.invalid_fields.contains(f)) {
            panel = panel.push(text(format!("Check value: {}", field.label())).size(11).color([0.8, 0.2, 0.2]));
        }
    }

    container(scrollable(panel.padding(8)))
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_reveal_settings(app: &App) -> Column<'_, Message> {
    let toggle = checkbox(app.edit_reveals)
        .label("Edit Reveal Settings")
        .on_toggle(Message::ToggleRevealSettings)
        .text_size(11);

    let section = column![toggle].spacing(6);
    if !app.edit_reveals {
        return section;
    }
    section
        .push(labeled_input(app, Field::ClevisReveal))
        .push(labeled_input(app, Field::TbReveal))
}

fn view_geometry_offsets(app: &App) -> Column<'_, Message> {
    let toggle = checkbox(app.edit_offsets)
        .label("Edit Tie-Back Geometry Offsets")
        .on_toggle(Message::ToggleGeometryOffsets)
        .text_size(11);

    let section = column![toggle].spacing(6);
    if !app.edit_offsets {
        return section;
    }
    section
        .push(labeled_input(app, Field::WallAxis))
        .push(labeled_input(app, Field::StructureAxis))
}

fn view_hardware_specs(app: &App) -> Column<'_, Message> {
    let header = if app.hardware_open {
        "Hardware Specifications ▲"
    } else {
        "Hardware Specifications ▼"
    };
    let expander = button(text(header).size(11))
        .on_press(Message::ToggleHardwareSpecs)
        .padding(Padding::from([4, 8]))
        .width(Length::Fill)
        .style(if app.hardware_open { button::primary } else { button::secondary });

    let section = column![expander].spacing(6);
    if !app.hardware_open {
        return section;
    }

    section
        .push(model_input(app, Part::StructureClevis))
        .push(labeled_input(app, Field::Clevis1Len))
        .push(Space::new().height(4))
        .push(model_input(app, Part::Turnbuckle))
        .push(labeled_input(app, Field::TurnbuckleLen))
        .push(Space::new().height(4))
        .push(model_input(app, Part::WallClevis))
        .push(labeled_input(app, Field::Clevis2Len))
}

fn labeled_input(app: &App, field: Field) -> Element<'_, Message> {
    let label = if app.invalid_fields.contains(&field) {
        text(field.label()).size(11).color([0.8, 0.2, 0.2])
    } else {
        text(field.label()).size(11)
    };

    row![
        label.width(Length::Fixed(LABEL_WIDTH)),
        text_input("", app.fields.get(field))
            .on_input(move |s| Message::FieldChanged(field, s))
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn model_input(app: &App, part: Part) -> Element<'_, Message> {
    row![
        text(part.label()).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input("", &form::part(&app.settings.hardware, part).model)
            .on_input(move |s| Message::ModelChanged(part, s))
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
