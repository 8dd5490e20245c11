//! Results Panel (Main Area)
//!
//! Shows the report table, a fabrication warning when the rod or tube
//! comes out non-positive, and the CSV download button.

use iced::widget::{button, column, container, row, rule, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use crt_core::report::{Report, COLUMNS};

use crate::{App, Message};

const COMPONENT_WIDTH: f32 = 260.0;
const LENGTH_WIDTH: f32 = 140.0;

/// Render the results panel
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let header = row![
        text("CRT Arm Calculator").size(24),
        Space::new().width(Length::Fill),
        button(text("Download CSV").size(11))
            .on_press(Message::DownloadCsv)
            .padding(Padding::from([6, 12]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    let mut content = column![header, Space::new().height(10)];

    if !app.calc.lengths.is_feasible() {
        let mut warning = column![text("CHECK CONFIGURATION").size(14).color([0.8, 0.2, 0.2])].spacing(4);
        for line in app.calc.lengths.warnings() {
            warning = warning.push(text(line).size(11).color([0.8, 0.2, 0.2]));
        }
        content = content.push(warning).push(Space::new().height(10));
    }

    content = content.push(view_table(&app.calc.report));

    container(scrollable(content.padding(8)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_table(report: &Report) -> Column<'_, Message> {
    let header = row![
        text(COLUMNS[0]).size(11).width(Length::Fixed(COMPONENT_WIDTH)),
        text(COLUMNS[1]).size(11).width(Length::Fixed(LENGTH_WIDTH)),
        text(COLUMNS[2]).size(11),
    ]
    .spacing(8);

    let mut table = column![header, rule::horizontal(1)].spacing(4);

    for report_row in report.rows() {
        if report_row.is_separator() {
            table = table.push(Space::new().height(8));
            continue;
        }
        if report_row.length.is_empty() && report_row.note.is_empty() {
            // Section heading
            table = table.push(text(&report_row.component).size(12).color([0.3, 0.3, 0.6]));
            continue;
        }
        table = table.push(
            row![
                text(&report_row.component).size(11).width(Length::Fixed(COMPONENT_WIDTH)),
                text(&report_row.length).size(11).width(Length::Fixed(LENGTH_WIDTH)),
                text(&report_row.note).size(11).color([0.4, 0.4, 0.4]),
            ]
            .spacing(8),
        );
    }

    table
}
