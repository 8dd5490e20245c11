//! Status Bar (Bottom)

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar; errors show in red
pub fn view_status_bar(status: &str, has_error: bool) -> Element<'_, Message> {
    let color = if has_error { [0.8, 0.2, 0.2] } else { [0.4, 0.4, 0.4] };

    row![
        text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10).color(color),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
