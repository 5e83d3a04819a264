use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::core::models::Notification;
use crate::presentation::app_theme;

pub fn render_toast<'a, Message: 'a>(notification: &'a Notification) -> Element<'a, Message> {
    let mut content = column![text(notification.title.as_str()).size(16)].spacing(4);

    if let Some(message) = &notification.message {
        content = content.push(text(message.as_str()).size(13));
    }

    let style = notification.style;
    let toast = container(content)
        .padding(12)
        .style(move |_theme| app_theme::toast_container_style(style));

    container(toast)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
}
