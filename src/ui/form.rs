use iced::widget::{button, column, row, text_input};
use iced::{Element, Length};

use crate::state::{Field, RecordForm};
use crate::Message;

/// Extensions offered by the image picker
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Entry form with one text input per field.
///
/// Enter in any input submits, like a browser form.
pub fn form_view(form: &RecordForm) -> Element<'_, Message> {
    let input = move |field: Field| {
        text_input(field.placeholder(), form.get(field))
            .on_input(move |value| Message::FieldChanged(field, value))
            .on_submit(Message::Submit)
            .padding(10)
            .width(Length::Fill)
    };

    column![
        input(Field::Name),
        input(Field::Description),
        row![
            input(Field::ImageRef),
            button("Browse…").on_press(Message::BrowseImage).padding(10),
        ]
        .spacing(8),
        button("Add")
            .style(button::success)
            .on_press(Message::Submit)
            .padding(10)
            .width(Length::Fill),
    ]
    .spacing(16)
    .into()
}
