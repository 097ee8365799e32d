/// Rendering of a single product entry
///
/// The view owns nothing. It receives a record plus a callback that turns the
/// record's name into a removal message, and hands that message back on press.
use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use std::path::PathBuf;

use crate::state::Record;

const THUMBNAIL_SIZE: f32 = 80.0;

/// Where an image reference points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A path on this machine, given directly or as a `file://` URL
    Local(PathBuf),
    /// Any other URL. Never fetched, only displayed as text.
    Remote(String),
}

impl ImageSource {
    /// Classify a reference exactly as typed by the user
    pub fn resolve(reference: &str) -> Self {
        if let Some(path) = reference.strip_prefix("file://") {
            return ImageSource::Local(PathBuf::from(path));
        }

        if reference.contains("://") {
            ImageSource::Remote(reference.to_string())
        } else {
            ImageSource::Local(PathBuf::from(reference))
        }
    }
}

/// Message the remove button of `record` emits
pub fn remove_message<Message>(record: &Record, on_remove: impl Fn(String) -> Message) -> Message {
    on_remove(record.name().to_string())
}

/// Build the row for one record.
///
/// `on_remove` is called with the record's own name when the remove button is pressed.
pub fn record_view<'a, Message: Clone + 'a>(
    record: &'a Record,
    on_remove: impl Fn(String) -> Message,
) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match ImageSource::resolve(record.image_ref()) {
        ImageSource::Local(path) => image(image::Handle::from_path(path))
            .width(Length::Fixed(THUMBNAIL_SIZE))
            .height(Length::Fixed(THUMBNAIL_SIZE))
            .content_fit(ContentFit::Cover)
            .into(),
        ImageSource::Remote(url) => container(text(url).size(10))
            .width(Length::Fixed(THUMBNAIL_SIZE))
            .height(Length::Fixed(THUMBNAIL_SIZE))
            .center_y(Length::Fixed(THUMBNAIL_SIZE))
            .into(),
    };

    let added = record
        .created_at()
        .with_timezone(&chrono::Local)
        .format("added %H:%M");

    let details = column![
        text(record.name()).size(18),
        text(record.description()),
        text(added.to_string()).size(12),
    ]
    .spacing(4)
    .width(Length::Fill);

    let remove = button("Remove")
        .style(button::danger)
        .on_press(remove_message(record, on_remove));

    container(
        row![thumbnail, details, remove]
            .spacing(40)
            .align_y(Alignment::Center),
    )
    .style(container::bordered_box)
    .padding(8)
    .width(Length::Fill)
    .into()
}
