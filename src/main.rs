use iced::widget::{column, container, keyed_column, scrollable, text};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;
mod state;
mod ui;

use config::AppConfig;
use state::{Field, RecordForm, RecordStore, StoreError};

/// Main application state
struct ProductList {
    /// Title, description and theme
    config: AppConfig,
    /// The product list; only `update` writes to it
    store: RecordStore,
    /// What the user is currently typing
    form: RecordForm,
    /// Status message to display to the user
    status: String,
    /// Shows a rejected submission to the user
    notify: fn(&str, &StoreError),
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited one of the form inputs
    FieldChanged(Field, String),
    /// User pressed "Add" or hit Enter in the form
    Submit,
    /// User wants to pick the image from disk
    BrowseImage,
    /// A product row asked to remove everything with this name
    Remove(String),
}

impl ProductList {
    /// Create a new instance of the application
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        info!(title = %config.title, "Product list started");

        (
            ProductList {
                config,
                store: RecordStore::new(),
                form: RecordForm::default(),
                status: "Ready.".to_string(),
                notify: ui::notice::alert,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.config.title.clone()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                self.form.set(field, value);
            }
            Message::Submit => match self.store.submit(&self.form) {
                Ok(id) => {
                    let name = self.store.get(id).map(|r| r.name()).unwrap_or_default();
                    self.status = format!("Added \"{}\".", name);
                    // Typed values stay in the inputs, like a form whose submit was intercepted
                    debug!(%id, revision = self.store.revision(), "Submission accepted");
                }
                Err(error) => {
                    self.status = ui::notice::status_line(&error);
                    (self.notify)(&self.config.title, &error);
                }
            },
            Message::BrowseImage => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select Product Image")
                    .add_filter("Images", &ui::form::IMAGE_EXTENSIONS)
                    .pick_file();

                if let Some(path) = picked {
                    debug!(path = %path.display(), "Picked image");
                    self.form.set(Field::ImageRef, path.display().to_string());
                }
            }
            Message::Remove(name) => {
                let removed = self.store.remove_by_name(&name);
                self.status = format!("Removed {} product(s) named \"{}\".", removed, name);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text(self.config.title.as_str()).size(36),
            text(self.config.description.as_str()).size(14),
            text(format!("{} product(s) · {}", self.store.len(), self.status)).size(14),
        ]
        .spacing(6);

        // Rows are keyed by record id, so equal names never confuse the diffing
        let list: Element<Message> = if self.store.is_empty() {
            text("No products yet.").into()
        } else {
            keyed_column(self.store.records().iter().map(|record| {
                (record.id(), ui::record_view(record, Message::Remove))
            }))
            .spacing(20)
            .into()
        };

        let content = column![header, ui::form_view(&self.form), scrollable(list)]
            .spacing(30)
            .padding(40)
            .max_width(720);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.config.theme.to_theme()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wgpu_core=warn,wgpu_hal=warn,naga=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_tracing();

    let config = AppConfig::default();

    iced::application(ProductList::title, ProductList::update, ProductList::view)
        .theme(ProductList::theme)
        .centered()
        .run_with(move || ProductList::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> ProductList {
        let mut app = ProductList::new(AppConfig::default()).0;
        app.notify = |_, _| {};
        app
    }

    fn fill(app: &mut ProductList, name: &str, description: &str, image: &str) {
        let _ = app.update(Message::FieldChanged(Field::Name, name.to_string()));
        let _ = app.update(Message::FieldChanged(Field::Description, description.to_string()));
        let _ = app.update(Message::FieldChanged(Field::ImageRef, image.to_string()));
    }

    #[test]
    fn test_submit_adds_record_and_keeps_form_values() {
        let mut app = app();
        fill(&mut app, "Chair", "Wooden chair", "http://x/img.png");
        let _ = app.update(Message::Submit);

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.form, RecordForm::new("Chair", "Wooden chair", "http://x/img.png"));
        assert_eq!(app.status, "Added \"Chair\".");
    }

    #[test]
    fn test_incomplete_submit_leaves_list_untouched() {
        let mut app = app();
        fill(&mut app, "Chair", "Wooden chair", "http://x/img.png");
        let _ = app.update(Message::Submit);
        let revision = app.store.revision();

        let _ = app.update(Message::FieldChanged(Field::Name, String::new()));
        let _ = app.update(Message::Submit);

        let names: Vec<&str> = app.store.records().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Chair"]);
        assert_eq!(app.store.revision(), revision);
        assert_eq!(app.status, "Fill in all fields (missing: name)");
    }

    #[test]
    fn test_remove_message_drops_all_with_name() {
        let mut app = app();
        fill(&mut app, "Chair", "Wooden chair", "http://x/img.png");
        let _ = app.update(Message::Submit);
        fill(&mut app, "Chair", "Metal chair", "http://y/img.png");
        let _ = app.update(Message::Submit);
        fill(&mut app, "Table", "Oak table", "table.png");
        let _ = app.update(Message::Submit);

        let _ = app.update(Message::Remove("Chair".to_string()));

        let names: Vec<&str> = app.store.records().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Table"]);
        assert_eq!(app.status, "Removed 2 product(s) named \"Chair\".");
    }

    #[test]
    fn test_title_and_theme_follow_config() {
        let app = app();
        assert_eq!(app.title(), "Product Manager");
        assert_eq!(app.theme(), Theme::Dark);
    }
}
