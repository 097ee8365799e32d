/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the record store and the UI layer.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a record, generated once when the record is created.
///
/// Names are user input and may collide, so the list is keyed by this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        RecordId(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Represents a single product in the list
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    name: String,
    description: String,
    /// Image locator as typed by the user (path or URL), never validated
    image_ref: String,
    created_at: DateTime<Utc>,
}

impl Record {
    /// Build a record from a form whose fields have already been checked
    pub(crate) fn from_form(form: &RecordForm) -> Self {
        Record {
            id: RecordId::new(),
            name: form.name.clone(),
            description: form.description.clone(),
            image_ref: form.image_ref.clone(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// One of the three entry fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    ImageRef,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 3] = [Field::Name, Field::Description, Field::ImageRef];

    /// Placeholder shown in the empty text input
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "product name",
            Field::Description => "product description",
            Field::ImageRef => "image link",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::ImageRef => "image",
        };
        f.write_str(label)
    }
}

/// Draft contents of the entry form
///
/// Values are kept exactly as typed. No trimming happens anywhere, so a
/// whitespace-only value counts as filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub name: String,
    pub description: String,
    pub image_ref: String,
}

impl RecordForm {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        RecordForm {
            name: name.into(),
            description: description.into(),
            image_ref: image_ref.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::ImageRef => &self.image_ref,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Description => self.description = value,
            Field::ImageRef => self.image_ref = value,
        }
    }

    /// Fields with zero length, in form order
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_in_form_order() {
        let form = RecordForm::new("", "desc", "");
        assert_eq!(form.missing_fields(), vec![Field::Name, Field::ImageRef]);
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let form = RecordForm::new(" ", "\t", "  ");
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut form = RecordForm::default();
        form.set(Field::Description, "Wooden chair".to_string());
        assert_eq!(form.get(Field::Description), "Wooden chair");
        assert_eq!(form.missing_fields(), vec![Field::Name, Field::ImageRef]);
    }

    #[test]
    fn test_record_copies_form_values() {
        let form = RecordForm::new("Chair", "Wooden chair", "http://x/img.png");
        let record = Record::from_form(&form);

        assert_eq!(record.name(), "Chair");
        assert_eq!(record.description(), "Wooden chair");
        assert_eq!(record.image_ref(), "http://x/img.png");
    }

    #[test]
    fn test_ids_are_unique() {
        let form = RecordForm::new("Chair", "Wooden chair", "img.png");
        let a = Record::from_form(&form);
        let b = Record::from_form(&form);
        assert_ne!(a.id(), b.id());
    }
}
