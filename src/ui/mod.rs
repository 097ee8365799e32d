/// User interface module
///
/// - `form.rs` - the entry form
/// - `record_view.rs` - one product row with its remove button
/// - `notice.rs` - blocking validation notice

pub mod form;
pub mod notice;
pub mod record_view;

pub use form::form_view;
pub use record_view::record_view;
