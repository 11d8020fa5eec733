//! Toolkit seam
//!
//! The settings model only needs a handful of things from a UI toolkit:
//! render a control pre-seeded with a value, read its state back, attach an
//! optional hint, and run a modal "pick a path" interaction. These traits
//! describe exactly that, so the model never names a concrete widget type.

use std::path::PathBuf;

/// Read-back handle for a check box style control.
pub trait ToggleControl {
    fn is_active(&self) -> bool;
}

/// Read/write handle for an editable text field.
pub trait TextControl {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// Parameters for a modal file picker.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PickRequest {
    /// Dialog title
    pub title: String,
    /// Directory the dialog opens in, if any
    pub initial_folder: Option<PathBuf>,
    /// File name pre-selected in that directory, if any
    pub initial_name: Option<String>,
}

/// Runs a modal path selection.
///
/// Blocks the caller until the user confirms or cancels. Cancel is `None`,
/// not an error.
pub trait PathPicker {
    fn pick_path(&self, request: &PickRequest) -> Option<PathBuf>;
}

/// Callback run when a browse button is activated. Receives the row's text
/// field and a picker bound to the window the button lives in.
pub type BrowseHandler<T> = Box<dyn Fn(&T, &dyn PathPicker)>;

/// Widget factory used by [`crate::settings::SettingType::make_node`].
pub trait Toolkit {
    /// Opaque widget handle placed into the host layout
    type Widget: 'static;
    type Toggle: ToggleControl + 'static;
    type Text: TextControl + 'static;

    /// A labelled check box set to `active`, with `tip` as tooltip.
    fn check_box(&self, label: &str, active: bool, tip: Option<&str>) -> (Self::Widget, Self::Toggle);

    /// A label followed by a text field holding `text`. `tip` is used as
    /// placeholder and tooltip.
    fn text_row(&self, label: &str, text: &str, tip: Option<&str>) -> (Self::Widget, Self::Text);

    /// Like [`Toolkit::text_row`] with a trailing "Browse" button that runs
    /// `on_browse` when activated.
    fn browse_row(
        &self,
        label: &str,
        text: &str,
        tip: Option<&str>,
        on_browse: BrowseHandler<Self::Text>,
    ) -> (Self::Widget, Self::Text);
}
