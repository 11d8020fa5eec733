//! GTK4 widgets for the settings model.

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Button, CheckButton, Entry, Label, Orientation, Widget, Window};

use super::picker::GtkPathPicker;
use crate::ui::{BrowseHandler, TextControl, ToggleControl, Toolkit};

/// Spacing between the label, field and button of a row
const ROW_SPACING: i32 = 5;

/// [`Toolkit`] backed by GTK4.
///
/// Must only be used on the GTK main thread after GTK has been initialised
/// (e.g. inside `Application::connect_activate`).
#[derive(Clone, Copy, Debug, Default)]
pub struct GtkToolkit;

impl ToggleControl for CheckButton {
    fn is_active(&self) -> bool {
        CheckButtonExt::is_active(self)
    }
}

impl TextControl for Entry {
    fn text(&self) -> String {
        EditableExt::text(self).to_string()
    }

    fn set_text(&self, text: &str) {
        EditableExt::set_text(self, text);
    }
}

impl GtkToolkit {
    /// Label + expanding entry in a horizontal box, left aligned and
    /// vertically centred.
    fn row(label: &str, text: &str, tip: Option<&str>) -> (GtkBox, Entry) {
        let label = Label::builder().label(label).halign(Align::Start).build();

        let entry = Entry::builder().text(text).hexpand(true).build();
        if let Some(tip) = tip {
            entry.set_placeholder_text(Some(tip));
            entry.set_tooltip_text(Some(tip));
        }

        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(ROW_SPACING)
            .halign(Align::Fill)
            .valign(Align::Center)
            .build();
        row.append(&label);
        row.append(&entry);

        (row, entry)
    }
}

impl Toolkit for GtkToolkit {
    type Widget = Widget;
    type Toggle = CheckButton;
    type Text = Entry;

    fn check_box(&self, label: &str, active: bool, tip: Option<&str>) -> (Widget, CheckButton) {
        let check_box = CheckButton::builder().label(label).active(active).build();
        if let Some(tip) = tip {
            check_box.set_tooltip_text(Some(tip));
        }

        (check_box.clone().upcast(), check_box)
    }

    fn text_row(&self, label: &str, text: &str, tip: Option<&str>) -> (Widget, Entry) {
        let (row, entry) = Self::row(label, text, tip);
        (row.upcast(), entry)
    }

    fn browse_row(
        &self,
        label: &str,
        text: &str,
        tip: Option<&str>,
        on_browse: BrowseHandler<Entry>,
    ) -> (Widget, Entry) {
        let (row, entry) = Self::row(label, text, tip);

        let browse = Button::builder().label("Browse").build();
        {
            let entry = entry.clone();
            browse.connect_clicked(move |button| {
                // Parent the dialog on whichever window the row ended up in
                let parent = button
                    .root()
                    .and_then(|root| root.downcast::<Window>().ok());
                let picker = GtkPathPicker::new(parent);
                on_browse(&entry, &picker);
            });
        }
        row.append(&browse);

        (row.upcast(), entry)
    }
}
