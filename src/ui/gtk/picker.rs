//! Modal file selection on top of `gtk4::FileDialog`.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{gio, FileDialog, Window};
use tracing::debug;

use crate::ui::{PathPicker, PickRequest};

/// Opens a `FileDialog` and blocks until it is dismissed.
///
/// `FileDialog` only has an async API, so the picker spins the default GLib
/// main context until the callback has delivered a result. Other events keep
/// being processed while it waits.
pub struct GtkPathPicker {
    parent: Option<Window>,
}

impl GtkPathPicker {
    pub fn new(parent: Option<Window>) -> Self {
        Self { parent }
    }
}

impl PathPicker for GtkPathPicker {
    fn pick_path(&self, request: &PickRequest) -> Option<PathBuf> {
        let dialog = FileDialog::builder()
            .title(request.title.as_str())
            .modal(true)
            .build();

        if let Some(folder) = &request.initial_folder {
            dialog.set_initial_folder(Some(&gio::File::for_path(folder)));
        }
        if let Some(name) = &request.initial_name {
            dialog.set_initial_name(Some(name.as_str()));
        }

        // Outer None: still open. Inner None: cancelled.
        let outcome: Rc<RefCell<Option<Option<PathBuf>>>> = Rc::new(RefCell::new(None));
        {
            let outcome = outcome.clone();
            dialog.open(
                self.parent.as_ref(),
                gio::Cancellable::NONE,
                move |result| {
                    let picked = match result {
                        Ok(file) => file.path(),
                        Err(e) => {
                            debug!("File dialog closed without a selection: {}", e);
                            None
                        }
                    };
                    *outcome.borrow_mut() = Some(picked);
                },
            );
        }

        let main_context = glib::MainContext::default();
        while outcome.borrow().is_none() {
            main_context.iteration(true);
        }

        let picked = outcome.borrow_mut().take().flatten();
        picked
    }
}
