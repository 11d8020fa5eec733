// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! GTK4 settings window
//!
//! Renders a [`SettingsRegistry`] as a form and only commits the edits
//! when the user presses Apply.
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Renders one SettingNode per visible setting, on a staged copy
//!   ├─ Apply  → apply_all(nodes), save the copy, then adopt it and close
//!   │           (save failure: alert, window stays open, registry untouched)
//!   └─ Cancel → close, nodes dropped, registry untouched
//! ```

use gtk4::prelude::*;
use gtk4::{
    Align, AlertDialog, Application, ApplicationWindow, Box as GtkBox, Button, Orientation,
    ScrolledWindow,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, info};

use super::toolkit::GtkToolkit;
use crate::config::{commit_staged, ConfigError, SettingsFile};
use crate::settings::SettingsRegistry;

/// GTK4 application showing one settings form
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Settings as last committed
    registry: Rc<RefCell<SettingsRegistry>>,
    /// Where Apply writes the result, if anywhere
    output: Option<Rc<SettingsFile>>,
    /// Failure of the most recent Apply, cleared by a successful one
    save_error: Rc<RefCell<Option<ConfigError>>>,
}

impl App {
    /// Creates the application around `registry`.
    ///
    /// When `output` is set, Apply also saves the registry to that file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use settings_model::settings::{BooleanSetting, SettingsRegistry};
    /// use settings_model::ui::gtk::App;
    ///
    /// let mut registry = SettingsRegistry::new();
    /// registry.register(BooleanSetting::new("dark_mode"))?;
    ///
    /// let registry = App::new(registry, None).run()?;
    /// println!("{}", registry.to_json_string()?);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(registry: SettingsRegistry, output: Option<SettingsFile>) -> Self {
        let app = Application::builder()
            .application_id("com.tidynest.settings-model")
            .build();

        Self {
            app,
            registry: Rc::new(RefCell::new(registry)),
            output: output.map(Rc::new),
            save_error: Rc::new(RefCell::new(None)),
        }
    }

    /// Runs the GTK4 main loop and returns the registry as it stands when the
    /// window closes (edited if the user applied, unchanged if not).
    ///
    /// # Errors
    ///
    /// Returns the save error when the last Apply failed to write the output
    /// file and the window was then closed without a successful Apply. The
    /// registry is unchanged in that case.
    pub fn run(self) -> Result<SettingsRegistry, ConfigError> {
        let registry = self.registry.clone();
        let output = self.output.clone();
        let save_error = self.save_error.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, registry.clone(), output.clone(), save_error.clone());
        });

        // Run the application (blocks until exit)
        self.app.run_with_args::<&str>(&[]);

        if let Some(e) = self.save_error.borrow_mut().take() {
            return Err(e);
        }

        let result = self.registry.borrow().clone();
        Ok(result)
    }

    fn build_ui(
        app: &Application,
        registry: Rc<RefCell<SettingsRegistry>>,
        output: Option<Rc<SettingsFile>>,
        save_error: Rc<RefCell<Option<ConfigError>>>,
    ) {
        let window = ApplicationWindow::builder()
            .application(app)
            .title("Settings")
            .default_width(520)
            .default_height(360)
            .build();

        let form = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .margin_start(20)
            .margin_end(20)
            .margin_top(20)
            .margin_bottom(20)
            .build();

        // Nodes commit into a detached copy; the registry only changes once
        // Apply has saved successfully
        let staged = Rc::new(registry.borrow().clone());
        let nodes = Rc::new(staged.make_nodes(&GtkToolkit));
        for node in nodes.iter() {
            form.append(node.widget());
        }

        let scrolled_window = ScrolledWindow::builder()
            .vexpand(true)
            .child(&form)
            .build();

        let button_box = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .halign(Align::End)
            .margin_start(20)
            .margin_end(20)
            .margin_bottom(20)
            .build();

        let cancel_button = Button::builder().label("Cancel").build();
        let apply_button = Button::builder().label("Apply").build();
        apply_button.add_css_class("suggested-action");

        button_box.append(&cancel_button);
        button_box.append(&apply_button);

        let main_box = GtkBox::new(Orientation::Vertical, 0);
        main_box.append(&scrolled_window);
        main_box.append(&button_box);
        window.set_child(Some(&main_box));

        // Cancel: drop the edits
        {
            let window = window.clone();
            cancel_button.connect_clicked(move |_| {
                info!("Settings dialog cancelled");
                window.close();
            });
        }

        // Apply: flush every node into the staged copy, persist, then adopt
        {
            let window = window.clone();
            apply_button.connect_clicked(move |_| {
                SettingsRegistry::apply_all(&nodes);

                let result =
                    commit_staged(&staged, &mut registry.borrow_mut(), output.as_deref());

                match result {
                    Ok(()) => {
                        save_error.borrow_mut().take();
                        window.close();
                    }
                    Err(e) => {
                        error!("Failed to save settings: {}", e);

                        let error_dialog = AlertDialog::builder()
                            .modal(true)
                            .message("Save Failed")
                            .detail(format!("Failed to save settings:\n\n{}", e))
                            .buttons(vec!["OK"])
                            .build();
                        error_dialog.show(Some(&window));

                        *save_error.borrow_mut() = Some(e);
                    }
                }
            });
        }

        window.present();
    }
}
