//! GTK4 front end
//!
//! - `toolkit.rs` - [`GtkToolkit`], the GTK4 implementation of `Toolkit`
//! - `picker.rs` - Modal file picker used by browse rows
//! - `app.rs` - Settings window with Apply/Cancel

mod app;
mod picker;
mod toolkit;

pub use app::App;
pub use picker::GtkPathPicker;
pub use toolkit::GtkToolkit;
