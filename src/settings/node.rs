//! Rendered widget paired with its deferred commit.

use std::fmt;

/// A widget handle plus the operation that copies the widget's current
/// state back into the setting it was made from.
///
/// The host places [`SettingNode::widget`] in its layout and calls
/// [`SettingNode::apply_to_setting`] when the user confirms (e.g. "Apply").
/// Dropping the node without applying discards the user's edits.
pub struct SettingNode<W> {
    widget: W,
    apply: Box<dyn Fn()>,
}

impl<W> SettingNode<W> {
    pub fn new<F>(widget: W, apply: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            widget,
            apply: Box::new(apply),
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Copies the current UI state into the setting. Safe to call repeatedly.
    pub fn apply_to_setting(&self) {
        (self.apply)();
    }

    pub fn into_widget(self) -> W {
        self.widget
    }
}

impl<W: fmt::Debug> fmt::Debug for SettingNode<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingNode")
            .field("widget", &self.widget)
            .finish_non_exhaustive()
    }
}
