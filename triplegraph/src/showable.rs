//! Show/hide toggles with lazily built content.
//!
//! A [`Showable`] starts hidden. The first time it is shown its content is
//! built; hiding and showing again reuses that content.

/// Default toggle label while the content is hidden.
pub const DEFAULT_SHOW_TEXT: &str = "Show";

/// Default toggle label while the content is visible.
pub const DEFAULT_HIDE_TEXT: &str = "Hide";

/// Toggle state of a collapsible panel holding content of type `T`.
#[derive(Debug, Clone)]
pub struct Showable<T> {
    hidden: bool,
    show_text: String,
    hide_text: String,
    content: Option<T>,
}

impl<T> Default for Showable<T> {
    fn default() -> Self {
        Self::new(DEFAULT_SHOW_TEXT, DEFAULT_HIDE_TEXT)
    }
}

impl<T> Showable<T> {
    /// Creates a hidden panel with the given toggle labels.
    pub fn new(show_text: impl Into<String>, hide_text: impl Into<String>) -> Self {
        Self {
            hidden: true,
            show_text: show_text.into(),
            hide_text: hide_text.into(),
            content: None,
        }
    }

    /// Returns `true` while the panel is hidden.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns `true` once the content has been built.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.content.is_some()
    }

    /// Returns the label the toggle currently shows.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.hidden {
            &self.show_text
        } else {
            &self.hide_text
        }
    }

    /// Returns the content, if built.
    #[must_use]
    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    /// Flips visibility without building content.
    ///
    /// Returns the new toggle label.
    pub fn toggle(&mut self) -> &str {
        self.hidden = !self.hidden;
        self.label()
    }

    /// Flips visibility, building the content with `init` the first time the
    /// panel becomes visible.
    ///
    /// Returns the new toggle label.
    pub fn toggle_with<F>(&mut self, init: F) -> &str
    where
        F: FnOnce() -> T,
    {
        self.hidden = !self.hidden;
        if !self.hidden && self.content.is_none() {
            self.content = Some(init());
        }
        self.label()
    }
}
