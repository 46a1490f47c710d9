//! State behind the interactive triple table.
//!
//! Clicking a URI with a modifier either highlights every occurrence of it in
//! a cycling color, or moves the rows mentioning it to the top of the table.
//! Clicking the header with the same modifiers resets either state.

use std::collections::{HashMap, HashSet};

/// Highlight colors, assigned in order and then reused.
pub const HIGHLIGHT_COLORS: [&str; 6] = ["violet", "blue", "red", "indigo", "green", "orange"];

/// Highlighting and ordering state of a triple table.
#[derive(Debug, Clone, Default)]
pub struct TripleTable {
    rows: Vec<HashSet<String>>,
    order: Vec<usize>,
    highlighted: HashMap<String, &'static str>,
    next_color: usize,
}

impl TripleTable {
    /// Creates a table from the URIs mentioned in each row.
    pub fn new<R, U>(rows: R) -> Self
    where
        R: IntoIterator<Item = U>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        let rows: Vec<HashSet<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        let order = (0..rows.len()).collect();
        Self {
            rows,
            order,
            highlighted: HashMap::new(),
            next_color: 0,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the original row indexes in display order.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the highlight color of `uri`, if any.
    #[must_use]
    pub fn color_of(&self, uri: &str) -> Option<&'static str> {
        self.highlighted.get(uri).copied()
    }

    /// Highlights `uri` with the next color, or removes its highlight.
    ///
    /// Returns the new color, or `None` if the highlight was removed.
    pub fn toggle_highlight(&mut self, uri: &str) -> Option<&'static str> {
        if self.highlighted.remove(uri).is_some() {
            return None;
        }
        let color = HIGHLIGHT_COLORS[self.next_color];
        self.next_color = (self.next_color + 1) % HIGHLIGHT_COLORS.len();
        self.highlighted.insert(uri.to_owned(), color);
        Some(color)
    }

    /// Removes all highlights and restarts the color cycle.
    pub fn reset_colors(&mut self) {
        self.highlighted.clear();
        self.next_color = 0;
    }

    /// Moves rows mentioning `uri` to the top.
    ///
    /// Both groups keep their original relative order.
    pub fn bring_to_front(&mut self, uri: &str) {
        let rows = &self.rows;
        self.order
            .sort_by_key(|&index| (!rows[index].contains(uri), index));
    }

    /// Restores the original row order.
    pub fn reset_order(&mut self) {
        self.order.sort_unstable();
    }
}
