//! Single-line text entry with autocomplete suggestions
//!
//! Every change to the text (typed, deleted or set programmatically) runs the
//! same pipeline: filter the candidate set with the matcher, then hand the
//! result to the [`SuggestionList`] which decides whether the popup shows.

use std::fmt;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::config::DEFAULT_MAX_VISIBLE_ROWS;
use crate::error::WidgetError;
use crate::input::matcher::{default_matcher, filter, Matcher};
use crate::widget::suggestions::SuggestionList;

/// Construction options for an [`AutocompleteEntry`]
#[derive(Clone)]
pub struct AutocompleteOptions {
    /// Pool of strings offered for completion, shared read-only
    pub candidates: Arc<[String]>,
    /// Predicate deciding which candidates match the text
    pub matcher: Matcher,
    /// Height cap of the suggestion popup
    pub max_visible_rows: usize,
}

impl AutocompleteOptions {
    /// Options with the default substring matcher and popup height
    pub fn new(candidates: impl Into<Arc<[String]>>) -> Self {
        Self {
            candidates: candidates.into(),
            matcher: default_matcher(),
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
        }
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_max_visible_rows(mut self, rows: usize) -> Self {
        self.max_visible_rows = rows;
        self
    }

    fn validate(&self) -> Result<(), WidgetError> {
        if self.max_visible_rows == 0 {
            return Err(WidgetError::InvalidOption {
                name: "max_visible_rows",
                reason: "the popup needs at least one row".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for AutocompleteOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteOptions")
            .field("candidates", &self.candidates.len())
            .field("max_visible_rows", &self.max_visible_rows)
            .finish_non_exhaustive()
    }
}

/// Text entry bound to a candidate set and a suggestion popup
#[derive(Clone)]
pub struct AutocompleteEntry {
    candidates: Arc<[String]>,
    matcher: Matcher,
    text: String,
    /// Byte offset of the cursor in `text`, always on a grapheme boundary
    cursor: usize,
    suggestions: SuggestionList,
}

impl AutocompleteEntry {
    pub fn new(options: AutocompleteOptions) -> Result<Self, WidgetError> {
        options.validate()?;
        Ok(Self {
            candidates: options.candidates,
            matcher: options.matcher,
            text: String::new(),
            cursor: 0,
            suggestions: SuggestionList::new(options.max_visible_rows),
        })
    }

    /// Current text
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Replace the text and move the cursor to the end
    ///
    /// Runs the same recomputation as typing does.
    pub fn set(&mut self, value: impl Into<String>) {
        self.text = value.into();
        self.cursor = self.text.len();
        self.text_changed();
    }

    pub fn candidates(&self) -> &Arc<[String]> {
        &self.candidates
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    /// Byte offset of the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.text_changed();
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) {
        let Some(start) = self.prev_boundary() else {
            return;
        };
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        self.text_changed();
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) {
        let Some(end) = self.next_boundary() else {
            return;
        };
        self.text.replace_range(self.cursor..end, "");
        self.text_changed();
    }

    pub fn move_left(&mut self) {
        if let Some(pos) = self.prev_boundary() {
            self.cursor = pos;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(pos) = self.next_boundary() {
            self.cursor = pos;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Highlight the next suggestion
    pub fn move_down(&mut self) {
        self.suggestions.move_down();
    }

    /// Highlight the previous suggestion
    pub fn move_up(&mut self) {
        self.suggestions.move_up();
    }

    /// Limit the popup's scroll window to the rows that fit on screen
    pub fn set_popup_rows(&mut self, rows: usize) {
        self.suggestions.set_window_rows(rows);
    }

    /// Close the popup without accepting anything
    pub fn dismiss(&mut self) {
        self.suggestions.hide();
    }

    /// Accept the highlighted suggestion
    ///
    /// Returns the accepted text, or `None` when nothing was highlighted.
    pub fn commit(&mut self) -> Option<String> {
        let chosen = self.suggestions.commit_selected()?;
        self.accept(&chosen);
        Some(chosen)
    }

    /// Accept the suggestion on popup row `row` (mouse click)
    pub fn click_suggestion(&mut self, row: usize) -> Option<String> {
        let chosen = self.suggestions.click(row)?;
        self.accept(&chosen);
        Some(chosen)
    }

    fn accept(&mut self, chosen: &str) {
        self.set(chosen);
        // The accepted value matches itself; the popup stays closed after a commit
        self.suggestions.hide();
    }

    fn text_changed(&mut self) {
        let matches = if self.text.is_empty() {
            Vec::new()
        } else {
            filter(&self.candidates, &self.matcher, &self.text)
        };
        tracing::trace!("'{}' matches {} candidates", self.text, matches.len());
        self.suggestions.update(&self.text, matches);
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }
}

impl fmt::Debug for AutocompleteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteEntry")
            .field("text", &self.text)
            .field("cursor", &self.cursor)
            .field("suggestions", &self.suggestions)
            .finish_non_exhaustive()
    }
}
