//! Suggestion list controller
//!
//! Owns the popup state of an autocomplete entry. The popup is either
//! [`PopupState::Hidden`] (owning nothing) or [`PopupState::Visible`] with the
//! current matches, an optional highlighted row and a scroll offset.
//! Hiding drops the match list, so nothing from a previous query survives
//! into the next popup.

/// Popup state of a [`SuggestionList`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    Hidden,
    Visible(VisibleList),
}

/// Contents of a visible popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleList {
    /// Matching candidates, in candidate-set order (never empty)
    matches: Vec<String>,
    /// Highlighted index into `matches`
    selection: Option<usize>,
    /// Index of the first row inside the visible window
    scroll: usize,
}

/// Floating suggestion list attached to an autocomplete entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    state: PopupState,
    max_visible_rows: usize,
    /// Rows actually available on screen; less than `max_visible_rows` when
    /// the popup is clipped
    window_rows: usize,
}

impl SuggestionList {
    /// Create a hidden list showing at most `max_visible_rows` rows at a time
    pub fn new(max_visible_rows: usize) -> Self {
        let max_visible_rows = max_visible_rows.max(1);
        Self {
            state: PopupState::Hidden,
            max_visible_rows,
            window_rows: max_visible_rows,
        }
    }

    /// Apply a freshly computed match result for `query`
    ///
    /// Shows the popup only for a non-empty query with at least one match.
    /// Any previous highlight and scroll position are discarded.
    pub fn update(&mut self, query: &str, matches: Vec<String>) {
        if query.is_empty() || matches.is_empty() {
            self.hide();
            return;
        }
        self.state = PopupState::Visible(VisibleList {
            matches,
            selection: None,
            scroll: 0,
        });
    }

    pub fn hide(&mut self) {
        self.state = PopupState::Hidden;
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, PopupState::Visible(_))
    }

    pub fn max_visible_rows(&self) -> usize {
        self.max_visible_rows
    }

    /// Rows that fit on screen, at most `max_visible_rows`
    pub fn window_rows(&self) -> usize {
        self.window_rows
    }

    /// Limit the scroll window to `rows` lines (the popup height after
    /// clipping), keeping the highlighted row inside it
    pub fn set_window_rows(&mut self, rows: usize) {
        self.window_rows = rows.clamp(1, self.max_visible_rows);
        let rows = self.window_rows;
        if let PopupState::Visible(list) = &mut self.state {
            if let Some(idx) = list.selection {
                list.select(idx, rows);
            }
        }
    }

    /// Current matches (empty while hidden)
    pub fn matches(&self) -> &[String] {
        match &self.state {
            PopupState::Visible(list) => &list.matches,
            PopupState::Hidden => &[],
        }
    }

    pub fn selection(&self) -> Option<usize> {
        match &self.state {
            PopupState::Visible(list) => list.selection,
            PopupState::Hidden => None,
        }
    }

    /// The highlighted suggestion, if any
    pub fn selected(&self) -> Option<&str> {
        match &self.state {
            PopupState::Visible(list) => list
                .selection
                .and_then(|idx| list.matches.get(idx))
                .map(String::as_str),
            PopupState::Hidden => None,
        }
    }

    pub fn scroll_offset(&self) -> usize {
        match &self.state {
            PopupState::Visible(list) => list.scroll,
            PopupState::Hidden => 0,
        }
    }

    /// Number of rows the popup asks for before clipping
    pub fn visible_row_count(&self) -> usize {
        self.matches().len().min(self.max_visible_rows)
    }

    /// The window of matches currently scrolled into view
    pub fn visible_rows(&self) -> &[String] {
        let matches = self.matches();
        let start = self.scroll_offset().min(matches.len());
        let end = (start + self.window_rows).min(matches.len());
        &matches[start..end]
    }

    /// Highlight the next row (or the first, if nothing is highlighted)
    pub fn move_down(&mut self) {
        let rows = self.window_rows;
        if let PopupState::Visible(list) = &mut self.state {
            let last = list.matches.len() - 1;
            let next = match list.selection {
                None => 0,
                Some(idx) => (idx + 1).min(last),
            };
            list.select(next, rows);
        }
    }

    /// Highlight the previous row (or the first, if nothing is highlighted)
    pub fn move_up(&mut self) {
        let rows = self.window_rows;
        if let PopupState::Visible(list) = &mut self.state {
            let prev = match list.selection {
                None => 0,
                Some(idx) => idx.saturating_sub(1),
            };
            list.select(prev, rows);
        }
    }

    /// Accept the highlighted suggestion and hide the popup
    ///
    /// Returns `None` (and leaves the popup as it is) when nothing is
    /// highlighted.
    pub fn commit_selected(&mut self) -> Option<String> {
        let chosen = self.selected()?.to_string();
        self.hide();
        Some(chosen)
    }

    /// Accept the suggestion shown on popup row `row` (0 = top visible row)
    ///
    /// Rows past the end of the list are ignored.
    pub fn click(&mut self, row: usize) -> Option<String> {
        let chosen = self.visible_rows().get(row)?.clone();
        self.hide();
        Some(chosen)
    }
}

impl Default for SuggestionList {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_VISIBLE_ROWS)
    }
}

impl VisibleList {
    fn select(&mut self, idx: usize, rows: usize) {
        self.selection = Some(idx);
        // Keep the highlighted row inside the visible window
        if idx < self.scroll {
            self.scroll = idx;
        } else if idx >= self.scroll + rows {
            self.scroll = idx + 1 - rows;
        }
    }
}
