//! Clock application state
//!
//! [`WorldClock`] owns one row per clock (a timezone entry plus its time
//! display), the clock-count dropdown, the seconds toggle and keyboard
//! focus. It never reads global state: the refresh task and the event loop
//! receive it explicitly.

pub mod event_loop;
pub mod refresh;

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::Frame;

use crate::config::Config;
use crate::error::WidgetError;
use crate::input::keybindings::CommitKeys;
use crate::view::theme::Theme;
use crate::view::ui::{compute_layout, popup_area, render_app, AppLayout};
use crate::widget::{AutocompleteEntry, AutocompleteOptions, LabeledDropdown};

pub use refresh::{interval_for, FixedClock, RefreshTask, SystemClock, TimeSource};

/// One clock: the zone being edited and the last time shown for it
#[derive(Debug, Clone)]
pub struct ClockRow {
    pub entry: AutocompleteEntry,
    /// Last successfully formatted time; kept when the zone stops resolving
    pub display: Option<String>,
}

/// Which control receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Entry(usize),
    ClockCount,
    ShowSeconds,
    Update,
}

/// The clock window
pub struct WorldClock {
    rows: Vec<ClockRow>,
    /// Blank entry cloned for every new row
    template: AutocompleteEntry,
    clock_count: LabeledDropdown<usize>,
    /// Count picked in the dropdown but not yet applied with Update
    pending_count: Rc<Cell<Option<usize>>>,
    show_seconds: bool,
    focus: Focus,
    commit_keys: CommitKeys,
    theme: Theme,
    /// Settings carried through unchanged into the saved document
    settings: Config,
    /// Screen areas from the last render, used for mouse hit-testing
    layout: AppLayout,
    refresh_requested: bool,
    should_quit: bool,
}

impl WorldClock {
    /// Build the window from a configuration and the timezone catalog
    pub fn new(config: Config, catalog: Arc<[String]>) -> Result<Self, WidgetError> {
        let config = config.normalized();
        let options = AutocompleteOptions::new(catalog)
            .with_matcher(config.match_mode.matcher())
            .with_max_visible_rows(config.max_visible_rows);
        let template = AutocompleteEntry::new(options)?;

        let rows: Vec<ClockRow> = config
            .zones
            .iter()
            .map(|zone| new_row(&template, zone))
            .collect();

        let mut clock_count = LabeledDropdown::new(
            "Clocks",
            (1..=config.max_clocks).collect(),
            Some(rows.len()),
        )?;
        let pending_count = Rc::new(Cell::new(None));
        let pending = Rc::clone(&pending_count);
        clock_count.add_callback(move |count: &usize| pending.set(Some(*count)));

        tracing::info!(
            "Clock window with {} rows, seconds {}",
            rows.len(),
            if config.show_seconds { "on" } else { "off" }
        );

        Ok(Self {
            rows,
            template,
            clock_count,
            pending_count,
            show_seconds: config.show_seconds,
            focus: Focus::Entry(0),
            commit_keys: CommitKeys::from_names(&config.commit_keys),
            theme: Theme::from_name(&config.theme),
            settings: config,
            layout: AppLayout::default(),
            refresh_requested: true,
            should_quit: false,
        })
    }

    pub fn rows(&self) -> &[ClockRow] {
        &self.rows
    }

    /// Zone text of every row, in order
    pub fn zones(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.entry.get().to_string()).collect()
    }

    pub fn show_seconds(&self) -> bool {
        self.show_seconds
    }

    pub fn set_show_seconds(&mut self, show_seconds: bool) {
        if self.show_seconds != show_seconds {
            self.show_seconds = show_seconds;
            self.refresh_requested = true;
        }
    }

    pub fn toggle_show_seconds(&mut self) {
        self.set_show_seconds(!self.show_seconds);
    }

    pub fn clock_count(&self) -> &LabeledDropdown<usize> {
        &self.clock_count
    }

    pub fn clock_count_mut(&mut self) -> &mut LabeledDropdown<usize> {
        &mut self.clock_count
    }

    /// A count chosen in the dropdown that differs from the current rows
    pub fn pending_count(&self) -> Option<usize> {
        self.pending_count
            .get()
            .filter(|count| *count != self.rows.len())
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn commit_keys(&self) -> &CommitKeys {
        &self.commit_keys
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn layout(&self) -> &AppLayout {
        &self.layout
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether something changed that should be shown before the next tick
    ///
    /// Clears the request.
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    /// The document to persist for the current state
    pub fn to_config(&self) -> Config {
        Config {
            zones: self.zones(),
            show_seconds: self.show_seconds,
            ..self.settings.clone()
        }
    }

    /// Rebuild the rows to the count selected in the dropdown
    ///
    /// Existing rows keep their zone; new rows start at the first zone of
    /// the catalog.
    pub fn apply_clock_count(&mut self) {
        let count = *self.clock_count.get();
        if count < self.rows.len() {
            self.rows.truncate(count);
        } else {
            let first_zone = self
                .template
                .candidates()
                .first()
                .cloned()
                .unwrap_or_default();
            while self.rows.len() < count {
                self.rows.push(new_row(&self.template, &first_zone));
            }
        }
        self.pending_count.set(None);
        if let Focus::Entry(idx) = self.focus {
            if idx >= self.rows.len() {
                self.focus = Focus::Entry(self.rows.len() - 1);
            }
        }
        self.refresh_requested = true;
        tracing::info!("Showing {} clocks", count);
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.fit_popup(frame.area());
        self.layout = render_app(frame, self);
    }

    /// Size the focused entry's scroll window to the popup height left
    /// after clipping to `screen`
    fn fit_popup(&mut self, screen: Rect) {
        let Focus::Entry(idx) = self.focus else {
            return;
        };
        let layout = compute_layout(screen, self.rows.len());
        if let (Some(row), Some(entry_area)) = (self.rows.get_mut(idx), layout.entries.get(idx)) {
            let wanted = row.entry.suggestions().visible_row_count();
            if wanted == 0 {
                return;
            }
            let popup = popup_area(*entry_area, wanted, screen);
            row.entry.set_popup_rows(usize::from(popup.height));
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
            self.should_quit = true;
            return;
        }

        // A commit key wins over focus traversal, so Tab can be bound to accept
        if let Focus::Entry(idx) = self.focus {
            if self.commit_keys.matches(&key) && self.commit_row(idx) {
                return;
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Entry(idx) => self.handle_entry_key(idx, key),
            Focus::ClockCount => match key.code {
                KeyCode::Up | KeyCode::Left => self.clock_count.select_previous(),
                KeyCode::Down | KeyCode::Right => self.clock_count.select_next(),
                KeyCode::Enter => self.apply_clock_count(),
                _ => {}
            },
            Focus::ShowSeconds => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.toggle_show_seconds();
                }
            }
            Focus::Update => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.apply_clock_count();
                }
            }
        }
    }

    fn handle_entry_key(&mut self, idx: usize, key: KeyEvent) {
        let Some(row) = self.rows.get_mut(idx) else {
            return;
        };
        let entry = &mut row.entry;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let plain = !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Down => entry.move_down(),
            KeyCode::Up => entry.move_up(),
            KeyCode::Left => entry.move_left(),
            KeyCode::Right => entry.move_right(),
            KeyCode::Home => entry.move_home(),
            KeyCode::End => entry.move_end(),
            KeyCode::Backspace => entry.backspace(),
            KeyCode::Delete => entry.delete(),
            KeyCode::Esc => entry.dismiss(),
            KeyCode::Char('u') if ctrl => entry.set(""),
            KeyCode::Char(c) if plain => entry.insert_char(c),
            _ => {}
        }
    }

    /// Accept the highlighted suggestion of row `idx`; false if none
    fn commit_row(&mut self, idx: usize) -> bool {
        let Some(row) = self.rows.get_mut(idx) else {
            return false;
        };
        match row.entry.commit() {
            Some(zone) => {
                tracing::debug!("Row {} set to {}", idx, zone);
                self.refresh_requested = true;
                true
            }
            None => false,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(pos),
            MouseEventKind::ScrollDown => self.scroll_popup(true),
            MouseEventKind::ScrollUp => self.scroll_popup(false),
            _ => {}
        }
    }

    fn click(&mut self, pos: Position) {
        if let Some(popup) = self.layout.popup {
            if popup.area.contains(pos) {
                let line = usize::from(pos.y - popup.area.y);
                if let Some(row) = self.rows.get_mut(popup.row) {
                    if let Some(zone) = row.entry.click_suggestion(line) {
                        tracing::debug!("Row {} set to {} by click", popup.row, zone);
                        self.refresh_requested = true;
                    }
                }
                return;
            }
        }

        if let Some(idx) = self.layout.entries.iter().position(|area| area.contains(pos)) {
            self.set_focus(Focus::Entry(idx));
        } else if self.layout.clock_count.contains(pos) {
            self.set_focus(Focus::ClockCount);
            let middle = self.layout.clock_count.x + self.layout.clock_count.width / 2;
            if pos.x < middle {
                self.clock_count.select_previous();
            } else {
                self.clock_count.select_next();
            }
        } else if self.layout.show_seconds.contains(pos) {
            self.set_focus(Focus::ShowSeconds);
            self.toggle_show_seconds();
        } else if self.layout.update_button.contains(pos) {
            self.set_focus(Focus::Update);
            self.apply_clock_count();
        } else if let Focus::Entry(idx) = self.focus {
            if let Some(row) = self.rows.get_mut(idx) {
                row.entry.dismiss();
            }
        }
    }

    fn scroll_popup(&mut self, down: bool) {
        if let Focus::Entry(idx) = self.focus {
            if let Some(row) = self.rows.get_mut(idx) {
                if down {
                    row.entry.move_down();
                } else {
                    row.entry.move_up();
                }
            }
        }
    }

    fn focus_order(&self) -> Vec<Focus> {
        (0..self.rows.len())
            .map(Focus::Entry)
            .chain([Focus::ClockCount, Focus::ShowSeconds, Focus::Update])
            .collect()
    }

    fn focus_next(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[(current + 1) % order.len()]);
    }

    fn focus_previous(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[(current + order.len() - 1) % order.len()]);
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        // Only the focused entry may show a popup
        if let Focus::Entry(idx) = self.focus {
            if let Some(row) = self.rows.get_mut(idx) {
                row.entry.dismiss();
            }
        }
        self.focus = focus;
    }
}

fn new_row(template: &AutocompleteEntry, zone: &str) -> ClockRow {
    let mut entry = template.clone();
    entry.set(zone);
    entry.dismiss();
    ClockRow {
        entry,
        display: None,
    }
}
