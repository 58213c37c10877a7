//! Fixed-choice selector with change observers

use std::fmt;

use crate::error::WidgetError;

/// Observer invoked with the new value after every change
pub type ChangeCallback<T> = Box<dyn FnMut(&T)>;

/// A labeled selector over a fixed, ordered set of options
///
/// Callbacks run synchronously on the caller's thread, in the order they
/// were registered, once per actual change of value.
pub struct LabeledDropdown<T> {
    label: String,
    options: Vec<T>,
    selected: usize,
    callbacks: Vec<ChangeCallback<T>>,
}

impl<T> LabeledDropdown<T>
where
    T: Clone + PartialEq + fmt::Display,
{
    /// Create a dropdown; `initial` defaults to the first option
    pub fn new(
        label: impl Into<String>,
        options: Vec<T>,
        initial: Option<T>,
    ) -> Result<Self, WidgetError> {
        if options.is_empty() {
            return Err(WidgetError::InvalidOption {
                name: "options",
                reason: "a dropdown needs at least one option".to_string(),
            });
        }
        let selected = match initial {
            Some(value) => options
                .iter()
                .position(|o| *o == value)
                .ok_or_else(|| WidgetError::UnknownOption(value.to_string()))?,
            None => 0,
        };
        Ok(Self {
            label: label.into(),
            options,
            selected,
            callbacks: Vec::new(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn get(&self) -> &T {
        &self.options[self.selected]
    }

    /// Select `value`; values outside the option set are rejected
    pub fn set(&mut self, value: T) -> Result<(), WidgetError> {
        let idx = self
            .options
            .iter()
            .position(|o| *o == value)
            .ok_or_else(|| WidgetError::UnknownOption(value.to_string()))?;
        self.select_index(idx);
        Ok(())
    }

    /// Register an observer for value changes
    pub fn add_callback(&mut self, callback: impl FnMut(&T) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Move to the next option (stops at the last one)
    pub fn select_next(&mut self) {
        let next = (self.selected + 1).min(self.options.len() - 1);
        self.select_index(next);
    }

    /// Move to the previous option (stops at the first one)
    pub fn select_previous(&mut self) {
        self.select_index(self.selected.saturating_sub(1));
    }

    fn select_index(&mut self, idx: usize) {
        if idx == self.selected {
            return;
        }
        self.selected = idx;
        let value = self.options[idx].clone();
        for callback in &mut self.callbacks {
            callback(&value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LabeledDropdown<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabeledDropdown")
            .field("label", &self.label)
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
