//! Commit-on-blur numeric text field.
//!
//! The field keeps a committed number and a text buffer. While the user types
//! the buffer is free-form and may hold text that is not (yet) a number; it is
//! only parsed, clamped and handed back to the owner when focus leaves.

use crate::utils::{clamp_optional, format_locale, parse_float_locale, FormatOptions};
use log::debug;

/// Edit limits and display precision of one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub format: FormatOptions,
}

impl FieldConfig {
    pub const fn new(format: FormatOptions) -> Self {
        Self {
            min: None,
            max: None,
            format,
        }
    }

    pub const fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn with_max(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }
}

/// What the text buffer currently mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    /// Formatted committed value.
    Idle(String),
    /// Raw keystroke-level text, not parsed yet.
    Editing(String),
}

impl EditState {
    pub fn text(&self) -> &str {
        match self {
            EditState::Idle(text) | EditState::Editing(text) => text,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericEditField {
    config: FieldConfig,
    committed: f64,
    state: EditState,
}

impl NumericEditField {
    pub fn new(committed: f64, config: FieldConfig) -> Self {
        Self {
            state: EditState::Idle(format_locale(committed, &config.format)),
            config,
            committed,
        }
    }

    /// Text to show in the input.
    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn committed(&self) -> f64 {
        self.committed
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// The owner's value changed. Reformat only if it really differs, so an
    /// unrelated update does not wipe text the user is typing.
    pub fn sync(&mut self, committed: f64) {
        if same_value(self.committed, committed) {
            return;
        }
        self.reset(committed);
    }

    /// Adopt `committed` and drop back to Idle unconditionally.
    pub fn reset(&mut self, committed: f64) {
        self.committed = committed;
        self.state = EditState::Idle(format_locale(committed, &self.config.format));
    }

    /// A keystroke replaced the text.
    pub fn input(&mut self, raw: impl Into<String>) {
        self.state = EditState::Editing(raw.into());
    }

    /// Focus left the field.
    ///
    /// Parses the buffer in either state. Returns the clamped value the owner
    /// must adopt, or `None` when the text did not parse, in which case the
    /// buffer reverts to the committed value.
    pub fn blur(&mut self) -> Option<f64> {
        match parse_float_locale(self.state.text()) {
            Ok(value) => {
                let clamped = clamp_optional(value, self.config.min, self.config.max);
                if clamped != value {
                    debug!("Clamped {} to {}", value, clamped);
                }
                self.reset(clamped);
                Some(clamped)
            }
            Err(err) => {
                debug!("Reverting edit: {}", err);
                self.reset(self.committed);
                None
            }
        }
    }
}

#[inline]
fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}
