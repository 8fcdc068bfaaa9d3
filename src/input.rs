//! Input handling module
//!
//! Inline number entry for the parameter form. While an input is active it
//! receives every key; Enter confirms and Esc cancels.

use crate::parameters::ParameterField;
use crossterm::event::{KeyCode, KeyEvent};

/// Outcome of feeding a key to an input
#[derive(Debug, Clone, PartialEq)]
pub enum InputResult {
    /// Parsed value accepted
    Confirm(f64),
    Cancel,
    /// Keep editing; carries a message when the buffer could not be parsed
    Continue(Option<String>),
}

/// Number entry for one parameter field
#[derive(Debug, Clone, PartialEq)]
pub struct NumberInput {
    pub field: ParameterField,
    pub buffer: String,
}

impl NumberInput {
    /// Start editing with the field's current value
    pub fn new(field: ParameterField, current: f64) -> Self {
        Self {
            field,
            buffer: current.to_string(),
        }
    }

    pub fn handle_input(&mut self, key_event: KeyEvent) -> InputResult {
        match key_event.code {
            KeyCode::Enter => match self.parse() {
                Ok(value) => InputResult::Confirm(value),
                Err(message) => InputResult::Continue(Some(message)),
            },
            KeyCode::Esc => InputResult::Cancel,
            KeyCode::Backspace => {
                self.buffer.pop();
                InputResult::Continue(None)
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E') => {
                self.buffer.push(c);
                InputResult::Continue(None)
            }
            _ => InputResult::Continue(None),
        }
    }

    fn parse(&self) -> Result<f64, String> {
        let trimmed = self.buffer.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(format!("'{}' is not a number", trimmed)),
        }
    }
}
