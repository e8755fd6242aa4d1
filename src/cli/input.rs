use std::io::BufRead;

use super::menu::MenuChoice;
use super::ui;
use crate::errors::{RentdeskError, RentdeskResult};

/// Longest line accepted when reading an integer
const INT_LINE_LIMIT: usize = 10;

/// Blocking, validating reader over one console input source
///
/// Every primitive loops until the user supplies an acceptable line;
/// malformed input is reported and reprompted, never surfaced as an
/// error value. The only error paths are real i/o failures and the
/// input source closing underneath us.
pub struct InputReader<R> {
    source: R,
}

impl<R: BufRead> InputReader<R> {
    /// Wrap an input source; the binary passes the locked stdin
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Read the selection for the six-entry main menu
    pub fn read_menu_choice(&mut self) -> RentdeskResult<MenuChoice> {
        loop {
            let line = self.read_line_bounded(1, false)?;
            let Some(key) = line.chars().next() else {
                continue;
            };
            match MenuChoice::from_key(key) {
                Some(choice) => return Ok(choice),
                None => ui::print_error("invalid selection, enter a digit from 1 to 6:"),
            }
        }
    }

    /// Read one character; a blank line yields the default when one
    /// is configured
    pub fn read_char(&mut self, default: Option<char>) -> RentdeskResult<char> {
        let line = self.read_line_bounded(1, default.is_some())?;
        // a blank line passes the funnel only when a default exists
        match line.chars().next() {
            Some(key) => Ok(key),
            None => Ok(default.unwrap_or(' ')),
        }
    }

    /// Read an integer from a line of at most ten characters
    ///
    /// A blank line yields the default when one is configured,
    /// without any parsing; anything unparseable is reprompted.
    pub fn read_int(&mut self, default: Option<i64>) -> RentdeskResult<i64> {
        loop {
            let line = self.read_line_bounded(INT_LINE_LIMIT, default.is_some())?;
            if line.is_empty() {
                if let Some(value) = default {
                    return Ok(value);
                }
            }
            match line.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => ui::print_error("that is not a number, try again:"),
            }
        }
    }

    /// Read a bounded line; a blank line yields the default when one
    /// is configured
    pub fn read_string(&mut self, limit: usize, default: Option<&str>) -> RentdeskResult<String> {
        let line = self.read_line_bounded(limit, default.is_some())?;
        if line.is_empty() {
            if let Some(value) = default {
                return Ok(value.to_string());
            }
        }
        Ok(line)
    }

    /// Read a Y/N answer, case-insensitively; loops until one is given
    pub fn read_confirmation(&mut self) -> RentdeskResult<bool> {
        loop {
            match self.read_char(None)?.to_ascii_uppercase() {
                'Y' => return Ok(true),
                'N' => return Ok(false),
                _ => ui::print_error("please answer Y or N:"),
            }
        }
    }

    // Every primitive funnels through here: one place owns the length
    // bound and the blank-as-default rule. No character-set checks
    // beyond length are applied.
    fn read_line_bounded(&mut self, limit: usize, allow_blank: bool) -> RentdeskResult<String> {
        loop {
            let mut buffer = String::new();
            if self.source.read_line(&mut buffer)? == 0 {
                return Err(RentdeskError::InputClosed);
            }
            let line = buffer.trim_end_matches(|c| c == '\r' || c == '\n');
            if line.is_empty() && allow_blank {
                return Ok(String::new());
            }
            let length = line.chars().count();
            if length < 1 || length > limit {
                ui::print_error(&format!("enter between 1 and {limit} characters, try again:"));
                continue;
            }
            return Ok(line.to_string());
        }
    }
}
