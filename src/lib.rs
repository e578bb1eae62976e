#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A 1-based row and column in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    pub fn start() -> Self {
        Position::new(1, 1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Returns the text of the 1-based `row` of `source`, without its line ending.
pub fn get_line_at_position(source: &str, row: usize) -> Option<&str> {
    if row == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(row - 1)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}


/// Draws an error against the source it came from:
///
/// ```text
/// Error: UnrecognisedToken
/// -> demo.src:20:9
///    |
/// 20 | let a = `;
///    | --------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_text = get_line_at_position(source, position.row).unwrap_or("");

    let line_string = position.row.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}:{}\n", error.get_file(), position));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end().replace('\t', " ")
    ));

    let arrows = position.col.saturating_sub(removed_whitespace).max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    // Columns count characters, so a tab is one column like a space.
    let start = string.chars().take_while(|c| matches!(c, ' ' | '\t')).count();

    (&string[start..], start)
}
