//! Quote-aware scanning of logical CSV lines.
//!
//! A single pass over the characters tracks whether the cursor sits inside
//! a quoted region. Commas split fields only in the [`QuoteState::Unquoted`]
//! state, and a line whose scan ends in [`QuoteState::Quoted`] continues on
//! the next physical line.

/// Position of the scanner relative to double-quoted regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    /// Outside any quoted region; commas are delimiters.
    #[default]
    Unquoted,
    /// Inside an open quoted region; commas and newlines are literal.
    Quoted,
}

impl QuoteState {
    /// State after reading one quote character.
    pub fn toggle(self) -> Self {
        match self {
            Self::Unquoted => Self::Quoted,
            Self::Quoted => Self::Unquoted,
        }
    }

    /// State after scanning `text`, starting from `self`.
    ///
    /// An escaped quote (`""`) toggles twice, so it leaves the state unchanged.
    pub fn scan(self, text: &str) -> Self {
        text.chars()
            .filter(|&c| c == '"')
            .fold(self, |state, _| state.toggle())
    }

    /// Returns true if a quoted region is still open.
    pub fn is_open(self) -> bool {
        self == Self::Quoted
    }
}

/// Returns true if `line` opens a quoted field that it does not close.
pub fn has_open_quote(line: &str) -> bool {
    QuoteState::Unquoted.scan(line).is_open()
}

/// Splits a logical line into unescaped fields.
///
/// A comma delimits only when it is not inside a quoted region. Every line
/// yields at least one field, so an empty line becomes `[""]`.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut state = QuoteState::Unquoted;
    let mut start = 0;

    for (idx, c) in line.char_indices() {
        match c {
            '"' => state = state.toggle(),
            ',' if !state.is_open() => {
                fields.push(unescape(&line[start..idx]));
                start = idx + 1;
            }
            _ => {}
        }
    }

    fields.push(unescape(&line[start..]));
    fields
}

/// Removes one level of CSV quoting from a raw field.
///
/// Surrounding double quotes are stripped and `""` inside them collapses to a
/// single `"`. Unquoted fields are returned as-is.
pub fn unescape(field: &str) -> String {
    match field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\"\"", "\""),
        None => field.to_string(),
    }
}
