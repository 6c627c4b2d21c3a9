//! Table construction options.

/// Value used for blank data cells unless configured otherwise.
pub const DEFAULT_BLANK_VALUE: f64 = 0.0;

/// Configuration for building a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Table name used in diagnostics.
    pub name: String,
    /// Value stored for blank cells.
    pub blank_value: f64,
    /// Component indices in the order relaxations are tried on a miss.
    ///
    /// `None` means the row identifier first, then the dimensions in header
    /// order. A custom order may list a subset of the components; a miss
    /// that no listed relaxation explains is attributed to the last entry.
    pub relaxation_order: Option<Vec<usize>>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            name: "table".to_string(),
            blank_value: DEFAULT_BLANK_VALUE,
            relaxation_order: None,
        }
    }
}

impl TableOptions {
    /// Create options for a named table.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the table name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the value stored for blank cells.
    #[must_use]
    pub fn with_blank_value(mut self, value: f64) -> Self {
        self.blank_value = value;
        self
    }

    /// Set the relaxation order (component indices, header order first,
    /// row identifier last).
    #[must_use]
    pub fn with_relaxation_order(mut self, order: impl Into<Vec<usize>>) -> Self {
        self.relaxation_order = Some(order.into());
        self
    }
}

/// Parses a data cell with the invariant decimal convention.
///
/// Blank cells yield `blank_value`. Surrounding whitespace and thousands
/// separators (`1,234.5`) are accepted.
pub fn parse_cell(raw: &str, blank_value: f64) -> Result<f64, std::num::ParseFloatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(blank_value);
    }
    if trimmed.contains(',') {
        trimmed.replace(',', "").parse()
    } else {
        trimmed.parse()
    }
}
