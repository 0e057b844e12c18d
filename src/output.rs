//! Render options for query serialization.
//!
//! A query tree renders through [`RenderOptions`]: the compact form produces
//! a single line suitable for sending to a search backend, the pretty form
//! produces an indented multi-line rendering for humans, and
//! [`RenderOptions::with_labels`] additionally surfaces group labels as
//! `/* label */` comment lines.

use serde::{Deserialize, Serialize};

pub(crate) const OPEN_GROUP: &str = "(";
pub(crate) const OPEN_FILTER_GROUP: &str = "filter(";
pub(crate) const CLOSE_GROUP: &str = ")";
pub(crate) const OPEN_COMMENT: &str = "/* ";
pub(crate) const CLOSE_COMMENT: &str = " */";

/// Separator between clauses in the compact form.
pub const DEFAULT_SEPARATOR: &str = " ";
/// Separator between clauses in the pretty form.
pub const NEWLINE_SEPARATOR: &str = "\n";
/// Indent unit used by the pretty form.
pub const DEFAULT_INDENT: &str = "\t";

/// Controls how a query tree is serialized to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Emit a `/* label */` comment line before each labeled group.
    pub include_labels: bool,
    /// Indentation prefix applied to the outermost group.
    pub base_indent: String,
    /// Indentation added per nesting level.
    pub indent_unit: String,
    /// Separator between rendered clauses.
    pub separator: String,
}

impl RenderOptions {
    /// Single-line rendering: no indentation, clauses separated by spaces.
    pub fn compact() -> RenderOptions {
        RenderOptions {
            include_labels: false,
            base_indent: String::new(),
            indent_unit: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Multi-line rendering: tab indentation, one clause per line.
    pub fn pretty() -> RenderOptions {
        RenderOptions {
            include_labels: false,
            base_indent: String::new(),
            indent_unit: DEFAULT_INDENT.to_string(),
            separator: NEWLINE_SEPARATOR.to_string(),
        }
    }

    /// Toggle `/* label */` comment lines for labeled groups.
    pub fn with_labels(mut self, include_labels: bool) -> RenderOptions {
        self.include_labels = include_labels;
        self
    }

    /// Replace the per-level indent unit.
    pub fn with_indent_unit(mut self, indent_unit: impl Into<String>) -> RenderOptions {
        self.indent_unit = indent_unit.into();
        self
    }

    /// Replace the indentation applied to the outermost group.
    pub fn with_base_indent(mut self, base_indent: impl Into<String>) -> RenderOptions {
        self.base_indent = base_indent.into();
        self
    }

    /// Replace the clause separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> RenderOptions {
        self.separator = separator.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::compact()
    }
}
