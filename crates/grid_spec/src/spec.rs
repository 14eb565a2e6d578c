//! Grid specification mini-language.
//!
//! A specification is a list of row specs separated by `;`. Each row spec is a
//! whitespace separated list of cell width tokens, read as percentages:
//!
//! ```text
//! 70 30; 50 50;
//! ```
//!
//! Width tokens are never validated. Whatever the caller writes ends up in the
//! `grid-template-columns` track list with a `%` appended.

use log::trace;

/// Separator between row specs.
pub const ROW_SEPARATOR: char = ';';

/// Width of one column track, kept exactly as written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackWidth {
    raw: String,
}

impl TrackWidth {
    /// Wrap a raw width token.
    #[inline]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The token as it appeared in the specification.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Track width as a CSS percentage, e.g. `50` becomes `50%`.
    pub fn to_css(&self) -> String {
        format!("{}%", self.raw)
    }
}

/// One `;`-delimited segment of a specification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowSpec {
    cells: Vec<TrackWidth>,
}

impl RowSpec {
    /// Split a row spec on whitespace, discarding empty tokens.
    pub fn parse(source: &str) -> Self {
        let cells = source.split_whitespace().map(TrackWidth::new).collect();
        Self { cells }
    }

    /// Cell widths in left-to-right order.
    #[inline]
    pub fn cells(&self) -> &[TrackWidth] {
        &self.cells
    }

    /// Number of cells (and column tracks) in this row.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value for `grid-template-columns`: the track widths joined by single spaces.
    pub fn template_columns(&self) -> String {
        self.cells
            .iter()
            .map(TrackWidth::to_css)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A parsed grid specification.
///
/// The degenerate case (empty input, or a single row holding a single cell)
/// parses to a specification without rows: a one-cell component does not need
/// a layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridSpecification {
    rows: Vec<RowSpec>,
}

impl GridSpecification {
    /// Parse a specification string. Never fails.
    pub fn parse(source: &str) -> Self {
        let segments = split_rows(source);
        if is_degenerate(&segments) {
            trace!("grid spec {source:?} is a single cell, no grid");
            return Self::default();
        }
        let rows: Vec<RowSpec> = segments.into_iter().map(RowSpec::parse).collect();
        trace!("grid spec {source:?} parsed into {} rows", rows.len());
        Self { rows }
    }

    /// Row specs in declaration order.
    #[inline]
    pub fn rows(&self) -> &[RowSpec] {
        &self.rows
    }

    /// True when no grid should be rendered at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of cells, which is also the highest insertion point id.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(RowSpec::len).sum()
    }
}

/// Split a specification into row segments.
///
/// A trailing separator does not open a new row. A specification made of a
/// lone separator has no rows.
pub fn split_rows(source: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = source.split(ROW_SEPARATOR).collect();
    if segments.last().is_some_and(|last| last.is_empty()) {
        segments.pop();
    }
    if segments.as_slice() == [""] {
        segments.clear();
    }
    segments
}

/// Exactly one row segment holding exactly one width token.
///
/// An empty segment list is not degenerate by this rule; it simply produces
/// zero rows, which renders the same way.
pub fn is_degenerate(segments: &[&str]) -> bool {
    match segments {
        [only] => only.split_whitespace().count() == 1,
        _ => false,
    }
}
