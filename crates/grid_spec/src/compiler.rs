//! Grid specification compiler.
//!
//! Turns a specification string into one CSS grid rule and one row container
//! per row spec. Every cell gets an insertion point (a `<slot>`) named by a
//! 1-based id that keeps counting across rows, so `"50 50; 30 30 40"` yields
//! slots `1`..`5`. Callers tag their content with that id to place it.

use crate::markup::{self, Element, Node};
use crate::spec::GridSpecification;
use crate::stylesheet::{ROW_CLASS, Stylesheet, row_class, row_rule};
use log::{debug, trace};
use std::fmt;

/// Leading text of the placeholder shown in unfilled cells.
pub const PLACEHOLDER_HINT: &str = "replace me with: ";

/// A numbered cell that caller content can be slotted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InsertionPoint {
    /// 1-based id, unique across the whole grid.
    pub id: usize,
    /// 0-based row index.
    pub row: usize,
    /// 0-based cell index within the row.
    pub column: usize,
}

impl InsertionPoint {
    /// Slot name carried by the generated `<slot>` element.
    #[inline]
    pub fn slot_name(&self) -> String {
        self.id.to_string()
    }
}

impl fmt::Display for InsertionPoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.id)
    }
}

/// Output of a compilation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompiledGrid {
    stylesheet: Stylesheet,
    rows: Vec<Node>,
    insertion_points: Vec<InsertionPoint>,
}

impl CompiledGrid {
    /// One grid rule per row, in row order.
    #[inline]
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Row containers, in row order.
    #[inline]
    pub fn rows(&self) -> &[Node] {
        &self.rows
    }

    /// Insertion points in row-major order.
    #[inline]
    pub fn insertion_points(&self) -> &[InsertionPoint] {
        &self.insertion_points
    }

    /// True for the degenerate (no grid) case.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Generated stylesheet text.
    pub fn stylesheet_text(&self) -> String {
        self.stylesheet.to_css()
    }

    /// Generated markup text.
    pub fn markup_text(&self) -> String {
        markup::to_html(&self.rows)
    }

    /// Take the row containers out of the result.
    #[inline]
    pub fn into_rows(self) -> Vec<Node> {
        self.rows
    }
}

/// Compile a specification string.
///
/// Never fails: malformed width tokens end up verbatim in the track list.
/// Ids start at 1 on every call.
pub fn compile(
    spec: &str,
    cell_style: &str,
    row_style: &str,
    suppress_placeholders: bool,
) -> CompiledGrid {
    let parsed = GridSpecification::parse(spec);
    compile_specification(&parsed, cell_style, row_style, suppress_placeholders)
}

/// Compile an already parsed specification.
pub fn compile_specification(
    parsed: &GridSpecification,
    cell_style: &str,
    row_style: &str,
    suppress_placeholders: bool,
) -> CompiledGrid {
    let mut stylesheet = Stylesheet::new();
    let mut rows: Vec<Node> = Vec::with_capacity(parsed.rows().len());
    let mut insertion_points = Vec::with_capacity(parsed.cell_count());
    let mut slot_counter: usize = 0;

    for (row_index, row) in parsed.rows().iter().enumerate() {
        let mut cells: Vec<Node> = Vec::with_capacity(row.len());
        for column in 0..row.len() {
            slot_counter += 1;
            let point = InsertionPoint {
                id: slot_counter,
                row: row_index,
                column,
            };
            cells.push(cell_container(point, cell_style, suppress_placeholders));
            insertion_points.push(point);
        }

        let template_columns = row.template_columns();
        trace!("row {}: grid-template-columns: {template_columns}", row_index + 1);
        stylesheet.push(row_rule(row_index, &template_columns));
        rows.push(
            Element::new("div")
                .with_attr("class", format!("{ROW_CLASS} {}", row_class(row_index)))
                .with_attr("style", row_style)
                .with_children(cells)
                .into(),
        );
    }

    debug!(
        "compiled grid: {} rows, {} insertion points",
        rows.len(),
        insertion_points.len()
    );
    CompiledGrid {
        stylesheet,
        rows,
        insertion_points,
    }
}

/// Placeholder telling the caller how to fill insertion point `id`.
pub fn placeholder(id: usize) -> Node {
    Element::new("i")
        .with_child(Node::text(PLACEHOLDER_HINT))
        .with_child(Element::new("br"))
        .with_child(
            Element::new("code")
                .with_child(Node::text(format!("<div slot={id}>your content</div>"))),
        )
        .into()
}

fn cell_container(point: InsertionPoint, cell_style: &str, suppress_placeholders: bool) -> Node {
    let mut slot = Element::new("slot").with_attr("name", point.slot_name());
    if !suppress_placeholders {
        slot = slot.with_child(placeholder(point.id));
    }
    Element::new("div")
        .with_attr("style", cell_style)
        .with_child(slot)
        .into()
}
