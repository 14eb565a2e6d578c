//! CSS rules emitted next to the generated markup.

use crate::config::GridSpacing;
use std::fmt;

/// Class shared by every row container.
pub const ROW_CLASS: &str = "gridrow";
/// Internal custom property holding the row spacing.
pub const ROW_GAP_VAR: &str = "--gridspace-row";
/// Internal custom property holding the column spacing.
pub const COL_GAP_VAR: &str = "--gridspace-col";
/// Host-level custom property overriding the row spacing.
pub const HOST_ROW_GAP_VAR: &str = "--dd-gridspace-row";
/// Host-level custom property overriding the column spacing.
pub const HOST_COL_GAP_VAR: &str = "--dd-gridspace-col";

/// A single rule: one selector and its declarations in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    selector: String,
    declarations: Vec<(String, String)>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration.
    #[must_use]
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    #[inline]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    #[inline]
    pub fn declarations(&self) -> &[(String, String)] {
        &self.declarations
    }

    /// Last declared value for `property`.
    pub fn value(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    fn write_css(&self, out: &mut String) {
        out.push_str(&self.selector);
        out.push_str(" {\n");
        for (prop, val) in &self.declarations {
            out.push_str("    ");
            out.push_str(prop);
            out.push_str(": ");
            out.push_str(val);
            out.push_str(";\n");
        }
        out.push_str("}\n");
    }
}

/// Ordered list of rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append every rule of `other` after the rules already present.
    pub fn append(&mut self, other: &Self) {
        self.rules.extend(other.rules.iter().cloned());
    }

    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the first rule with exactly this selector.
    pub fn rule(&self, selector: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.selector == selector)
    }

    /// Serialize all rules; an empty sheet serializes to an empty string.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            rule.write_css(&mut css);
        }
        css
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_css())
    }
}

/// Class scoping row `index` (0-based); rows are numbered from 1.
pub fn row_class(index: usize) -> String {
    format!("grid-{}", index + 1)
}

/// Grid rule for row `index`.
pub fn row_rule(index: usize, template_columns: &str) -> Rule {
    Rule::new(format!(".{}", row_class(index)))
        .declare("display", "grid")
        .declare("grid-template-columns", template_columns)
        .declare("grid-gap", format!("var({COL_GAP_VAR})"))
}

/// Rules that live in the component's own scope regardless of the grid shape.
///
/// The spacing values are fallbacks: a host-level `--dd-gridspace-*` property
/// still wins when it is set.
pub fn host_rules(spacing: &GridSpacing) -> Stylesheet {
    let mut sheet = Stylesheet::new();
    sheet.push(
        Rule::new(":host")
            .declare(ROW_GAP_VAR, format!("var({HOST_ROW_GAP_VAR}, {})", spacing.row))
            .declare(COL_GAP_VAR, format!("var({HOST_COL_GAP_VAR}, {})", spacing.col)),
    );
    sheet.push(
        Rule::new(format!(".{ROW_CLASS}")).declare("padding-bottom", format!("var({ROW_GAP_VAR})")),
    );
    sheet
}
