//! The grid component.
//!
//! Holds the attribute configuration and the current render. Any attribute
//! change recompiles the whole grid from scratch; nothing from the previous
//! render is reused.

use crate::compiler::{self, CompiledGrid, InsertionPoint};
use crate::config::{GridConfig, GridSpacing};
use crate::markup::{self, Element, Node};
use crate::slots::{self, SlottedContent};
use crate::stylesheet::host_rules;
use log::{debug, warn};

/// Text shown instead of a grid when no `dim` attribute is set.
pub const WARNING_TEXT: &str = "[WARN] no grid dimensions specified.";

/// Result of rendering a configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    /// `dim` was absent or empty; the compiler did not run.
    Warning,
    /// Output of the compiler. May be empty for a single-cell specification.
    Grid(CompiledGrid),
}

impl Rendered {
    /// The compiled grid, unless this is the warning state.
    #[inline]
    pub fn grid(&self) -> Option<&CompiledGrid> {
        match self {
            Self::Warning => None,
            Self::Grid(grid) => Some(grid),
        }
    }

    #[inline]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning)
    }
}

/// Render a configuration.
pub fn render(config: &GridConfig) -> Rendered {
    if !config.has_dim() {
        warn!("grid has no dim attribute, rendering warning");
        return Rendered::Warning;
    }
    Rendered::Grid(compiler::compile(
        &config.dim,
        &config.effective_cell_style(),
        &config.row_style,
        config.no_fillers,
    ))
}

/// Instructional message for a grid without dimensions.
pub fn warning() -> Node {
    Element::new("i")
        .with_child(
            Element::new("p")
                .with_child(Node::text(format!("{WARNING_TEXT} Make sure to include a ")))
                .with_child(Element::new("b").with_child(Node::text("non-empty")))
                .with_child(Node::text(" "))
                .with_child(Element::new("code").with_child(Node::text("dim")))
                .with_child(Node::text(" attribute.")),
        )
        .into()
}

/// A grid component instance.
#[derive(Clone, Debug)]
pub struct GridComponent {
    config: GridConfig,
    rendered: Rendered,
    generation: u64,
}

impl Default for GridComponent {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl GridComponent {
    /// Create a component and render it once.
    pub fn new(config: GridConfig) -> Self {
        let rendered = render(&config);
        Self {
            config,
            rendered,
            generation: 1,
        }
    }

    /// Create a component from `(name, value)` attribute pairs.
    pub fn from_external_attributes<'attr, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'attr str, &'attr str)>,
    {
        Self::new(GridConfig::from_external_attributes(attrs))
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Current render.
    #[inline]
    pub fn rendered(&self) -> &Rendered {
        &self.rendered
    }

    /// How many times this component has rendered.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Insertion points of the current render; empty in the warning state.
    pub fn insertion_points(&self) -> &[InsertionPoint] {
        match &self.rendered {
            Rendered::Warning => &[],
            Rendered::Grid(grid) => grid.insertion_points(),
        }
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
        self.regenerate();
    }

    /// Set one attribute. Unknown attributes change nothing.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if self.config.set_attribute(name, value) {
            self.regenerate();
        }
    }

    /// Remove one attribute, restoring its default.
    pub fn remove_attribute(&mut self, name: &str) {
        if self.config.remove_attribute(name) {
            self.regenerate();
        }
    }

    /// Shadow scope contents: a `<style>` element followed by the grid rows,
    /// or by the warning message.
    pub fn shadow_tree(&self) -> Vec<Node> {
        match &self.rendered {
            Rendered::Warning => vec![style_element(&self.config.spacing, None), warning()],
            Rendered::Grid(grid) => {
                let mut tree = Vec::with_capacity(grid.rows().len() + 1);
                tree.push(style_element(&self.config.spacing, Some(grid)));
                tree.extend(grid.rows().iter().cloned());
                tree
            }
        }
    }

    /// Serialized shadow scope.
    pub fn shadow_html(&self) -> String {
        markup::to_html(&self.shadow_tree())
    }

    /// Shadow scope with caller content assigned to the insertion points.
    pub fn compose(&self, children: &[SlottedContent]) -> Vec<Node> {
        slots::compose(&self.shadow_tree(), children)
    }

    /// Serialized [`Self::compose`].
    pub fn compose_html(&self, children: &[SlottedContent]) -> String {
        markup::to_html(&self.compose(children))
    }

    fn regenerate(&mut self) {
        self.rendered = render(&self.config);
        self.generation += 1;
        debug!("grid regenerated (generation {})", self.generation);
    }
}

fn style_element(spacing: &GridSpacing, grid: Option<&CompiledGrid>) -> Node {
    let mut sheet = host_rules(spacing);
    if let Some(compiled) = grid {
        sheet.append(compiled.stylesheet());
    }
    Element::new("style")
        .with_child(Node::text(sheet.to_css()))
        .into()
}
