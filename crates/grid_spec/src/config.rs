//! Component configuration, as set through element attributes.

use anyhow::{Context as _, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Grid dimensions attribute.
pub const ATTR_DIM: &str = "dim";
/// Per-cell inline style attribute.
pub const ATTR_SLOT_STYLE: &str = "slot-style";
/// Alias of [`ATTR_SLOT_STYLE`].
pub const ATTR_CELL_STYLE: &str = "cell-style";
/// Per-row inline style attribute.
pub const ATTR_ROW_STYLE: &str = "row-style";
/// Boolean attribute suppressing placeholder content.
pub const ATTR_NO_FILLERS: &str = "no-fillers";
/// Host property overriding the row spacing.
pub const PROP_ROW_GAP: &str = "--dd-gridspace-row";
/// Host property overriding the column spacing.
pub const PROP_COL_GAP: &str = "--dd-gridspace-col";

/// Spacing used when the host does not set its own.
pub const DEFAULT_GAP: &str = "10px";

/// Row and column spacing fallbacks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpacing {
    /// Space below each row.
    pub row: String,
    /// Space between columns.
    pub col: String,
}

impl Default for GridSpacing {
    fn default() -> Self {
        Self {
            row: DEFAULT_GAP.to_owned(),
            col: DEFAULT_GAP.to_owned(),
        }
    }
}

/// Everything the grid component can be configured with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GridConfig {
    /// Grid specification string (`dim` attribute).
    pub dim: String,
    /// Inline style for every cell.
    #[serde(alias = "slotStyle")]
    pub slot_style: String,
    /// Alias of `slot_style`; both are applied when set.
    #[serde(alias = "cellStyle")]
    pub cell_style: String,
    /// Inline style for every row.
    #[serde(alias = "rowStyle")]
    pub row_style: String,
    /// Render empty insertion points instead of placeholders.
    #[serde(alias = "noFillers")]
    pub no_fillers: bool,
    pub spacing: GridSpacing,
}

impl GridConfig {
    /// Build a configuration from `(name, value)` attribute pairs.
    ///
    /// Names are matched ASCII case-insensitively. `no-fillers` is a boolean
    /// attribute: being present makes it true whatever its value. Unknown
    /// attributes are ignored.
    pub fn from_external_attributes<'attr, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'attr str, &'attr str)>,
    {
        let mut config = Self::default();
        for (name, value) in attrs {
            config.set_attribute(name, value);
        }
        config
    }

    /// Parse a JSON configuration object. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns an error if `text` is not a JSON object matching the config shape.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid grid config JSON")
    }

    /// Apply one attribute. Returns false when the name is not recognized.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        let name_lc = name.to_ascii_lowercase();
        match name_lc.as_str() {
            ATTR_DIM => value.clone_into(&mut self.dim),
            ATTR_SLOT_STYLE => value.clone_into(&mut self.slot_style),
            ATTR_CELL_STYLE => value.clone_into(&mut self.cell_style),
            ATTR_ROW_STYLE => value.clone_into(&mut self.row_style),
            ATTR_NO_FILLERS => self.no_fillers = true,
            PROP_ROW_GAP => value.trim().clone_into(&mut self.spacing.row),
            PROP_COL_GAP => value.trim().clone_into(&mut self.spacing.col),
            _ => {
                debug!("ignoring unknown grid attribute {name:?}");
                return false;
            }
        }
        true
    }

    /// Reset one attribute to its default. Returns false when the name is not recognized.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let name_lc = name.to_ascii_lowercase();
        match name_lc.as_str() {
            ATTR_DIM => self.dim.clear(),
            ATTR_SLOT_STYLE => self.slot_style.clear(),
            ATTR_CELL_STYLE => self.cell_style.clear(),
            ATTR_ROW_STYLE => self.row_style.clear(),
            ATTR_NO_FILLERS => self.no_fillers = false,
            PROP_ROW_GAP => DEFAULT_GAP.clone_into(&mut self.spacing.row),
            PROP_COL_GAP => DEFAULT_GAP.clone_into(&mut self.spacing.col),
            _ => {
                debug!("ignoring removal of unknown grid attribute {name:?}");
                return false;
            }
        }
        true
    }

    /// Whether a non-empty grid specification was supplied.
    #[inline]
    pub fn has_dim(&self) -> bool {
        !self.dim.is_empty()
    }

    /// Style applied to every cell: both aliases, non-empty ones joined by a space.
    pub fn effective_cell_style(&self) -> String {
        [self.slot_style.as_str(), self.cell_style.as_str()]
            .into_iter()
            .filter(|style| !style.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
