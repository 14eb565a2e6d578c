//! Grid Spec - declarative grid layouts from a compact `dim` string
//!
//! A `dim` string such as `"70 30; 50 50;"` describes rows separated by `;`,
//! each a list of percentage column widths. The compiler turns it into one CSS
//! grid rule per row and one row container per row, with a numbered `<slot>`
//! per cell. Cells nobody fills show a placeholder explaining how to fill them.
//!
//! ```
//! let grid = grid_spec::compile("50 50;30 30 40;", "", "", false);
//! assert_eq!(grid.rows().len(), 2);
//! assert_eq!(grid.insertion_points().len(), 5);
//! ```

#![forbid(unsafe_code)]

pub mod compiler;
pub mod component;
pub mod config;
pub mod markup;
pub mod slots;
pub mod spec;
pub mod stylesheet;

pub use compiler::{CompiledGrid, InsertionPoint, compile};
pub use component::{GridComponent, Rendered};
pub use config::{GridConfig, GridSpacing};
pub use markup::{Element, Node};
pub use slots::SlottedContent;
pub use spec::GridSpecification;
