//! Family tree view and the connector lines drawn over it.

pub mod ancestry;
mod component;
pub mod config;
pub mod dom;
pub mod geometry;
pub mod lines;

pub use ancestry::{Mouse, Pedigree, Sex};
pub use component::PedigreeTree;
pub use config::{LineStyle, TreeConfig};
pub use dom::{draw_tree_lines, run_after_load};
pub use lines::{ConnectorLine, IndividualBox, render_pass};
