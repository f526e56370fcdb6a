//! Contexts handed to column renderers
//!
//! - [`GlobalContext`]: per-render settings shared by every column
//! - [`HeaderContext`]: header-time view of the global context that negotiates
//!   sortable links
//! - [`DataContext`]: one row of data while a body cell is rendered

mod data;
mod global;
mod header;

pub use data::{DataContext, value_at, value_to_string};
pub use global::{GlobalContext, GlobalContextBuilder};
pub use header::{HeaderContext, SortLink, SortableHeader};
