//! # Reinhardt Data View Core
//!
//! Leaf building blocks shared by every Reinhardt data view widget.
//!
//! ## Modules
//!
//! - [`html`]: [`Cell`] values, attribute maps and the [`Tag`] builder that turns
//!   them into markup
//! - [`sort`]: ordered sort specifications and their canonical string form
//! - [`pagination`]: page tokens for offset and keyset pagination
//! - [`url`]: parameter placement and the [`UrlParametersFactory`]
//! - [`i18n`]: the [`Translator`] seam and two stock translators
//! - [`theme`]: CSS classes and markup used to decorate sortable headers
//! - [`settings`]: file-loadable settings bundling the pieces above
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_dataview_core::{Cell, Content};
//!
//! let cell = Cell::new()
//!     .attribute("class", "name")
//!     .content(Content::text("Tom & Jerry"));
//!
//! assert_eq!(
//!     cell.render("td").unwrap(),
//!     r#"<td class="name">Tom &amp; Jerry</td>"#
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod html;
pub mod i18n;
pub mod pagination;
pub mod settings;
pub mod sort;
pub mod theme;
pub mod url;

pub use error::{CoreError, CoreResult};
pub use html::{AttributeValue, Attributes, Cell, Content, Encode, Tag};
pub use i18n::{CatalogTranslator, DEFAULT_TRANSLATION_CATEGORY, IdentityTranslator, Translator};
pub use pagination::PageToken;
pub use settings::DataViewSettings;
pub use sort::{Sort, SortDirection, SortOrder};
pub use theme::SortableHeaderTheme;
pub use url::{
	ParameterPlacement, RouteUrlCreator, UrlConfig, UrlCreator, UrlParameters,
	UrlParametersFactory,
};
