//! URL handling module for Support-Atlas
//!
//! This module provides the site's URL grammar (category / article
//! classification), href resolution, and the ordered de-duplicating URL list
//! used as a scoped accumulator by the extractors and the walker.

mod grammar;
mod list;
mod normalize;

pub use grammar::{SiteGrammar, UrlKind};
pub use list::UrlList;
pub use normalize::resolve_href;
