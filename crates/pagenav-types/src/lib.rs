//! Page link types for pagenav.
//!
//! A pagination control is rendered from an ordered sequence of [`PageLink`]
//! values; each value is either a clickable page reference or a gap marker
//! standing in for an omitted run of pages.

#![warn(missing_docs)]

mod link;

pub use link::PageLink;
