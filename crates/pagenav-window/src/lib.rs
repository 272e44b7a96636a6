//! Page-window condensation for pagination controls.
//!
//! Turns a `(current page, total pages)` pair into the ordered sequence of
//! [`PageLink`] values a navigation widget should render: real page
//! references plus gap markers standing in for omitted runs, in the familiar
//! `1 2 … 7 8 9 … 19 20` shape.

#![warn(missing_docs)]

mod error;
mod window;

pub use error::{PaginateError, PaginateResult};
pub use window::generate;

// Re-export the link type for convenience
pub use pagenav_types::PageLink;
