//! The page link value type.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One slot in a rendered pagination control.
///
/// A slot either references a page by number or is a gap marker standing in
/// for an omitted contiguous run of pages (rendered as an ellipsis). Links
/// are immutable values; a gap can never be active because the two
/// constructors make that state unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageLink {
    /// Referenced page number; `None` marks a gap.
    page: Option<u32>,
    /// Whether this slot is the page currently being viewed.
    active: bool,
}

impl PageLink {
    /// Create a clickable link to `page` (1-based).
    pub fn new(page: u32, active: bool) -> Self {
        Self {
            page: Some(page),
            active,
        }
    }

    /// Create a non-clickable gap marker.
    pub fn gap() -> Self {
        Self {
            page: None,
            active: false,
        }
    }

    /// The referenced page number, or `None` for a gap marker.
    pub fn page(&self) -> Option<u32> {
        self.page
    }

    /// Whether this link points at the page currently being viewed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether this link is a gap marker.
    pub fn is_gap(&self) -> bool {
        self.page.is_none()
    }
}

// Hand-written so the derived gap flag is part of the record. The rendering
// layer receives all three fields every time: `page` (number or null),
// `active`, and `disabled` (true iff `page` is null).
impl Serialize for PageLink {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("PageLink", 3)?;
        record.serialize_field("page", &self.page)?;
        record.serialize_field("active", &self.active)?;
        record.serialize_field("disabled", &self.is_gap())?;
        record.end()
    }
}
