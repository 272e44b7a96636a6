//! The page-window condensation algorithm.
//!
//! Given the current page and the total page count, [`generate`] decides for
//! every page whether to show it, omit it, or stand a gap marker in for an
//! omitted run. Ranges of up to ten pages are listed in full; longer ranges
//! always keep both ends visible and condense the middle around the current
//! page.

use crate::error::{PaginateError, PaginateResult};
use pagenav_types::PageLink;
use tracing::debug;

/// Largest page count rendered without gap markers.
const FULL_RANGE_MAX: u32 = 10;

/// Pages kept visible on each side of the current page in an extended range.
const PAGES_AROUND_CURRENT: u32 = 2;

/// Build the condensed page links for a page-navigation control.
///
/// Produces one entry per visible page plus gap markers standing in for
/// omitted runs. Ranges of ten pages or fewer are rendered in full; longer
/// ranges keep the first and last pages visible and condense the middle
/// around `current_page`.
///
/// # Arguments
///
/// * `current_page` - The page being viewed (1-based).
/// * `total_pages` - Total number of pages; zero means no navigation.
///
/// # Returns
///
/// The ordered links to render. Empty when `total_pages <= 1`.
///
/// # Errors
///
/// Returns [`PaginateError`] when `current_page` is zero, or beyond
/// `total_pages` for ranges of two or more pages.
///
/// # Example
///
/// ```
/// use pagenav_window::generate;
///
/// # fn main() -> Result<(), pagenav_window::PaginateError> {
/// let links = generate(6, 20)?;
/// assert_eq!(links.len(), 11);
/// assert!(links[2].is_gap());
/// # Ok(())
/// # }
/// ```
pub fn generate(current_page: u32, total_pages: u32) -> PaginateResult<Vec<PageLink>> {
    validate(current_page, total_pages)?;

    if total_pages <= 1 {
        return Ok(Vec::new());
    }

    if total_pages <= FULL_RANGE_MAX {
        Ok(full_range(current_page, total_pages))
    } else {
        Ok(extended_range(current_page, total_pages))
    }
}

/// Reject inputs the algorithm has no answer for.
///
/// The trivial range (`total_pages <= 1`) accepts any current page and
/// yields no links, so the range check only applies from two pages up.
fn validate(current_page: u32, total_pages: u32) -> PaginateResult<()> {
    if current_page == 0 {
        return Err(PaginateError::CurrentPageZero);
    }

    if total_pages >= 2 && current_page > total_pages {
        return Err(PaginateError::CurrentPageOutOfRange {
            current: current_page,
            total: total_pages,
        });
    }

    Ok(())
}

/// Every page shown, no gaps.
fn full_range(current_page: u32, total_pages: u32) -> Vec<PageLink> {
    (1..=total_pages)
        .map(|page| PageLink::new(page, page == current_page))
        .collect()
}

/// Both ends of the range stay visible; the middle condenses to the pages
/// around `current_page`, with gap markers standing in for omitted runs.
fn extended_range(current_page: u32, total_pages: u32) -> Vec<PageLink> {
    let bounds = Bounds::for_view(current_page, total_pages);
    debug!(
        current = current_page,
        total = total_pages,
        left = bounds.left,
        right = bounds.right,
        "condensing extended page range"
    );

    let link_to = |page: u32| PageLink::new(page, page == current_page);
    let mut links: Vec<PageLink> = Vec::new();

    for page in 1..=total_pages {
        if bounds.always_visible(page) {
            links.push(link_to(page));
            continue;
        }

        // One marker per omitted run: suppressed when the previous slot is
        // already a gap (or nothing has been appended yet).
        if bounds.gap_position(page) && links.last().is_some_and(|last| !last.is_gap()) {
            links.push(PageLink::gap());
        }

        if near_current(page, current_page, bounds.left) {
            links.push(link_to(page));
        }
    }

    links
}

/// The always-visible runs anchored at both ends of an extended range.
///
/// Pages `1..=left` and `right..=total_pages` are shown unconditionally.
/// The run nearest the viewer widens so the first or last seven pages never
/// collapse into a gap.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    /// Last page of the run anchored at page 1.
    left: u32,
    /// First page of the run anchored at the last page.
    right: u32,
}

impl Bounds {
    /// Pick the runs for the viewing position.
    ///
    /// Callers guarantee `total_pages > FULL_RANGE_MAX`, so none of the
    /// subtractions can underflow.
    fn for_view(current_page: u32, total_pages: u32) -> Self {
        if current_page > 5 && current_page < total_pages - 4 {
            // Viewer well inside the range: minimal runs at both ends.
            Self {
                left: 2,
                right: total_pages - 1,
            }
        } else if current_page <= 7 {
            // Near the start: pages 1-7 stay visible.
            Self {
                left: 7,
                right: total_pages - 1,
            }
        } else {
            // Near the end: the last seven pages stay visible.
            Self {
                left: 2,
                right: total_pages - 6,
            }
        }
    }

    /// Pages inside either end run are always shown.
    fn always_visible(&self, page: u32) -> bool {
        page <= self.left || page >= self.right
    }

    /// The first omitted page after the left run, or the last omitted page
    /// before the right run: the slots where a gap marker belongs.
    fn gap_position(&self, page: u32) -> bool {
        page == self.left + 1 || page == self.right - 1
    }
}

/// Pages within [`PAGES_AROUND_CURRENT`] of the current page, once that
/// window has detached from the left run (`current_page - 2 >= left`).
/// Saturating arithmetic: a clamped `0` start still fails the detachment
/// test, and a clamped `u32::MAX` end still admits every remaining page.
fn near_current(page: u32, current_page: u32, left: u32) -> bool {
    let first = current_page.saturating_sub(PAGES_AROUND_CURRENT);
    let last = current_page.saturating_add(PAGES_AROUND_CURRENT);

    first >= left && page >= first && page <= last
}
