use std::fmt;
use std::ops::Range;

use serde::{Serialize, Serializer};

/// Entries shown per page
pub const ITEMS_PER_PAGE: usize = 12;

/// Page counts at or below this are listed in full
const MAX_FULL_PAGE_LIST: usize = 5;

/// One slot of the compact page-number list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(page) => write!(f, "{}", page),
            PageToken::Ellipsis => f.write_str("…"),
        }
    }
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(page) => serializer.serialize_u64(*page as u64),
            PageToken::Ellipsis => serializer.serialize_str("…"),
        }
    }
}

/// Number of pages needed for `len` items (0 for an empty list)
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1))
}

/// Page count as displayed: an empty list still shows one page
pub fn display_total_pages(len: usize, per_page: usize) -> usize {
    total_pages(len, per_page).max(1)
}

/// Index range of a 1-based page, clipped to `len`
///
/// Page 0 is read as page 1. A page past the end gives an empty range.
pub fn page_range(page: usize, per_page: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(len);
    let end = start.saturating_add(per_page).min(len);
    start..end
}

/// Compact page-number list of at most 7 tokens
///
/// - up to 5 pages: every page
/// - near the start: `1 2 3 4 … N`
/// - near the end: `1 … N-3 N-2 N-1 N`
/// - otherwise: `1 … c-1 c c+1 … N`
pub fn page_tokens(current: usize, total: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    if total <= MAX_FULL_PAGE_LIST {
        return (1..=total).map(Page).collect();
    }

    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![Page(1), Ellipsis, Page(total - 3), Page(total - 2), Page(total - 1), Page(total)]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}
