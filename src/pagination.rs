//! Page window arithmetic for content listings.
//!
//! Featured items are shown separately above a listing, so they are removed
//! from both the count and the ID set before any page math.

use serde::Serialize;
use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationWindow {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub page_size: u32,
}

impl PaginationWindow {
    /// The requested page is past the end of a non-empty listing.
    pub fn needs_redirect(&self) -> bool {
        self.total_pages > 0 && self.current_page > self.total_pages
    }

    /// Number of items to skip in the paginated tail.
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page - 1) * u64::from(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Parse a raw `page` query value.
///
/// Reads the leading integer after optional whitespace and sign, so `"2.5"`
/// is page 2 and `"3abc"` is page 3. Values past `u32::MAX` saturate.
/// Anything without a positive leading integer is page 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    let Some(raw) = raw.map(str::trim_start) else {
        return 1;
    };

    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);

    if negative || digits.is_empty() {
        return 1;
    }
    // Only overflow can fail here
    digits.parse::<u32>().unwrap_or(u32::MAX).max(1)
}

/// Compute the page window for a listing.
///
/// A `page_size` of zero is treated as one.
pub fn compute_window(
    raw_page: Option<&str>,
    total_count: u64,
    page_size: u32,
    exclude_count: u64,
) -> PaginationWindow {
    let page_size = page_size.max(1);
    let total_items = total_count.saturating_sub(exclude_count);
    let total_pages = total_items.div_ceil(u64::from(page_size));

    PaginationWindow {
        current_page: parse_page(raw_page),
        total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        total_items,
        page_size,
    }
}

/// Remove featured IDs from the listing IDs, keeping order.
pub fn exclude_ids<T>(ids: &[T], excluded: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let excluded: HashSet<&T> = excluded.iter().collect();
    ids.iter()
        .filter(|id| !excluded.contains(id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== parse_page Tests ====================

    #[test]
    fn test_parse_page_coerces_bad_input() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-3")), 1);
        assert_eq!(parse_page(Some("+")), 1);
        assert_eq!(parse_page(Some("x2")), 1);
    }

    #[test]
    fn test_parse_page_reads_leading_integer() {
        assert_eq!(parse_page(Some("2.5")), 2);
        assert_eq!(parse_page(Some("3abc")), 3);
        assert_eq!(parse_page(Some("+4")), 4);
        assert_eq!(parse_page(Some("007")), 7);
        assert_eq!(parse_page(Some("0.9")), 1);
    }

    #[test]
    fn test_parse_page_saturates_large_values() {
        assert_eq!(parse_page(Some("5000000000")), u32::MAX);
        assert_eq!(parse_page(Some("99999999999999999999999")), u32::MAX);
    }

    #[test]
    fn test_window_uses_leading_integer_page() {
        let window = compute_window(Some("2.5"), 25, 10, 0);
        assert_eq!(window.current_page, 2);
        assert_eq!(window.total_pages, 3);
        assert!(!window.needs_redirect());
    }

    #[test]
    fn test_parse_page_valid() {
        assert_eq!(parse_page(Some("1")), 1);
        assert_eq!(parse_page(Some(" 7 ")), 7);
    }

    // ==================== compute_window Tests ====================

    #[test]
    fn test_window_with_exclusions_triggers_redirect() {
        let window = compute_window(Some("5"), 25, 10, 10);
        assert_eq!(window.total_items, 15);
        assert_eq!(window.total_pages, 2);
        assert_eq!(window.current_page, 5);
        assert!(window.needs_redirect());
    }

    #[test]
    fn test_window_in_range() {
        let window = compute_window(Some("2"), 25, 10, 0);
        assert_eq!(window.total_pages, 3);
        assert!(!window.needs_redirect());
        assert_eq!(window.offset(), 10);
        assert!(window.has_previous());
        assert!(window.has_next());
    }

    #[test]
    fn test_empty_listing_never_redirects() {
        let window = compute_window(Some("4"), 0, 10, 0);
        assert_eq!(window.total_pages, 0);
        assert!(!window.needs_redirect());
    }

    #[test]
    fn test_more_excluded_than_total() {
        let window = compute_window(None, 3, 10, 5);
        assert_eq!(window.total_items, 0);
        assert_eq!(window.total_pages, 0);
    }

    #[test]
    fn test_zero_page_size_is_one() {
        let window = compute_window(Some("3"), 3, 0, 0);
        assert_eq!(window.page_size, 1);
        assert_eq!(window.total_pages, 3);
        assert!(!window.needs_redirect());
        assert!(!window.has_next());
    }

    // ==================== exclude_ids Tests ====================

    #[test]
    fn test_exclude_ids_keeps_order() {
        let ids = vec!["a", "b", "c", "d", "e"];
        assert_eq!(exclude_ids(&ids, &["d", "a"]), vec!["b", "c", "e"]);
        assert_eq!(exclude_ids(&ids, &[]), ids);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_current_page_is_at_least_one(raw in ".*") {
            let window = compute_window(Some(&raw), 100, 10, 0);
            prop_assert!(window.current_page >= 1);
        }

        #[test]
        fn prop_pages_cover_items(total in 0u64..10_000, excluded in 0u64..200, size in 1u32..100) {
            let window = compute_window(None, total, size, excluded);
            let capacity = u64::from(window.total_pages) * u64::from(size);
            prop_assert!(capacity >= window.total_items);
            prop_assert!(capacity < window.total_items + u64::from(size));
        }

        #[test]
        fn prop_redirect_only_past_last_page(page in 1u32..500, total in 0u64..2_000) {
            let raw = page.to_string();
            let window = compute_window(Some(&raw), total, 10, 0);
            prop_assert_eq!(
                window.needs_redirect(),
                window.total_pages > 0 && page > window.total_pages
            );
        }
    }
}
