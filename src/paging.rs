//! Pagination Window Calculator
//!
//! Derives the bounded set of page controls for a large result set: at most
//! five numeric entries, with the first and last page always present and
//! ellipses standing in for the gaps.

/// One rendered slot in the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u32),
    Ellipsis,
}

/// Page markers to render for `current` of `total` pages.
///
/// Empty when `total <= 1`; callers skip the control entirely in that case.
pub fn page_markers(current: u32, total: u32) -> Vec<PageMarker> {
    if total <= 1 {
        return Vec::new();
    }
    if total <= 5 {
        return (1..=total).map(PageMarker::Page).collect();
    }

    // Window of up to three pages around `current`, clamped to [2, total-1].
    let (start, end) = if current <= 3 {
        (2, 4)
    } else if current >= total - 2 {
        (total - 3, total - 1)
    } else {
        (current - 1, current + 1)
    };

    let mut markers = vec![PageMarker::Page(1)];
    if start > 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.extend((start..=end).map(PageMarker::Page));
    if end < total - 1 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::Page(total));
    markers
}

/// 1-based (first, last) item numbers shown on `page`, for the
/// "Showing first to last of total results" label.
pub fn item_range(page: u32, limit: u32, total_count: u32) -> (u32, u32) {
    if total_count == 0 {
        return (0, 0);
    }
    let first = ((page - 1) * limit + 1).min(total_count);
    let last = (page * limit).min(total_count);
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    #[test]
    fn single_page_renders_no_control() {
        assert!(page_markers(1, 0).is_empty());
        assert!(page_markers(1, 1).is_empty());
    }

    #[test]
    fn five_or_fewer_pages_are_all_shown() {
        assert_eq!(
            page_markers(2, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(page_markers(1, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn window_near_start() {
        assert_eq!(
            page_markers(1, 12),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(12)]
        );
        assert_eq!(
            page_markers(3, 12),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(12)]
        );
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            page_markers(7, 12),
            vec![
                Page(1),
                Ellipsis,
                Page(6),
                Page(7),
                Page(8),
                Ellipsis,
                Page(12)
            ]
        );
    }

    #[test]
    fn window_near_end() {
        assert_eq!(
            page_markers(12, 12),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Page(12)]
        );
        assert_eq!(
            page_markers(10, 12),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Page(12)]
        );
    }

    #[test]
    fn window_abutting_endpoints_drops_ellipses() {
        // current=4 of 6: window [3,5] touches both endpoints' neighbors
        assert_eq!(
            page_markers(4, 6),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
        assert_eq!(
            page_markers(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
    }

    #[test]
    fn item_range_clamps_to_total() {
        assert_eq!(item_range(1, 10, 42), (1, 10));
        assert_eq!(item_range(5, 10, 42), (41, 42));
        assert_eq!(item_range(1, 10, 3), (1, 3));
        assert_eq!(item_range(1, 10, 0), (0, 0));
    }
}
