//! Which page links the pager shows.
//!
//! Page `p` is listed when it is the first page, the last page, or within two
//! pages of the current one. Gaps are left as they are; no ellipsis entries.

/// Pages on each side of the current page that are always listed.
pub const WINDOW_RADIUS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationWindow {
    /// Current page after clamping into `1..=last_page`.
    pub current: u32,
    /// `ceil(total / page_size)`; zero when there is nothing to page.
    pub last_page: u32,
    /// Listed pages, ascending, each once.
    pub pages: Vec<u32>,
    pub show_previous: bool,
    pub show_next: bool,
}

impl PaginationWindow {
    pub fn compute(total: u64, page_size: u32, current: u32) -> Self {
        let last_page = page_count(total, page_size);
        let current = current.clamp(1, last_page.max(1));

        let pages = (1..=last_page)
            .filter(|&page| {
                page == 1 || page == last_page || page.abs_diff(current) <= WINDOW_RADIUS
            })
            .collect();

        Self {
            current,
            last_page,
            pages,
            show_previous: current > 1,
            show_next: current < last_page,
        }
    }

    pub fn is_current(&self, page: u32) -> bool {
        page == self.current
    }

    /// True when two consecutive listed pages are not adjacent (a visual break).
    pub fn has_gap_before(&self, index: usize) -> bool {
        index > 0 && self.pages[index] - self.pages[index - 1] > 1
    }
}

/// `ceil(total / page_size)`, saturating at `u32::MAX`. A zero page size yields zero pages.
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The pager is hidden while a keyword is active or when everything fits on one page.
pub fn pagination_visible(total: u64, page_size: u32, keyword: &str) -> bool {
    keyword.trim().is_empty() && total > u64::from(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(total: u64, page_size: u32, current: u32) -> Vec<u32> {
        let last = page_count(total, page_size);
        let current = current.clamp(1, last.max(1));
        (1..=last)
            .filter(|p| {
                *p == 1 || *p == last || (i64::from(*p) - i64::from(current)).abs() <= 2
            })
            .collect()
    }

    #[test]
    fn middle_page_window() {
        let window = PaginationWindow::compute(200, 10, 10);
        assert_eq!(window.last_page, 20);
        assert_eq!(window.pages, vec![1, 8, 9, 10, 11, 12, 20]);
        assert!(window.show_previous);
        assert!(window.show_next);
        assert!(window.has_gap_before(1));
        assert!(!window.has_gap_before(2));
    }

    #[test]
    fn first_page_has_no_previous() {
        let window = PaginationWindow::compute(95, 10, 1);
        assert_eq!(window.pages, vec![1, 2, 3, 10]);
        assert!(!window.show_previous);
        assert!(window.show_next);
    }

    #[test]
    fn last_page_has_no_next() {
        let window = PaginationWindow::compute(100, 10, 10);
        assert_eq!(window.pages, vec![1, 8, 9, 10]);
        assert!(window.show_previous);
        assert!(!window.show_next);
    }

    #[test]
    fn current_is_clamped() {
        let window = PaginationWindow::compute(30, 10, 99);
        assert_eq!(window.current, 3);
        assert_eq!(window.pages, vec![1, 2, 3]);

        let window = PaginationWindow::compute(30, 10, 0);
        assert_eq!(window.current, 1);
    }

    #[test]
    fn nothing_to_page() {
        let window = PaginationWindow::compute(0, 10, 1);
        assert_eq!(window.last_page, 0);
        assert!(window.pages.is_empty());
        assert!(!window.show_previous);
        assert!(!window.show_next);
    }

    #[test]
    fn window_matches_definition_exhaustively() {
        for total in 0..=120u64 {
            for page_size in 1..=13u32 {
                for current in 1..=14u32 {
                    let window = PaginationWindow::compute(total, page_size, current);
                    assert_eq!(
                        window.pages,
                        brute_force(total, page_size, current),
                        "total={total} page_size={page_size} current={current}"
                    );
                    assert!(window.pages.windows(2).all(|w| w[0] < w[1]));
                    assert_eq!(window.show_previous, window.current > 1);
                    assert_eq!(window.show_next, window.current < window.last_page);
                }
            }
        }
    }

    #[test]
    fn visibility_rules() {
        assert!(pagination_visible(21, 20, ""));
        assert!(!pagination_visible(20, 20, ""));
        assert!(!pagination_visible(500, 20, "rust"));
        assert!(pagination_visible(500, 20, "   "));
    }
}
