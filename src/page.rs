//! Pagination state
//!
//! [`PageState`] describes the collection being paginated: where the caller
//! currently is, how many pages exist, and the derived navigation predicates.
//! The helpers only read it; producing one (from a database query, an API
//! response, anything else) is the caller's business.

/// Position within a paginated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Current page number, 1-based
    pub current_page: u32,
    /// Total number of pages (0 for an empty collection)
    pub total_pages: u32,
    /// Items per page
    pub per_page: u32,
}

impl PageState {
    /// Create a new state
    ///
    /// `current_page` is clamped up to 1; page numbers are 1-based.
    pub fn new(current_page: u32, total_pages: u32, per_page: u32) -> Self {
        Self {
            current_page: current_page.max(1),
            total_pages,
            per_page,
        }
    }

    /// Derive the state from a total item count
    pub fn from_total_count(current_page: u32, total_count: u64, per_page: u32) -> Self {
        let per = u64::from(per_page.max(1));
        let total_pages = total_count.div_ceil(per) as u32;
        Self::new(current_page, total_pages, per_page)
    }

    /// Is the current page the first one?
    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Is the current page the last one?
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Does the current page lie beyond the last page?
    pub fn is_out_of_range(&self) -> bool {
        self.current_page > self.total_pages
    }

    /// Previous page number, defined only when not on the first page
    pub fn prev_page(&self) -> Option<u32> {
        if self.is_first_page() {
            None
        } else {
            Some(self.current_page - 1)
        }
    }

    /// Next page number, defined only when a next page exists
    pub fn next_page(&self) -> Option<u32> {
        if self.is_last_page() || self.is_out_of_range() {
            None
        } else {
            Some(self.current_page + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let state = PageState::new(1, 10, 25);
        assert!(state.is_first_page());
        assert!(!state.is_last_page());
        assert_eq!(state.prev_page(), None);
        assert_eq!(state.next_page(), Some(2));
    }

    #[test]
    fn test_middle_page() {
        let state = PageState::new(5, 10, 25);
        assert!(!state.is_first_page());
        assert!(!state.is_last_page());
        assert_eq!(state.prev_page(), Some(4));
        assert_eq!(state.next_page(), Some(6));
    }

    #[test]
    fn test_last_page() {
        let state = PageState::new(10, 10, 25);
        assert!(state.is_last_page());
        assert!(!state.is_out_of_range());
        assert_eq!(state.next_page(), None);
        assert_eq!(state.prev_page(), Some(9));
    }

    #[test]
    fn test_out_of_range() {
        let state = PageState::new(11, 10, 25);
        assert!(state.is_out_of_range());
        assert!(state.is_last_page());
        assert_eq!(state.next_page(), None);
    }

    #[test]
    fn test_single_page_collection() {
        let state = PageState::new(1, 1, 25);
        assert!(state.is_first_page());
        assert!(state.is_last_page());
        assert_eq!(state.prev_page(), None);
        assert_eq!(state.next_page(), None);
    }

    #[test]
    fn test_from_total_count() {
        assert_eq!(PageState::from_total_count(1, 0, 25).total_pages, 0);
        assert_eq!(PageState::from_total_count(1, 25, 25).total_pages, 1);
        assert_eq!(PageState::from_total_count(1, 26, 25).total_pages, 2);
        assert_eq!(PageState::from_total_count(1, 101, 25).total_pages, 5);
    }
}
