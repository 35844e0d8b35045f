// ── Pagination ──

/// Fixed page-size options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [Self::Five, Self::Ten, Self::TwentyFive];

    pub fn as_usize(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::TwentyFive => 25,
        }
    }

    /// Map a configured row count onto one of the fixed options.
    pub fn from_rows(rows: usize) -> Option<Self> {
        match rows {
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            25 => Some(Self::TwentyFive),
            _ => None,
        }
    }

    /// Next option, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Self::Five => Self::Ten,
            Self::Ten => Self::TwentyFive,
            Self::TwentyFive => Self::Five,
        }
    }
}

/// Current page window over a derived list.
///
/// The page index is clamped implicitly by slicing: an out-of-range page
/// yields an empty window, never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    size: PageSize,
}

impl Pager {
    pub fn page(self) -> usize {
        self.page
    }

    pub fn size(self) -> PageSize {
        self.size
    }

    /// Changing the page size always resets to the first page.
    pub fn set_size(&mut self, size: PageSize) {
        self.size = size;
        self.page = 0;
    }

    /// Cycle to the next page-size option (resets to the first page).
    pub fn cycle_size(&mut self) {
        self.set_size(self.size.cycle());
    }

    pub fn next_page(&mut self, total: usize) {
        if (self.page + 1) * self.size.as_usize() < total {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Number of pages the current size splits `total` rows into (at
    /// least 1, so an empty list still renders one empty page).
    pub fn page_count(self, total: usize) -> usize {
        total.div_ceil(self.size.as_usize()).max(1)
    }

    /// The visible window: `rows[page*size .. page*size + size]`,
    /// clamped to the list bounds.
    pub fn slice<'a, T>(self, rows: &'a [T]) -> &'a [T] {
        let start = (self.page * self.size.as_usize()).min(rows.len());
        let end = (start + self.size.as_usize()).min(rows.len());
        &rows[start..end]
    }

    /// `"1-5 of 12"` label for the status line.
    pub fn range_label(self, total: usize) -> String {
        if total == 0 {
            return "0 of 0".into();
        }
        let start = (self.page * self.size.as_usize()).min(total);
        let end = (start + self.size.as_usize()).min(total);
        if start >= end {
            return format!("0 of {total}");
        }
        format!("{}-{} of {}", start + 1, end, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_the_requested_window() {
        let rows: Vec<u32> = (0..12).collect();
        let mut pager = Pager::default();
        pager.next_page(rows.len()); // pageSize=5, page=1

        assert_eq!(pager.slice(&rows), &[5, 6, 7, 8, 9]);
    }

    #[test]
    fn last_partial_page_is_short() {
        let rows: Vec<u32> = (0..12).collect();
        let mut pager = Pager::default();
        pager.next_page(rows.len());
        pager.next_page(rows.len());

        assert_eq!(pager.page(), 2);
        assert_eq!(pager.slice(&rows), &[10, 11]);
    }

    #[test]
    fn out_of_range_page_yields_an_empty_window() {
        let rows: Vec<u32> = (0..3).collect();
        let mut pager = Pager::default();
        // Force an out-of-range page by shrinking the list after paging.
        pager.next_page(20);
        pager.next_page(20);

        assert_eq!(pager.slice(&rows), &[] as &[u32]);
        assert_eq!(pager.range_label(rows.len()), "0 of 3");
    }

    #[test]
    fn changing_page_size_resets_to_first_page() {
        let mut pager = Pager::default();
        pager.next_page(30);
        pager.next_page(30);
        assert_eq!(pager.page(), 2);

        pager.set_size(PageSize::Ten);
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.size(), PageSize::Ten);

        pager.next_page(30);
        pager.cycle_size();
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.size(), PageSize::TwentyFive);
    }

    #[test]
    fn next_page_stops_at_the_last_page() {
        let mut pager = Pager::default();
        pager.next_page(7); // 5+2 rows -> pages 0,1
        pager.next_page(7);
        pager.next_page(7);
        assert_eq!(pager.page(), 1);

        pager.prev_page();
        pager.prev_page();
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn page_count_rounds_up_and_never_hits_zero() {
        let pager = Pager::default();
        assert_eq!(pager.page_count(0), 1);
        assert_eq!(pager.page_count(5), 1);
        assert_eq!(pager.page_count(6), 2);
        assert_eq!(pager.page_count(12), 3);
    }

    #[test]
    fn size_cycle_covers_all_options() {
        assert_eq!(PageSize::Five.cycle(), PageSize::Ten);
        assert_eq!(PageSize::Ten.cycle(), PageSize::TwentyFive);
        assert_eq!(PageSize::TwentyFive.cycle(), PageSize::Five);
        assert_eq!(PageSize::ALL.map(PageSize::as_usize), [5, 10, 25]);
    }
}
