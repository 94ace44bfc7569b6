//! Pagination counters and the navigation affordances derived from them.

/// Current page and total page count of the post listing.
///
/// Invariant: `1 <= current <= total` whenever `total >= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page currently requested or shown.
    current: u32,
    /// Total pages reported by the last successful fetch.
    total: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

/// Pagination controls as the view should display them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationUi {
    /// Whether the pagination group is shown at all.
    pub visible: bool,
    /// Whether "previous" can be activated.
    pub prev_enabled: bool,
    /// Whether "next" can be activated.
    pub next_enabled: bool,
    /// Page info text, `"<current> / <total>"`.
    pub info: String,
}

impl Pagination {
    /// 1-based current page.
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Total page count (may be 0 when the server reports an empty listing).
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// What: Record the total page count reported by the server.
    ///
    /// Details:
    /// - Clamps the current page down when the listing shrank, keeping the invariant.
    pub fn set_total(&mut self, total: u32) {
        self.total = total;
        if total >= 1 && self.current > total {
            self.current = total;
        }
    }

    /// What: Advance to the next page.
    ///
    /// Output:
    /// - `Some(page)` with the new current page, or `None` when already on the last page.
    pub const fn advance(&mut self) -> Option<u32> {
        if self.current >= self.total {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// What: Step back to the previous page.
    ///
    /// Output:
    /// - `Some(page)` with the new current page, or `None` when already on page 1.
    pub const fn retreat(&mut self) -> Option<u32> {
        if self.current <= 1 {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    /// What: Derive the pagination controls for the view.
    ///
    /// Output:
    /// - Hidden group when `total <= 1`; otherwise prev/next enablement and `"current / total"`.
    #[must_use]
    pub fn affordances(&self) -> PaginationUi {
        if self.total <= 1 {
            return PaginationUi::default();
        }
        PaginationUi {
            visible: true,
            prev_enabled: self.current > 1,
            next_enabled: self.current < self.total,
            info: format!("{} / {}", self.current, self.total),
        }
    }
}
