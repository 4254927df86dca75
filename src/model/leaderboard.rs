//! Leaderboard rows read from the game database.

/// Number of players shown per leaderboard page.
pub const PAGE_SIZE: u64 = 10;

/// Player and their total time played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaytimeEntry {
    pub user_name: String,
    pub total_seconds: i64,
}

/// Player's richest character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceEntry {
    pub user_name: String,
    pub char_name: String,
    pub bank_balance: i64,
}

/// One page of the balance leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancePage {
    pub entries: Vec<BalanceEntry>,
    /// Zero based page index.
    pub page: u64,
    /// Always at least 1.
    pub total_pages: u64,
    pub total_count: u64,
}

impl BalancePage {
    /// Rank of the first entry on this page, starting at 1.
    pub fn first_rank(&self) -> u64 {
        self.page * PAGE_SIZE + 1
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

/// Number of pages needed for `total_count` rows, never less than 1.
pub fn total_pages(total_count: u64) -> u64 {
    total_count.div_ceil(PAGE_SIZE).max(1)
}
