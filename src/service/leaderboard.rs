use sea_orm::DatabaseConnection;

use crate::{
    data::game::GameDatabaseRepository,
    error::AppError,
    model::leaderboard::{total_pages, BalancePage, PlaytimeEntry, PAGE_SIZE},
};

/// Number of players on the playtime leaderboard.
pub const PLAYTIME_TOP_SIZE: u64 = 10;

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Players with the most time played
    pub async fn top_playtime(&self) -> Result<Vec<PlaytimeEntry>, AppError> {
        Ok(GameDatabaseRepository::new(self.db)
            .top_players_by_playtime(PLAYTIME_TOP_SIZE)
            .await?)
    }

    /// One page of the balance leaderboard
    ///
    /// Pages past the end are clamped to the last page, which keeps the pager usable
    /// when the leaderboard shrinks while a message is open.
    pub async fn balance_page(&self, page: u64) -> Result<BalancePage, AppError> {
        let repo = GameDatabaseRepository::new(self.db);

        let total_count = repo.count_players_with_balance().await?;
        let total_pages = total_pages(total_count);
        let page = page.min(total_pages - 1);

        let entries = repo
            .top_players_by_balance(PAGE_SIZE, page * PAGE_SIZE)
            .await?;

        Ok(BalancePage {
            entries,
            page,
            total_pages,
            total_count,
        })
    }
}

/// Medal for the top three positions, `N.` for the rest.
pub fn medal(position: u64) -> String {
    match position {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("{n}."),
    }
}

/// Formats seconds as `X h Y min`, or `Y min` below one hour.
pub fn format_playtime(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;

    if hours > 0 {
        format!("{hours} h {minutes} min")
    } else {
        format!("{minutes} min")
    }
}

/// Formats a balance with `,` thousands separators.
pub fn format_balance(balance: i64) -> String {
    let digits = balance.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if balance < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
