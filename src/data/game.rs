use sea_orm::{DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement, Value};

use crate::model::leaderboard::{BalanceEntry, PlaytimeEntry};

const TOP_PLAYTIME_SQL: &str = r#"
SELECT p.last_seen_user_name AS user_name,
       CAST(EXTRACT(EPOCH FROM SUM(pt.time_spent)) AS BIGINT) AS total_seconds
FROM play_time pt
         INNER JOIN player p ON pt.player_id = p.user_id
GROUP BY p.last_seen_user_name
ORDER BY total_seconds DESC
LIMIT $1
"#;

const TOP_BALANCE_SQL: &str = r#"
WITH ranked_balances AS (
    SELECT p.last_seen_user_name AS user_name,
           prof.char_name,
           CAST(prof.bank_balance AS BIGINT) AS bank_balance,
           ROW_NUMBER() OVER (PARTITION BY p.user_id ORDER BY prof.bank_balance DESC) AS rn
    FROM profile prof
             INNER JOIN preference pref ON prof.preference_id = pref.preference_id
             INNER JOIN player p ON pref.user_id::text::uuid = p.user_id
    WHERE prof.bank_balance IS NOT NULL
)
SELECT user_name, char_name, bank_balance
FROM ranked_balances
WHERE rn = 1
ORDER BY bank_balance DESC
LIMIT $1 OFFSET $2
"#;

const COUNT_BALANCE_SQL: &str = r#"
SELECT COUNT(DISTINCT p.user_id) AS total
FROM profile prof
         INNER JOIN preference pref ON prof.preference_id = pref.preference_id
         INNER JOIN player p ON pref.user_id::text::uuid = p.user_id
WHERE prof.bank_balance IS NOT NULL
"#;

const RESOLVE_CKEY_SQL: &str = r#"
SELECT LOWER(TRIM(p.last_seen_user_name)) AS ckey
FROM player p
WHERE LOWER(TRIM(p.last_seen_user_name)) = LOWER(TRIM($1))
LIMIT 1
"#;

#[derive(Debug, FromQueryResult)]
struct PlaytimeRow {
    user_name: String,
    total_seconds: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
struct BalanceRow {
    user_name: String,
    char_name: String,
    bank_balance: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    total: i64,
}

#[derive(Debug, FromQueryResult)]
struct CkeyRow {
    ckey: String,
}

/// Read-only queries against the game server's PostgreSQL database.
///
/// The schema belongs to the game server; only raw statements are used so the bot
/// carries no entity definitions for tables it does not own.
pub struct GameDatabaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameDatabaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Players with the most summed playtime, highest first
    pub async fn top_players_by_playtime(&self, limit: u64) -> Result<Vec<PlaytimeEntry>, DbErr> {
        let rows = PlaytimeRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            TOP_PLAYTIME_SQL,
            [Value::from(limit as i64)],
        ))
        .all(self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| PlaytimeEntry {
                user_name: row.user_name,
                total_seconds: row.total_seconds.unwrap_or(0),
            })
            .collect())
    }

    /// Richest character of each player, richest first
    pub async fn top_players_by_balance(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<BalanceEntry>, DbErr> {
        let rows = BalanceRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            TOP_BALANCE_SQL,
            [Value::from(limit as i64), Value::from(offset as i64)],
        ))
        .all(self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| BalanceEntry {
                user_name: row.user_name,
                char_name: row.char_name,
                bank_balance: row.bank_balance.unwrap_or(0),
            })
            .collect())
    }

    /// Number of players that appear in the balance leaderboard
    pub async fn count_players_with_balance(&self) -> Result<u64, DbErr> {
        let row = CountRow::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            COUNT_BALANCE_SQL,
        ))
        .one(self.db)
        .await?;

        Ok(row.map_or(0, |row| row.total.max(0) as u64))
    }

    /// Resolves a player name to its canonical ckey, case-insensitively
    ///
    /// Returns `None` when no player has ever connected under that name.
    pub async fn resolve_ckey(&self, player_name: &str) -> Result<Option<String>, DbErr> {
        let row = CkeyRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            RESOLVE_CKEY_SQL,
            [Value::from(player_name)],
        ))
        .one(self.db)
        .await?;

        Ok(row.map(|row| row.ckey))
    }
}
