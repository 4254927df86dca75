use sea_orm::{DbErr, Value};
use std::collections::BTreeMap;

use crate::{
    data::game::GameDatabaseRepository,
    model::leaderboard::{BalanceEntry, PlaytimeEntry},
};
use test_utils::builder::{MockRow, TestBuilder};

mod count_players_with_balance;
mod resolve_ckey;
mod top_players_by_balance;
mod top_players_by_playtime;

fn row<const N: usize>(columns: [(&'static str, Value); N]) -> MockRow {
    BTreeMap::from(columns)
}
