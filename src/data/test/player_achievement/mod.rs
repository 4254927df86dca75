use std::collections::BTreeSet;

use crate::{data::player_achievement::PlayerAchievementStore, error::AppError};
use test_utils::{builder::TestBuilder, context::TestFile};

mod add_achievement;
mod get_player_achievements;
mod remove_achievement;
mod remove_achievement_from_all_players;
mod upsert_player;

fn ids(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}
