use chrono::NaiveDate;

use crate::{
    data::sponsor::SponsorRepository,
    error::AppError,
    model::sponsor::{SponsorRecord, DEFAULT_NAME_COLOR},
};
use test_utils::{builder::TestBuilder, context::TestFile};

mod find_ckey;
mod remove;
mod set_color;
mod upsert;

fn record(discord_name: &str, ckey: &str) -> SponsorRecord {
    SponsorRecord {
        discord_name: discord_name.to_string(),
        ckey: ckey.to_string(),
        role_id: 111,
        updated_at: NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(5, 6, 7)
            .unwrap(),
        color: DEFAULT_NAME_COLOR.to_string(),
    }
}
