//! Sponsor perk domain models.
//!
//! Sponsors are guild members holding one of the tracked paid roles. The game
//! server reads two flat files maintained by the bot: the sponsors file (which ckey
//! belongs to which sponsor and the name color they picked) and the disposable file
//! (consumable shop credits per ckey).

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

/// Name color assigned to a sponsor until they pick their own.
pub const DEFAULT_NAME_COLOR: &str = "#FF0000";

/// Timestamp layout used in the sponsors file.
pub const SPONSOR_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Field separator of the sponsors and disposable files.
pub const FIELD_SEPARATOR: &str = ", ";

pub static CKEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("ckey pattern is valid"));

pub static HEX_COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[A-Fa-f0-9]{6}$").expect("hex color pattern is valid"));

/// One line of the sponsors file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorRecord {
    /// Discord username, the key of the record.
    pub discord_name: String,
    pub ckey: String,
    /// Tracked role that made the member a sponsor.
    pub role_id: u64,
    pub updated_at: NaiveDateTime,
    /// `#RRGGBB` color of the sponsor's name in game.
    pub color: String,
}

impl SponsorRecord {
    /// Serializes the record as `name, ckey, role_id, timestamp, color`.
    pub fn to_line(&self) -> String {
        [
            self.discord_name.clone(),
            self.ckey.clone(),
            self.role_id.to_string(),
            self.updated_at.format(SPONSOR_TIMESTAMP_FORMAT).to_string(),
            self.color.clone(),
        ]
        .join(FIELD_SEPARATOR)
    }
}

/// One line of the disposable credits file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisposableRecord {
    pub ckey: String,
    pub slots: i64,
    pub tokens: i64,
}

impl DisposableRecord {
    /// Serializes the record as `ckey, slots, tokens`.
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.ckey,
            self.slots,
            self.tokens,
            sep = FIELD_SEPARATOR
        )
    }
}

/// Result of setting a sponsor's ckey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCkeyOutcome {
    /// Ckey stored before this change, if the sponsor had a record.
    pub previous_ckey: Option<String>,
    /// Whether the disposable credits followed the ckey change.
    pub credits_moved: bool,
}

/// Result of handing out consumable credits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditsOutcome {
    pub ckey: String,
    /// `true` if no credits record existed for the ckey before.
    pub created: bool,
}

/// Tracked sponsor roles gained and lost in one member update.
///
/// Only the first gained and first lost tracked role are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SponsorRoleChange {
    pub added: Option<u64>,
    pub removed: Option<u64>,
}
