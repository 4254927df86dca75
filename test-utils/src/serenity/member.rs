//! Test factories for creating Serenity User and Member objects.

use serenity::all::{Member, User};

/// Guild every test member belongs to.
pub const TEST_GUILD_ID: u64 = 900_000_000_000_000_001;

fn user_json(user_id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
    })
}

/// Creates a test Serenity User with the given id and username.
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, name: &str) -> User {
    serde_json::from_value(user_json(user_id, name))
        .expect("Failed to create test user - invalid JSON structure")
}

/// Creates a test Serenity guild Member.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `nick` - Guild nickname, used as the member's display name when set
/// - `role_ids` - Roles held by the member
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// let member = create_test_member(42, "alice", Some("Alice"), &[111]);
/// assert_eq!(member.display_name(), "Alice");
/// ```
pub fn create_test_member(user_id: u64, name: &str, nick: Option<&str>, role_ids: &[u64]) -> Member {
    let roles = role_ids
        .iter()
        .map(|role_id| role_id.to_string())
        .collect::<Vec<_>>();

    serde_json::from_value(serde_json::json!({
        "user": user_json(user_id, name),
        "nick": nick,
        "avatar": null,
        "roles": roles,
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
        "guild_id": TEST_GUILD_ID.to_string(),
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
