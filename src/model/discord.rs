//! Discord-side identity of the member invoking a command.

use serenity::all::{Member, User};

/// Member that invoked a command or interacted with a component.
///
/// Built from the interaction payload each time, so role membership always reflects
/// the moment of the interaction rather than when a menu was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub user_id: u64,
    /// Discord username.
    pub name: String,
    /// Guild nickname, global name or username, in that order of preference.
    pub display_name: String,
    pub role_ids: Vec<u64>,
}

impl Requester {
    /// Builds the requester from guild member data.
    pub fn from_member(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            name: member.user.name.clone(),
            display_name: member.display_name().to_string(),
            role_ids: member.roles.iter().map(|role| role.get()).collect(),
        }
    }

    /// Builds a requester without guild data (no roles).
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id.get(),
            name: user.name.clone(),
            display_name: user.display_name().to_string(),
            role_ids: Vec::new(),
        }
    }

    pub fn has_any_role(&self, allowed: &[u64]) -> bool {
        self.role_ids.iter().any(|role_id| allowed.contains(role_id))
    }

    /// Mention markup for the requester.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }
}
