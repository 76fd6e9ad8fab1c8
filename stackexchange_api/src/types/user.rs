//! User types embedded in posts and comments.

use serde::{Deserialize, Serialize};

/// Numeric identifier for a user on a single site.
pub type UserID = i64;

/// The subset of a user's profile that the API embeds in other objects.
///
/// Every field is optional: deleted users come back with only a display name,
/// and filters may drop any of them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShallowUser {
    pub user_id: Option<UserID>,
    pub display_name: Option<String>,
    pub reputation: Option<i64>,
    pub user_type: Option<UserType>,
    pub accept_rate: Option<i64>,
    pub profile_image: Option<String>,
    pub link: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Unregistered,
    Registered,
    Moderator,
    TeamAdmin,
    DoesNotExist,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                UserType::Unregistered => "unregistered",
                UserType::Registered => "registered",
                UserType::Moderator => "moderator",
                UserType::TeamAdmin => "team_admin",
                UserType::DoesNotExist => "does_not_exist",
                UserType::Unknown => "unknown",
            }
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_type() {
        let user: ShallowUser =
            serde_json::from_str(r#"{"display_name":"x","user_type":"robot"}"#).unwrap();
        assert_eq!(user.user_type, Some(UserType::Unknown));
        assert_eq!(user.user_id, None);
    }
}
