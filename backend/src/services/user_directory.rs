use crate::models::SeedAccount;
use recommended_videos::{User, UserUpdateMe};
use std::collections::HashMap;

const MAX_DISPLAY_NAME_LENGTH: usize = 120;

#[derive(Debug, PartialEq, Eq)]
pub enum UserError {
    UnknownToken,
    InvalidDisplayName(String),
}

/// Accounts keyed by their access token.
pub struct UserDirectory {
    accounts: HashMap<String, User>,
}

impl UserDirectory {
    pub fn new(accounts: Vec<SeedAccount>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|account| {
                    let mut user = account.user;
                    user.anonymous = false;
                    (account.token, user)
                })
                .collect(),
        }
    }

    pub fn by_token(&self, token: &str) -> Option<&User> {
        self.accounts.get(token)
    }

    /// Applies only the fields present in `update`.
    pub fn update_me(&mut self, token: &str, update: &UserUpdateMe) -> Result<User, UserError> {
        if let Some(display_name) = &update.display_name {
            let trimmed = display_name.trim();
            if trimmed.is_empty() || trimmed.chars().count() > MAX_DISPLAY_NAME_LENGTH {
                return Err(UserError::InvalidDisplayName(format!(
                    "Display name must be between 1 and {MAX_DISPLAY_NAME_LENGTH} characters"
                )));
            }
        }

        let user = self
            .accounts
            .get_mut(token)
            .ok_or(UserError::UnknownToken)?;

        if let Some(display_name) = &update.display_name {
            user.display_name = display_name.trim().to_string();
        }
        if let Some(auto_play_next_video) = update.auto_play_next_video {
            user.auto_play_next_video = auto_play_next_video;
        }

        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::embedded_seed;

    fn directory() -> UserDirectory {
        UserDirectory::new(embedded_seed().unwrap().accounts)
    }

    #[test]
    fn partial_update_touches_only_given_fields() {
        let mut users = directory();
        let updated = users
            .update_me("bob-demo-token", &UserUpdateMe::auto_play_next_video(true))
            .unwrap();
        assert!(updated.auto_play_next_video);
        assert_eq!(updated.display_name, "Bob");
        assert_eq!(users.by_token("bob-demo-token"), Some(&updated));
    }

    #[test]
    fn rejects_blank_display_name() {
        let mut users = directory();
        let update = UserUpdateMe {
            display_name: Some("   ".to_string()),
            auto_play_next_video: Some(false),
        };
        assert!(matches!(
            users.update_me("alice-demo-token", &update),
            Err(UserError::InvalidDisplayName(_))
        ));
        // Nothing was applied.
        assert!(users.by_token("alice-demo-token").unwrap().auto_play_next_video);
    }

    #[test]
    fn unknown_token() {
        let mut users = directory();
        assert_eq!(
            users.update_me("nope", &UserUpdateMe::default()),
            Err(UserError::UnknownToken)
        );
    }

    #[test]
    fn seeded_accounts_are_not_anonymous() {
        let users = directory();
        assert!(!users.by_token("alice-demo-token").unwrap().anonymous);
    }
}
