//! Collaborators the panel talks to but does not own.

use crate::error::ApiError;
use crate::models::{User, UserUpdateMe};
use crate::storage::PreferenceStorage;
use log::warn;

/// Session key holding the last fetched profile as JSON.
pub const USER_SNAPSHOT_KEY: &str = "user_profile";

/// Continuation for an asynchronous call. Called at most once.
pub type Completion<T> = Box<dyn FnOnce(Result<T, ApiError>)>;

pub trait AuthService {
    fn is_logged_in(&self) -> bool;

    /// Last known profile of the logged-in viewer, if it has been fetched.
    fn get_user(&self) -> Option<User>;

    /// Re-fetch the viewer's profile from the server.
    fn refresh_user_information(&self);
}

pub trait UserService {
    fn get_anonymous_or_logged_user(&self, done: Completion<User>);

    fn update_my_profile(&self, update: UserUpdateMe, done: Completion<()>);
}

pub trait Notifier {
    fn error(&self, message: &str);

    fn success(&self, message: &str);
}

/// Keeps the profile across page reloads so `AuthService::get_user` can
/// answer before the first refresh completes.
pub fn save_user_snapshot(storage: &dyn PreferenceStorage, user: &User) {
    let json = match serde_json::to_string(user) {
        Ok(json) => json,
        Err(e) => {
            warn!("Could not encode user profile: {e}");
            return;
        }
    };
    if let Err(e) = storage.set_item(USER_SNAPSHOT_KEY, &json) {
        warn!("Could not remember user profile: {e}");
    }
}

/// Empty or unreadable snapshots count as absent.
pub fn load_user_snapshot(storage: &dyn PreferenceStorage) -> Option<User> {
    let raw = storage.get_item(USER_SNAPSHOT_KEY)?;
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Ignoring unreadable user profile snapshot: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::PreferenceSource;
    use crate::storage::MemoryStorage;

    fn alice(auto_play_next_video: bool) -> User {
        User {
            username: "alice".to_string(),
            display_name: "Alice".to_string(),
            avatar_url: None,
            auto_play_next_video,
            anonymous: false,
        }
    }

    /// Logged in, profile known only through the stored snapshot.
    struct ReloadedAuth(MemoryStorage);

    impl AuthService for ReloadedAuth {
        fn is_logged_in(&self) -> bool {
            true
        }

        fn get_user(&self) -> Option<User> {
            load_user_snapshot(&self.0)
        }

        fn refresh_user_information(&self) {}
    }

    #[test]
    fn snapshot_survives_a_reload() {
        let storage = MemoryStorage::new();
        save_user_snapshot(&storage, &alice(true));

        let reloaded = storage.clone();
        assert_eq!(load_user_snapshot(&reloaded), Some(alice(true)));
    }

    #[test]
    fn reloaded_viewer_reads_profile_autoplay() {
        let storage = MemoryStorage::new();
        save_user_snapshot(&storage, &alice(true));

        let auth = ReloadedAuth(storage.clone());
        assert_eq!(
            PreferenceSource::resolve(&auth, &storage),
            PreferenceSource::AuthenticatedProfile(true)
        );
    }

    #[test]
    fn missing_or_garbled_snapshot_is_absent() {
        assert_eq!(load_user_snapshot(&MemoryStorage::new()), None);
        assert_eq!(
            load_user_snapshot(&MemoryStorage::with_item(USER_SNAPSHOT_KEY, "")),
            None
        );
        assert_eq!(
            load_user_snapshot(&MemoryStorage::with_item(USER_SNAPSHOT_KEY, "{not json")),
            None
        );
    }

    #[test]
    fn failed_snapshot_write_is_swallowed() {
        let storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        save_user_snapshot(&storage, &alice(false));
        assert_eq!(load_user_snapshot(&storage), None);
    }
}
