use crate::session::AuthService;
use crate::storage::PreferenceStorage;
use log::{debug, warn};

pub const AUTO_PLAY_NEXT_VIDEO_KEY: &str = "auto_play_next_video";

pub const AUTO_PLAY_NEXT_VIDEO_TOOLTIP: &str =
    "When active, the next video is automatically played after the current one.";

/// Where the autoplay preference is read from. Chosen once per panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceSource {
    /// Snapshot of the logged-in viewer's profile field.
    AuthenticatedProfile(bool),
    SessionStorage { key: &'static str, default: bool },
}

impl PreferenceSource {
    pub fn resolve(auth: &dyn AuthService, storage: &dyn PreferenceStorage) -> Self {
        if auth.is_logged_in() {
            let value = auth
                .get_user()
                .map(|user| user.auto_play_next_video)
                .unwrap_or_default();
            debug!("Autoplay preference read from profile: {value}");
            PreferenceSource::AuthenticatedProfile(value)
        } else {
            let source = PreferenceSource::SessionStorage {
                key: AUTO_PLAY_NEXT_VIDEO_KEY,
                default: false,
            };
            debug!(
                "Autoplay preference read from session storage: {}",
                source.read(storage)
            );
            source
        }
    }

    pub fn read(&self, storage: &dyn PreferenceStorage) -> bool {
        match self {
            PreferenceSource::AuthenticatedProfile(value) => *value,
            PreferenceSource::SessionStorage { key, default } => match storage.get_item(key) {
                Some(raw) => parse_stored_flag(Some(&raw)),
                None => *default,
            },
        }
    }

    pub fn watched_key(&self) -> Option<&'static str> {
        match self {
            PreferenceSource::AuthenticatedProfile(_) => None,
            PreferenceSource::SessionStorage { key, .. } => Some(*key),
        }
    }
}

/// Only the literal `"true"` counts as set.
pub fn parse_stored_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Best effort; a lost preference is not worth surfacing.
pub fn persist_to_session(storage: &dyn PreferenceStorage, value: bool) {
    if let Err(e) = storage.set_item(AUTO_PLAY_NEXT_VIDEO_KEY, &value.to_string()) {
        warn!("Could not remember autoplay preference: {e}");
    }
}
