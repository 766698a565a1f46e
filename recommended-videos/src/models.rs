use serde::{Deserialize, Serialize};

/// What to recommend around: the video currently being watched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationInfo {
    pub uuid: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecommendationInfo {
    pub fn new(uuid: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            uuid: uuid.into(),
            tags,
        }
    }

    /// A context without a video id cannot be recommended around.
    pub fn is_present(&self) -> bool {
        !self.uuid.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub uuid: String,
    pub name: String,
    pub account_name: String,
    pub account_display_name: String,
    #[serde(default)]
    pub account_avatar_url: Option<String>,
    pub published_at: String, // RFC 3339
    pub views: i64,
    pub duration: i64, // in seconds
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(flatten)]
    pub summary: VideoSummary,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl VideoDetails {
    pub fn recommendation_info(&self) -> RecommendationInfo {
        RecommendationInfo::new(self.summary.uuid.clone(), self.tags.clone())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoPlaylist {
    pub uuid: String,
    pub display_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub auto_play_next_video: bool,
    #[serde(default)]
    pub anonymous: bool,
}

impl User {
    pub fn anonymous(auto_play_next_video: bool) -> Self {
        Self {
            username: String::new(),
            display_name: "Anonymous".to_string(),
            avatar_url: None,
            auto_play_next_video,
            anonymous: true,
        }
    }
}

/// Partial profile update; unset fields are left untouched server side.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateMe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_play_next_video: Option<bool>,
}

impl UserUpdateMe {
    pub fn auto_play_next_video(value: bool) -> Self {
        Self {
            auto_play_next_video: Some(value),
            ..Self::default()
        }
    }
}

/// Which metadata a video miniature shows.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MiniatureDisplayOptions {
    pub date: bool,
    pub views: bool,
    pub by: bool,
    pub avatar: bool,
}

impl MiniatureDisplayOptions {
    pub const ALL: Self = Self {
        date: true,
        views: true,
        by: true,
        avatar: true,
    };
}

impl Default for MiniatureDisplayOptions {
    fn default() -> Self {
        Self::ALL
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_update_only_serializes_set_fields() {
        let json = serde_json::to_string(&UserUpdateMe::auto_play_next_video(true)).unwrap();
        assert_eq!(json, r#"{"autoPlayNextVideo":true}"#);
    }

    #[test]
    fn video_details_flatten_summary_fields() {
        let json = r#"{
            "uuid": "abc",
            "name": "Intro",
            "accountName": "alice",
            "accountDisplayName": "Alice",
            "publishedAt": "2024-01-02T03:04:05Z",
            "views": 12,
            "duration": 90,
            "tags": ["rust"]
        }"#;
        let details: VideoDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.summary.uuid, "abc");
        assert_eq!(details.recommendation_info().tags, vec!["rust".to_string()]);
        assert!(details.summary.account_avatar_url.is_none());
    }

    #[test]
    fn empty_uuid_is_not_a_recommendation_context() {
        assert!(!RecommendationInfo::default().is_present());
        assert!(RecommendationInfo::new("abc", vec![]).is_present());
    }
}
