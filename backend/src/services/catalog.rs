use crate::utils::{normalize_tag, parse_iso8601_to_timestamp};
use recommended_videos::{RecommendationInfo, VideoDetails, VideoSummary};
use std::collections::HashSet;

#[derive(Debug, PartialEq, Eq)]
pub enum CatalogError {
    NotFound,
    NotOwner,
}

/// In-memory video catalog.
pub struct VideoCatalog {
    videos: Vec<VideoDetails>,
}

impl VideoCatalog {
    pub fn new(mut videos: Vec<VideoDetails>) -> Self {
        // Most recent first; every query below relies on this order.
        videos.sort_by_key(|video| {
            std::cmp::Reverse(parse_iso8601_to_timestamp(&video.summary.published_at))
        });
        Self { videos }
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn recent(&self, count: usize) -> Vec<VideoSummary> {
        self.videos
            .iter()
            .take(count)
            .map(|video| video.summary.clone())
            .collect()
    }

    pub fn get(&self, uuid: &str) -> Option<VideoDetails> {
        self.videos
            .iter()
            .find(|video| video.summary.uuid == uuid)
            .cloned()
    }

    /// Videos sharing a tag with the context, newest first. Falls back to
    /// the newest videos when nothing shares a tag. The context video itself
    /// is never recommended.
    pub fn recommend(&self, info: &RecommendationInfo, count: usize) -> Vec<VideoSummary> {
        let wanted: HashSet<String> = info.tags.iter().map(|tag| normalize_tag(tag)).collect();
        let others = move || {
            self.videos
                .iter()
                .filter(move |video| video.summary.uuid != info.uuid)
        };

        let related: Vec<VideoSummary> = others()
            .filter(|video| {
                video
                    .tags
                    .iter()
                    .any(|tag| wanted.contains(&normalize_tag(tag)))
            })
            .take(count)
            .map(|video| video.summary.clone())
            .collect();

        if !related.is_empty() {
            return related;
        }

        others()
            .take(count)
            .map(|video| video.summary.clone())
            .collect()
    }

    pub fn remove(&mut self, uuid: &str, account_name: &str) -> Result<VideoDetails, CatalogError> {
        let index = self
            .videos
            .iter()
            .position(|video| video.summary.uuid == uuid)
            .ok_or(CatalogError::NotFound)?;

        if self.videos[index].summary.account_name != account_name {
            return Err(CatalogError::NotOwner);
        }

        Ok(self.videos.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::embedded_seed;

    fn catalog() -> VideoCatalog {
        VideoCatalog::new(embedded_seed().unwrap().videos)
    }

    fn uuids(videos: &[VideoSummary]) -> Vec<&str> {
        videos.iter().map(|v| v.uuid.as_str()).collect()
    }

    #[test]
    fn recent_is_newest_first() {
        assert_eq!(
            uuids(&catalog().recent(3)),
            vec!["mountain-timelapse", "sourdough", "async-rust"]
        );
    }

    #[test]
    fn recommends_tag_matches_without_the_context_video() {
        let info = RecommendationInfo::new(
            "rust-intro",
            vec!["rust".to_string(), "programming".to_string()],
        );
        assert_eq!(
            uuids(&catalog().recommend(&info, 5)),
            vec!["async-rust", "borrow-checker"]
        );
    }

    #[test]
    fn recommendation_count_is_a_cap() {
        let info = RecommendationInfo::new("croissants", vec!["rust".to_string()]);
        assert_eq!(uuids(&catalog().recommend(&info, 1)), vec!["async-rust"]);
    }

    #[test]
    fn falls_back_to_recent_when_no_tag_matches() {
        let info = RecommendationInfo::new("mountain-timelapse", vec!["nature".to_string()]);
        assert_eq!(
            uuids(&catalog().recommend(&info, 5)),
            vec![
                "sourdough",
                "async-rust",
                "rust-intro",
                "borrow-checker",
                "croissants"
            ]
        );
    }

    #[test]
    fn only_the_owner_can_remove() {
        let mut catalog = catalog();
        let before = catalog.len();
        assert_eq!(
            catalog.remove("sourdough", "alice").unwrap_err(),
            CatalogError::NotOwner
        );
        assert_eq!(
            catalog.remove("missing", "bob").unwrap_err(),
            CatalogError::NotFound
        );
        assert!(catalog.remove("sourdough", "bob").is_ok());
        assert_eq!(catalog.len(), before - 1);
        assert!(catalog.get("sourdough").is_none());
    }
}
