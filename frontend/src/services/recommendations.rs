use crate::services::api;
use recommended_videos::{Completion, RecommendationInfo, RecommendationService, VideoSummary};

/// Asks the backend for videos related to the one being watched.
pub struct HttpRecommendationService;

impl RecommendationService for HttpRecommendationService {
    fn get_recommendations(&self, info: &RecommendationInfo, done: Completion<Vec<VideoSummary>>) {
        let info = info.clone();
        wasm_bindgen_futures::spawn_local(async move {
            done(api::get_recommendations(&info).await);
        });
    }
}
