use crate::config::AuthenticatedViewer;
use crate::models::ErrorReply;
use crate::services::catalog::CatalogError;
use crate::AppState;
use log::info;
use recommended_videos::{RecommendationInfo, VideoDetails, VideoSummary};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, State};

const DEFAULT_LIST_COUNT: usize = 15;
const MAX_COUNT: usize = 50;

#[get("/?<count>")]
pub async fn list_videos(count: Option<usize>, state: &State<AppState>) -> Json<Vec<VideoSummary>> {
    let count = count.unwrap_or(DEFAULT_LIST_COUNT).min(MAX_COUNT);
    Json(state.catalog.read().await.recent(count))
}

#[get("/recommendations?<uuid>&<tags>&<count>")]
pub async fn get_recommendations(
    uuid: String,
    tags: Option<Vec<String>>,
    count: Option<usize>,
    state: &State<AppState>,
) -> Json<Vec<VideoSummary>> {
    let count = count.unwrap_or(state.recommendation_count).min(MAX_COUNT);
    let info = RecommendationInfo::new(uuid, tags.unwrap_or_default());
    let videos = state.catalog.read().await.recommend(&info, count);
    info!(
        "Recommending {} videos around {} ({} tags).",
        videos.len(),
        info.uuid,
        info.tags.len()
    );
    Json(videos)
}

#[get("/<uuid>")]
pub async fn get_video(uuid: &str, state: &State<AppState>) -> Result<Json<VideoDetails>, ErrorReply> {
    state
        .catalog
        .read()
        .await
        .get(uuid)
        .map(Json)
        .ok_or_else(|| ErrorReply::not_found(format!("Video {uuid} not found")))
}

#[delete("/<uuid>")]
pub async fn delete_video(
    uuid: &str,
    viewer: AuthenticatedViewer,
    state: &State<AppState>,
) -> Result<Status, ErrorReply> {
    match state
        .catalog
        .write()
        .await
        .remove(uuid, &viewer.user.username)
    {
        Ok(video) => {
            info!("{} removed video {}.", viewer.user.username, video.summary.uuid);
            Ok(Status::NoContent)
        }
        Err(CatalogError::NotFound) => Err(ErrorReply::not_found(format!("Video {uuid} not found"))),
        Err(CatalogError::NotOwner) => Err(ErrorReply::forbidden(
            "Cannot remove a video of another account",
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_client;
    use recommended_videos::{ErrorResponse, VideoDetails, VideoSummary};
    use rocket::http::{Header, Status};

    fn uuids(videos: &[VideoSummary]) -> Vec<&str> {
        videos.iter().map(|v| v.uuid.as_str()).collect()
    }

    #[test]
    fn lists_recent_videos() {
        let client = test_client();
        let response = client.get("/api/v1/videos?count=2").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let videos: Vec<VideoSummary> = response.into_json().unwrap();
        assert_eq!(uuids(&videos), vec!["mountain-timelapse", "sourdough"]);
    }

    #[test]
    fn recommendations_use_repeated_tags() {
        let client = test_client();
        let response = client
            .get("/api/v1/videos/recommendations?uuid=rust-intro&tags=rust&tags=programming")
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        let videos: Vec<VideoSummary> = response.into_json().unwrap();
        assert_eq!(uuids(&videos), vec!["async-rust", "borrow-checker"]);
    }

    #[test]
    fn recommendations_without_tags_fall_back_to_recent() {
        let client = test_client();
        let response = client
            .get("/api/v1/videos/recommendations?uuid=sourdough&count=2")
            .dispatch();
        let videos: Vec<VideoSummary> = response.into_json().unwrap();
        assert_eq!(uuids(&videos), vec!["mountain-timelapse", "async-rust"]);
    }

    #[test]
    fn video_details_and_not_found() {
        let client = test_client();
        let details: VideoDetails = client
            .get("/api/v1/videos/croissants")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(details.tags, vec!["baking", "french"]);

        let response = client.get("/api/v1/videos/unknown").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        let error: ErrorResponse = response.into_json().unwrap();
        assert_eq!(error.message, "Video unknown not found");
    }

    #[test]
    fn delete_requires_the_owner() {
        let client = test_client();

        let response = client.delete("/api/v1/videos/sourdough").dispatch();
        assert_eq!(response.status(), Status::Unauthorized);

        let response = client
            .delete("/api/v1/videos/sourdough")
            .header(Header::new("Authorization", "Bearer alice-demo-token"))
            .dispatch();
        assert_eq!(response.status(), Status::Forbidden);

        let response = client
            .delete("/api/v1/videos/sourdough")
            .header(Header::new("Authorization", "Bearer bob-demo-token"))
            .dispatch();
        assert_eq!(response.status(), Status::NoContent);

        let response = client.get("/api/v1/videos/sourdough").dispatch();
        assert_eq!(response.status(), Status::NotFound);
    }
}
