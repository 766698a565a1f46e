use crate::env_variable_utils::BACKEND_URL;
use gloo_net::http::{Request, RequestBuilder, Response};
use recommended_videos::{
    ApiError, ErrorResponse, RecommendationInfo, User, UserUpdateMe, VideoDetails, VideoSummary,
};
use serde::de::DeserializeOwned;

fn api_url(path: &str) -> String {
    format!("{}/api/v1{path}", &*BACKEND_URL)
}

fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {token}"))
}

async fn read_error(response: Response) -> ApiError {
    let status = response.status();
    let fallback = format!("Request failed with status {status}");
    match response.text().await {
        Ok(error_text) => {
            // Try to parse as structured error response first
            let message = match serde_json::from_str::<ErrorResponse>(&error_text) {
                Ok(error_response) => error_response.message,
                Err(_) if error_text.is_empty() => fallback,
                Err(_) => error_text,
            };
            ApiError::Http { status, message }
        }
        Err(_) => ApiError::Http {
            status,
            message: fallback,
        },
    }
}

async fn checked(result: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
    let response = result.map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        Ok(response)
    } else {
        Err(read_error(response).await)
    }
}

async fn read_json<T: DeserializeOwned>(
    result: Result<Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    checked(result)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn list_videos(count: usize) -> Result<Vec<VideoSummary>, ApiError> {
    read_json(Request::get(&api_url(&format!("/videos?count={count}"))).send().await).await
}

pub async fn get_video(uuid: &str) -> Result<VideoDetails, ApiError> {
    let url = api_url(&format!("/videos/{}", urlencoding::encode(uuid)));
    read_json(Request::get(&url).send().await).await
}

pub async fn get_recommendations(info: &RecommendationInfo) -> Result<Vec<VideoSummary>, ApiError> {
    let mut query = format!("uuid={}", urlencoding::encode(&info.uuid));
    for tag in &info.tags {
        query.push_str(&format!("&tags={}", urlencoding::encode(tag)));
    }
    let url = api_url(&format!("/videos/recommendations?{query}"));
    read_json(Request::get(&url).send().await).await
}

pub async fn delete_video(uuid: &str, token: &str) -> Result<(), ApiError> {
    let url = api_url(&format!("/videos/{}", urlencoding::encode(uuid)));
    checked(authorized(Request::delete(&url), token).send().await).await?;
    Ok(())
}

pub async fn get_me(token: &str) -> Result<User, ApiError> {
    read_json(authorized(Request::get(&api_url("/users/me")), token).send().await).await
}

pub async fn update_me(token: &str, update: &UserUpdateMe) -> Result<User, ApiError> {
    let request = authorized(Request::put(&api_url("/users/me")), token)
        .json(update)
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    read_json(request.send().await).await
}
