use recommended_videos::ErrorResponse;
use rocket::catch;
use rocket::http::Status;
use rocket::serde::json::Json;

fn error_body(status: Status, message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: status.reason_lossy().to_string(),
        message: message.to_string(),
    })
}

#[catch(401)]
pub fn unauthorized() -> Json<ErrorResponse> {
    error_body(Status::Unauthorized, "Authentication required")
}

#[catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    error_body(Status::NotFound, "Resource not found")
}

#[catch(422)]
pub fn unprocessable() -> Json<ErrorResponse> {
    error_body(Status::UnprocessableEntity, "Malformed request body")
}
