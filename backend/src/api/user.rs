use crate::config::AuthenticatedViewer;
use crate::models::ErrorReply;
use crate::services::user_directory::UserError;
use crate::AppState;
use log::info;
use recommended_videos::{User, UserUpdateMe};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, put, State};

#[get("/me")]
pub async fn get_me(viewer: AuthenticatedViewer) -> Json<User> {
    Json(viewer.user)
}

#[put("/me", data = "<update>")]
pub async fn update_me(
    viewer: AuthenticatedViewer,
    update: Json<UserUpdateMe>,
    state: &State<AppState>,
) -> Result<Json<User>, ErrorReply> {
    match state.users.write().await.update_me(&viewer.token, &update) {
        Ok(user) => {
            info!("Updated profile of {}.", user.username);
            Ok(Json(user))
        }
        Err(UserError::InvalidDisplayName(message)) => Err(ErrorReply::bad_request(message)),
        Err(UserError::UnknownToken) => Err(ErrorReply::new(
            Status::Unauthorized,
            "Account no longer exists",
        )),
    }
}
