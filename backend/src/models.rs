use recommended_videos::{ErrorResponse, User, VideoDetails};
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, Response};
use std::io::Cursor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAccount {
    pub token: String,
    pub user: User,
}

/// Initial catalog and accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub accounts: Vec<SeedAccount>,
    pub videos: Vec<VideoDetails>,
}

/// JSON error body sent with a non-2xx status.
#[derive(Debug)]
pub struct ErrorReply {
    pub status: Status,
    pub body: ErrorResponse,
}

impl ErrorReply {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: status.reason_lossy().to_string(),
                message: message.into(),
            },
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Status::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(Status::BadRequest, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(Status::Forbidden, message)
    }
}

impl<'r> Responder<'r, 'static> for ErrorReply {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self.body).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
