use crate::models::Seed;
use crate::services::catalog::VideoCatalog;
use crate::services::user_directory::UserDirectory;
use crate::AppState;
use anyhow::{Context, Result};
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use recommended_videos::User;
use rocket::http::{Method, Status};
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use tokio::sync::RwLock;

const EMBEDDED_SEED: &str = include_str!("../data/seed.json");

lazy_static! {
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
    pub static ref RECOMMENDATION_COUNT: usize = env::var("RECOMMENDATION_COUNT")
        .unwrap_or_else(|_| "5".to_string())
        .parse::<usize>()
        .unwrap_or(5);
    pub static ref SEED_FILE: Option<String> = env::var("SEED_FILE").ok();
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();
    info!("Starting Rocket backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn embedded_seed() -> Result<Seed> {
    serde_json::from_str(EMBEDDED_SEED).context("embedded seed is not valid JSON")
}

pub fn load_seed() -> Result<Seed> {
    match SEED_FILE.as_deref() {
        Some(path) => {
            info!("Loading seed data from {path}");
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read seed file {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("failed to parse seed file {path}"))
        }
        None => embedded_seed(),
    }
}

pub fn create_app_state(seed: Seed) -> AppState {
    let catalog = VideoCatalog::new(seed.videos);
    let users = UserDirectory::new(seed.accounts);
    info!("Loaded {} videos.", catalog.len());

    AppState {
        catalog: RwLock::new(catalog),
        users: RwLock::new(users),
        recommendation_count: *RECOMMENDATION_COUNT,
    }
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[FRONTEND_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Put, Method::Delete, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&[
            "Authorization",
            "Accept",
            "Content-Type",
        ]))
        .allow_credentials(true)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}

/// The logged-in viewer behind a `Bearer` token.
#[derive(Debug, Clone)]
pub struct AuthenticatedViewer {
    pub token: String,
    pub user: User,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedViewer {
    type Error = &'static str;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let token = request
            .headers()
            .get_one("Authorization")
            .and_then(|auth| auth.strip_prefix("Bearer "));

        let Some(token) = token else {
            return Outcome::Error((Status::Unauthorized, "Missing token"));
        };

        let state = match request.guard::<&State<AppState>>().await {
            Outcome::Success(state) => state,
            _ => return Outcome::Error((Status::InternalServerError, "Missing state")),
        };

        let user = state.users.read().await.by_token(token).cloned();
        match user {
            Some(user) => Outcome::Success(AuthenticatedViewer {
                token: token.to_string(),
                user,
            }),
            None => Outcome::Error((Status::Unauthorized, "Invalid token")),
        }
    }
}
