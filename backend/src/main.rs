mod api;
mod config;
mod models;
mod services;
mod utils;

use crate::config::{create_app_state, create_cors, init_logger, load_environment, load_seed};
use crate::services::catalog::VideoCatalog;
use crate::services::user_directory::UserDirectory;
use rocket::{catchers, routes, Build, Rocket};
use tokio::sync::RwLock;

pub struct AppState {
    pub catalog: RwLock<VideoCatalog>,
    pub users: RwLock<UserDirectory>,
    pub recommendation_count: usize,
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            "/api/v1/videos",
            routes![
                api::list_videos,
                api::get_recommendations,
                api::get_video,
                api::delete_video
            ],
        )
        .mount("/api/v1/users", routes![api::get_me, api::update_me])
        .register(
            "/",
            catchers![api::unauthorized, api::not_found, api::unprocessable],
        )
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();

    let state = create_app_state(load_seed()?);
    let cors = create_cors()?;

    let _rocket = build_rocket(state)
        .attach(cors)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed: {e}"))?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_client() -> rocket::local::blocking::Client {
    let seed = config::embedded_seed().expect("embedded seed parses");
    let mut state = create_app_state(seed);
    state.recommendation_count = 5;
    rocket::local::blocking::Client::tracked(build_rocket(state)).expect("valid rocket instance")
}
