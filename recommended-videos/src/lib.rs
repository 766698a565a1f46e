//! Framework-free logic behind the "recommended videos" panel.
//!
//! Everything here is single-threaded and callback driven so the browser
//! client can wire it to Yew while tests drive it with fake collaborators.

pub mod error;
pub mod models;
pub mod panel;
pub mod preference;
pub mod session;
pub mod storage;
pub mod store;
pub mod subscription;
pub mod utils;

pub use error::{ApiError, StorageError};
pub use models::{
    ErrorResponse, MiniatureDisplayOptions, RecommendationInfo, User, UserUpdateMe, VideoDetails,
    VideoPlaylist, VideoSummary,
};
pub use panel::{PanelCallbacks, PanelDeps, RecommendationInput, RecommendedVideosPanel};
pub use preference::{PreferenceSource, AUTO_PLAY_NEXT_VIDEO_KEY};
pub use session::{
    load_user_snapshot, save_user_snapshot, AuthService, Completion, Notifier, UserService,
};
pub use storage::{MemoryStorage, PreferenceStorage, StorageChange};
pub use store::{RecommendationService, RecommendedVideosStore};
pub use subscription::{Listeners, Subscription};
