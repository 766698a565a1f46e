use crate::services::api;
use crate::services::auth::BrowserAuth;
use crate::services::session_storage::BrowserSessionStorage;
use recommended_videos::preference::parse_stored_flag;
use recommended_videos::{
    ApiError, Completion, PreferenceStorage, User, UserService, UserUpdateMe,
    AUTO_PLAY_NEXT_VIDEO_KEY,
};
use std::rc::Rc;

pub struct HttpUserService {
    auth: Rc<BrowserAuth>,
    storage: Rc<BrowserSessionStorage>,
}

impl HttpUserService {
    pub fn new(auth: Rc<BrowserAuth>, storage: Rc<BrowserSessionStorage>) -> Self {
        Self { auth, storage }
    }
}

impl UserService for HttpUserService {
    fn get_anonymous_or_logged_user(&self, done: Completion<User>) {
        let Some(token) = self.auth.token() else {
            let stored = self.storage.get_item(AUTO_PLAY_NEXT_VIDEO_KEY);
            let auto_play = parse_stored_flag(stored.as_deref());
            done(Ok(User::anonymous(auto_play)));
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            done(api::get_me(&token).await);
        });
    }

    fn update_my_profile(&self, update: UserUpdateMe, done: Completion<()>) {
        let Some(token) = self.auth.token() else {
            done(Err(ApiError::Http {
                status: 401,
                message: "You need to be logged in".to_string(),
            }));
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            done(api::update_me(&token, &update).await.map(|_| ()));
        });
    }
}
