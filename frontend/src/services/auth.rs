use crate::services::api;
use crate::services::session_storage::BrowserSessionStorage;
use log::{info, warn};
use recommended_videos::preference::persist_to_session;
use recommended_videos::session::USER_SNAPSHOT_KEY;
use recommended_videos::{
    load_user_snapshot, save_user_snapshot, AuthService, Completion, Listeners,
    PreferenceStorage, Subscription, User,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

const ACCESS_TOKEN_KEY: &str = "access_token";

/// Token based login. The token and the last fetched profile live in
/// session storage, so a reload starts with the profile already known.
pub struct BrowserAuth {
    this: Weak<BrowserAuth>,
    storage: Rc<BrowserSessionStorage>,
    user: RefCell<Option<User>>,
    user_changes: Listeners<Option<User>>,
}

impl BrowserAuth {
    pub fn new(storage: Rc<BrowserSessionStorage>) -> Rc<Self> {
        let has_token = storage
            .get_item(ACCESS_TOKEN_KEY)
            .is_some_and(|token| !token.is_empty());
        let user = if has_token {
            load_user_snapshot(storage.as_ref())
        } else {
            None
        };
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            storage,
            user: RefCell::new(user),
            user_changes: Listeners::new(),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Checks the token against the backend before keeping it.
    pub fn login(&self, token: String, done: Completion<User>) {
        let this = self.this.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::get_me(&token).await;
            if let (Ok(user), Some(this)) = (&result, this.upgrade()) {
                if let Err(e) = this.storage.set_item(ACCESS_TOKEN_KEY, &token) {
                    warn!("Could not store access token: {e}");
                }
                info!("Logged in as {}", user.username);
                this.set_user(Some(user.clone()));
            }
            done(result);
        });
    }

    pub fn logout(&self) {
        self.storage.remove_item(ACCESS_TOKEN_KEY);
        self.storage.remove_item(USER_SNAPSHOT_KEY);
        self.set_user(None);
    }

    pub fn subscribe_user(&self, listener: impl Fn(&Option<User>) + 'static) -> Subscription {
        self.user_changes.subscribe(listener)
    }

    fn set_user(&self, user: Option<User>) {
        if let Some(user) = &user {
            // Keeps the preference around if the viewer logs out later.
            persist_to_session(self.storage.as_ref(), user.auto_play_next_video);
            save_user_snapshot(self.storage.as_ref(), user);
        }
        *self.user.borrow_mut() = user.clone();
        self.user_changes.emit(&user);
    }
}

impl AuthService for BrowserAuth {
    fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    fn refresh_user_information(&self) {
        let Some(token) = self.token() else {
            return;
        };
        let this = self.this.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_me(&token).await {
                Ok(user) => {
                    if let Some(this) = this.upgrade() {
                        this.set_user(Some(user));
                    }
                }
                Err(e) => warn!("Could not refresh user information: {e}"),
            }
        });
    }
}
