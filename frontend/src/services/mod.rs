pub mod api;
pub mod auth;
pub mod notifier;
pub mod recommendations;
pub mod session_storage;
pub mod users;

use auth::BrowserAuth;
use notifier::ToastNotifier;
use recommendations::HttpRecommendationService;
use recommended_videos::{PanelDeps, RecommendedVideosStore};
use session_storage::BrowserSessionStorage;
use std::rc::Rc;
use users::HttpUserService;

/// Application-wide services, provided to components through a context.
#[derive(Clone)]
pub struct AppServices {
    pub storage: Rc<BrowserSessionStorage>,
    pub auth: Rc<BrowserAuth>,
    pub users: Rc<HttpUserService>,
    pub notifier: Rc<ToastNotifier>,
    pub store: RecommendedVideosStore,
}

impl AppServices {
    pub fn new() -> Self {
        let storage = Rc::new(BrowserSessionStorage::new());
        let auth = BrowserAuth::new(storage.clone());
        let users = Rc::new(HttpUserService::new(auth.clone(), storage.clone()));
        Self {
            storage,
            auth,
            users,
            notifier: Rc::new(ToastNotifier::default()),
            store: RecommendedVideosStore::new(Rc::new(HttpRecommendationService)),
        }
    }

    pub fn panel_deps(&self) -> PanelDeps {
        PanelDeps {
            store: self.store.clone(),
            auth: self.auth.clone(),
            users: self.users.clone(),
            notifier: self.notifier.clone(),
            storage: self.storage.clone(),
        }
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth)
    }
}
