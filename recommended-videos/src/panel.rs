//! The "recommended videos" panel: keeps a recommendation list in sync with
//! the watched video and remembers whether the next video should autoplay.
//!
//! The autoplay preference is read from one of two places, decided when the
//! panel is built: the logged-in viewer's profile, or session storage for
//! anonymous viewers. Writes always go to session storage, and additionally
//! to the profile when the viewer is logged in.

use crate::models::{
    MiniatureDisplayOptions, RecommendationInfo, User, UserUpdateMe, VideoPlaylist, VideoSummary,
};
use crate::preference::{
    parse_stored_flag, persist_to_session, PreferenceSource, AUTO_PLAY_NEXT_VIDEO_TOOLTIP,
};
use crate::session::{AuthService, Notifier, UserService};
use crate::storage::PreferenceStorage;
use crate::store::RecommendedVideosStore;
use crate::subscription::Subscription;
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub struct PanelDeps {
    pub store: RecommendedVideosStore,
    pub auth: Rc<dyn AuthService>,
    pub users: Rc<dyn UserService>,
    pub notifier: Rc<dyn Notifier>,
    pub storage: Rc<dyn PreferenceStorage>,
}

/// One assignment of the recommendation context by the container.
///
/// Each assignment gets a new revision, so assigning the same context twice
/// still yields two distinct values. Views that only forward changed inputs
/// therefore forward every assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationInput {
    revision: u64,
    recommendation: Option<RecommendationInfo>,
}

impl RecommendationInput {
    pub fn assign(&self, recommendation: Option<RecommendationInfo>) -> Self {
        Self {
            revision: self.revision.wrapping_add(1),
            recommendation,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn recommendation(&self) -> Option<&RecommendationInfo> {
        self.recommendation.as_ref()
    }
}

/// Outputs of the panel towards its container.
#[derive(Default)]
pub struct PanelCallbacks {
    got_recommendations: Option<Box<dyn Fn(&[VideoSummary])>>,
    state_changed: Option<Box<dyn Fn()>>,
}

impl PanelCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with every list the store publishes.
    pub fn on_got_recommendations(mut self, f: impl Fn(&[VideoSummary]) + 'static) -> Self {
        self.got_recommendations = Some(Box::new(f));
        self
    }

    /// Called whenever something the view renders has changed.
    pub fn on_state_changed(mut self, f: impl Fn() + 'static) -> Self {
        self.state_changed = Some(Box::new(f));
        self
    }
}

struct PanelState {
    auto_play_next_video: Cell<bool>,
    user_miniature: RefCell<Option<User>>,
    state_changed: Option<Box<dyn Fn()>>,
}

impl PanelState {
    fn changed(&self) {
        if let Some(state_changed) = &self.state_changed {
            state_changed();
        }
    }
}

pub struct RecommendedVideosPanel {
    deps: PanelDeps,
    state: Rc<PanelState>,
    source: PreferenceSource,
    input_recommendation: Option<RecommendationInfo>,
    playlist: Option<VideoPlaylist>,
    display_options: MiniatureDisplayOptions,
    _subscriptions: Vec<Subscription>,
}

impl RecommendedVideosPanel {
    pub fn new(deps: PanelDeps, callbacks: PanelCallbacks) -> Self {
        let source = PreferenceSource::resolve(deps.auth.as_ref(), deps.storage.as_ref());
        let state = Rc::new(PanelState {
            auto_play_next_video: Cell::new(source.read(deps.storage.as_ref())),
            user_miniature: RefCell::new(None),
            state_changed: callbacks.state_changed,
        });

        let mut subscriptions = Vec::new();

        let got_recommendations = callbacks.got_recommendations;
        let weak_state = Rc::downgrade(&state);
        subscriptions.push(deps.store.subscribe_recommendations(move |videos| {
            if let Some(got_recommendations) = &got_recommendations {
                got_recommendations(videos);
            }
            if let Some(state) = weak_state.upgrade() {
                state.changed();
            }
        }));

        if let Some(key) = source.watched_key() {
            let weak_state: Weak<PanelState> = Rc::downgrade(&state);
            subscriptions.push(deps.storage.watch(
                &[key],
                Box::new(move |change| {
                    let Some(state) = weak_state.upgrade() else {
                        return;
                    };
                    let value = parse_stored_flag(change.new_value.as_deref());
                    debug!("Autoplay preference changed in session storage: {value}");
                    state.auto_play_next_video.set(value);
                    state.changed();
                }),
            ));
        }

        Self {
            deps,
            state,
            source,
            input_recommendation: None,
            playlist: None,
            display_options: MiniatureDisplayOptions::ALL,
            _subscriptions: subscriptions,
        }
    }

    /// Fetches the identity shown next to the autoplay switch.
    pub fn on_ready(&self) {
        let state = Rc::downgrade(&self.state);
        self.deps
            .users
            .get_anonymous_or_logged_user(Box::new(move |result| {
                let Some(state) = state.upgrade() else {
                    return;
                };
                match result {
                    Ok(user) => {
                        *state.user_miniature.borrow_mut() = Some(user);
                        state.changed();
                    }
                    Err(e) => warn!("Could not load viewer identity: {e}"),
                }
            }));
    }

    /// Every call with a present context issues a request, even if the
    /// context did not change.
    pub fn set_input_recommendation(&mut self, recommendation: Option<RecommendationInfo>) {
        self.input_recommendation = recommendation;
        self.request_recommendations();
    }

    pub fn apply_input(&mut self, input: &RecommendationInput) {
        debug!("Recommendation input revision {}", input.revision());
        self.set_input_recommendation(input.recommendation().cloned());
    }

    /// A displayed video went away, so the whole list is stale.
    pub fn on_video_removed(&self) {
        self.request_recommendations();
    }

    fn request_recommendations(&self) {
        match &self.input_recommendation {
            Some(info) if info.is_present() => self.deps.store.request_new_recommendations(info),
            _ => debug!("No recommendation context, nothing to request"),
        }
    }

    pub fn set_playlist(&mut self, playlist: Option<VideoPlaylist>) {
        self.playlist = playlist;
    }

    /// Flips made by the view land here before
    /// [`switch_auto_play_next_video`](Self::switch_auto_play_next_video).
    pub fn set_auto_play_next_video(&self, value: bool) {
        self.state.auto_play_next_video.set(value);
    }

    /// Persists the current in-memory value. Nothing is rolled back if the
    /// profile update fails.
    pub fn switch_auto_play_next_video(&self) {
        let value = self.state.auto_play_next_video.get();
        persist_to_session(self.deps.storage.as_ref(), value);

        if !self.deps.auth.is_logged_in() {
            return;
        }

        let auth = Rc::clone(&self.deps.auth);
        let notifier = Rc::clone(&self.deps.notifier);
        self.deps.users.update_my_profile(
            UserUpdateMe::auto_play_next_video(value),
            Box::new(move |result| match result {
                Ok(()) => auth.refresh_user_information(),
                Err(e) => {
                    warn!("Failed to save autoplay preference: {e}");
                    notifier.error(&e.message());
                }
            }),
        );
    }

    pub fn auto_play_next_video(&self) -> bool {
        self.state.auto_play_next_video.get()
    }

    pub fn auto_play_next_video_tooltip(&self) -> &'static str {
        AUTO_PLAY_NEXT_VIDEO_TOOLTIP
    }

    pub fn preference_source(&self) -> &PreferenceSource {
        &self.source
    }

    pub fn user_miniature(&self) -> Option<User> {
        self.state.user_miniature.borrow().clone()
    }

    pub fn input_recommendation(&self) -> Option<&RecommendationInfo> {
        self.input_recommendation.as_ref()
    }

    pub fn playlist(&self) -> Option<&VideoPlaylist> {
        self.playlist.as_ref()
    }

    pub fn display_options(&self) -> MiniatureDisplayOptions {
        self.display_options
    }

    pub fn videos(&self) -> Vec<VideoSummary> {
        self.deps.store.recommendations()
    }

    pub fn has_videos(&self) -> bool {
        self.deps.store.has_recommendations()
    }
}
