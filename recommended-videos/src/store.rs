use crate::models::{RecommendationInfo, VideoSummary};
use crate::session::Completion;
use crate::subscription::{Listeners, Subscription};
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Produces recommendations for a context, e.g. over HTTP.
pub trait RecommendationService {
    fn get_recommendations(&self, info: &RecommendationInfo, done: Completion<Vec<VideoSummary>>);
}

struct StoreInner {
    service: Rc<dyn RecommendationService>,
    generation: Cell<u64>,
    latest: RefCell<Vec<VideoSummary>>,
    recommendations: Listeners<[VideoSummary]>,
    has_recommendations: Listeners<bool>,
}

impl StoreInner {
    fn publish(&self, videos: Vec<VideoSummary>) {
        let has_videos = !videos.is_empty();
        *self.latest.borrow_mut() = videos;

        let snapshot = self.latest.borrow().clone();
        self.recommendations.emit(&snapshot);
        self.has_recommendations.emit(&has_videos);
    }
}

/// Latest recommendations for the current context. Clones share state.
#[derive(Clone)]
pub struct RecommendedVideosStore {
    inner: Rc<StoreInner>,
}

impl RecommendedVideosStore {
    pub fn new(service: Rc<dyn RecommendationService>) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                service,
                generation: Cell::new(0),
                latest: RefCell::new(Vec::new()),
                recommendations: Listeners::new(),
                has_recommendations: Listeners::new(),
            }),
        }
    }

    /// Only the response to the most recent request is published.
    pub fn request_new_recommendations(&self, info: &RecommendationInfo) {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        debug!(
            "Requesting recommendations for {} (request #{generation})",
            info.uuid
        );

        let store: Weak<StoreInner> = Rc::downgrade(&self.inner);
        let uuid = info.uuid.clone();
        self.inner.service.get_recommendations(
            info,
            Box::new(move |result| {
                let Some(store) = store.upgrade() else {
                    return;
                };
                if store.generation.get() != generation {
                    debug!("Dropping stale recommendations for {uuid}");
                    return;
                }
                match result {
                    Ok(videos) => {
                        debug!("Got {} recommendations for {uuid}", videos.len());
                        store.publish(videos);
                    }
                    Err(e) => warn!("Failed to load recommendations for {uuid}: {e}"),
                }
            }),
        );
    }

    pub fn subscribe_recommendations(
        &self,
        listener: impl Fn(&[VideoSummary]) + 'static,
    ) -> Subscription {
        self.inner.recommendations.subscribe(listener)
    }

    pub fn subscribe_has_recommendations(&self, listener: impl Fn(&bool) + 'static) -> Subscription {
        self.inner.has_recommendations.subscribe(listener)
    }

    pub fn recommendations(&self) -> Vec<VideoSummary> {
        self.inner.latest.borrow().clone()
    }

    pub fn has_recommendations(&self) -> bool {
        !self.inner.latest.borrow().is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.recommendations.len() + self.inner.has_recommendations.len()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ApiError;

    /// Holds completions until the test resolves them.
    #[derive(Default)]
    pub(crate) struct PendingService {
        pub(crate) requests: RefCell<Vec<(RecommendationInfo, Completion<Vec<VideoSummary>>)>>,
    }

    impl PendingService {
        pub(crate) fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }

        pub(crate) fn requested_uuids(&self) -> Vec<String> {
            self.requests
                .borrow()
                .iter()
                .map(|(info, _)| info.uuid.clone())
                .collect()
        }

        pub(crate) fn resolve(&self, index: usize, result: Result<Vec<VideoSummary>, ApiError>) {
            let (_, done) = self.requests.borrow_mut().remove(index);
            done(result);
        }
    }

    impl RecommendationService for PendingService {
        fn get_recommendations(
            &self,
            info: &RecommendationInfo,
            done: Completion<Vec<VideoSummary>>,
        ) {
            self.requests.borrow_mut().push((info.clone(), done));
        }
    }

    pub(crate) fn video(uuid: &str) -> VideoSummary {
        VideoSummary {
            uuid: uuid.to_string(),
            name: format!("Video {uuid}"),
            account_name: "alice".to_string(),
            account_display_name: "Alice".to_string(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
            ..VideoSummary::default()
        }
    }

    fn uuids(videos: &[VideoSummary]) -> Vec<String> {
        videos.iter().map(|v| v.uuid.clone()).collect()
    }

    #[test]
    fn publishes_to_both_streams() {
        let service = Rc::new(PendingService::default());
        let store = RecommendedVideosStore::new(service.clone());
        let lists = Rc::new(RefCell::new(Vec::new()));
        let flags = Rc::new(RefCell::new(Vec::new()));

        let _a = {
            let lists = lists.clone();
            store.subscribe_recommendations(move |videos| lists.borrow_mut().push(uuids(videos)))
        };
        let _b = {
            let flags = flags.clone();
            store.subscribe_has_recommendations(move |has| flags.borrow_mut().push(*has))
        };

        store.request_new_recommendations(&RecommendationInfo::new("ctx", vec![]));
        service.resolve(0, Ok(vec![video("a"), video("b")]));

        store.request_new_recommendations(&RecommendationInfo::new("ctx", vec![]));
        service.resolve(0, Ok(vec![]));

        assert_eq!(
            *lists.borrow(),
            vec![vec!["a".to_string(), "b".to_string()], vec![]]
        );
        assert_eq!(*flags.borrow(), vec![true, false]);
        assert!(!store.has_recommendations());
    }

    #[test]
    fn stale_response_is_dropped() {
        let service = Rc::new(PendingService::default());
        let store = RecommendedVideosStore::new(service.clone());

        store.request_new_recommendations(&RecommendationInfo::new("first", vec![]));
        store.request_new_recommendations(&RecommendationInfo::new("second", vec![]));

        // The newer request completes first, then the older one.
        service.resolve(1, Ok(vec![video("from-second")]));
        service.resolve(0, Ok(vec![video("from-first")]));

        assert_eq!(uuids(&store.recommendations()), vec!["from-second"]);
    }

    #[test]
    fn failure_keeps_previous_list() {
        let service = Rc::new(PendingService::default());
        let store = RecommendedVideosStore::new(service.clone());

        store.request_new_recommendations(&RecommendationInfo::new("ctx", vec![]));
        service.resolve(0, Ok(vec![video("a")]));
        store.request_new_recommendations(&RecommendationInfo::new("ctx", vec![]));
        service.resolve(0, Err(ApiError::Network("offline".to_string())));

        assert_eq!(uuids(&store.recommendations()), vec!["a"]);
    }

    #[test]
    fn completion_after_store_dropped_is_ignored() {
        let service = Rc::new(PendingService::default());
        let store = RecommendedVideosStore::new(service.clone());
        let emitted = Rc::new(Cell::new(0));
        let subscription = {
            let emitted = emitted.clone();
            store.subscribe_recommendations(move |_| emitted.set(emitted.get() + 1))
        };
        store.request_new_recommendations(&RecommendationInfo::new("ctx", vec![]));
        drop(store);

        service.resolve(0, Ok(vec![video("a")]));
        assert_eq!(emitted.get(), 0);
        drop(subscription);
    }

    #[test]
    fn late_completion_reaches_no_clone() {
        let service = Rc::new(PendingService::default());
        let store = RecommendedVideosStore::new(service.clone());
        let observer = store.clone();
        let emitted = Rc::new(Cell::new(0));
        let _subscription = {
            let emitted = emitted.clone();
            observer.subscribe_recommendations(move |_| emitted.set(emitted.get() + 1))
        };

        store.request_new_recommendations(&RecommendationInfo::new("old", vec![]));
        store.request_new_recommendations(&RecommendationInfo::new("new", vec![]));
        service.resolve(0, Ok(vec![video("a")]));

        assert_eq!(emitted.get(), 0);
        assert!(!observer.has_recommendations());
    }
}
