use crate::services::AppServices;
use crate::videos::miniature::VideoMiniature;
use recommended_videos::{
    PanelCallbacks, RecommendationInput, RecommendedVideosPanel, VideoPlaylist, VideoSummary,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecommendedVideosProps {
    /// Every new assignment triggers a request, even for an unchanged context.
    #[prop_or_default]
    pub input_recommendation: RecommendationInput,
    #[prop_or_default]
    pub playlist: Option<VideoPlaylist>,
    #[prop_or_default]
    pub on_got_recommendations: Callback<Vec<VideoSummary>>,
}

/// "Other videos" column next to the player.
///
/// All state lives in a [`RecommendedVideosPanel`]; this component only
/// feeds it prop changes and clicks, and re-renders when it says so. The
/// panel, and with it every subscription, is dropped on unmount.
#[function_component(RecommendedVideos)]
pub fn recommended_videos(props: &RecommendedVideosProps) -> Html {
    let services = use_context::<AppServices>().expect("AppServices context is provided by App");
    let update = use_force_update();

    // The panel outlives renders, so it reaches the parent's callback
    // through this cell, refreshed on every render.
    let on_got_recommendations = use_mut_ref(|| props.on_got_recommendations.clone());
    *on_got_recommendations.borrow_mut() = props.on_got_recommendations.clone();

    let panel = {
        let update = update.clone();
        let on_got_recommendations = on_got_recommendations.clone();
        use_mut_ref(move || {
            RecommendedVideosPanel::new(
                services.panel_deps(),
                PanelCallbacks::new()
                    .on_got_recommendations(move |videos| {
                        let callback = on_got_recommendations.borrow().clone();
                        callback.emit(videos.to_vec())
                    })
                    .on_state_changed(move || update.force_update()),
            )
        })
    };

    {
        let panel = panel.clone();
        use_effect_with((), move |_| {
            panel.borrow().on_ready();
            || ()
        });
    }

    {
        let panel = panel.clone();
        use_effect_with(props.input_recommendation.clone(), move |input| {
            panel.borrow_mut().apply_input(input);
            || ()
        });
    }

    {
        let panel = panel.clone();
        use_effect_with(props.playlist.clone(), move |playlist| {
            panel.borrow_mut().set_playlist(playlist.clone());
            || ()
        });
    }

    let on_auto_play_change = {
        let panel = panel.clone();
        let update = update.clone();
        Callback::from(move |e: Event| {
            let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
            let panel = panel.borrow();
            panel.set_auto_play_next_video(checked);
            panel.switch_auto_play_next_video();
            update.force_update();
        })
    };

    let on_video_removed = {
        let panel = panel.clone();
        Callback::from(move |_: ()| panel.borrow().on_video_removed())
    };

    let panel = panel.borrow();
    let display_options = panel.display_options();
    let user = panel.user_miniature();
    let playlist = panel.playlist().cloned();

    html! {
        <div class="other-videos w-full">
            if panel.has_videos() {
                <div class="flex items-center justify-between mb-2">
                    <h2 class="text-lg font-semibold text-gray-800">{"Other videos"}</h2>
                    <label class="inline-flex items-center gap-2 text-xs text-gray-600" title={panel.auto_play_next_video_tooltip()}>
                        <span>{"AUTOPLAY"}</span>
                        <input
                            type="checkbox"
                            class="form-checkbox h-4 w-4 text-blue-600"
                            checked={panel.auto_play_next_video()}
                            onchange={on_auto_play_change}
                        />
                    </label>
                </div>
                <div class="flex flex-col gap-2">
                    { for panel.videos().into_iter().map(|video| html! {
                        <VideoMiniature
                            key={video.uuid.clone()}
                            video={video.clone()}
                            display_options={display_options}
                            user={user.clone()}
                            playlist={playlist.clone()}
                            on_video_removed={on_video_removed.clone()}
                        />
                    })}
                </div>
            }
        </div>
    }
}
