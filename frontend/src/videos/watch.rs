use crate::services::api;
use crate::videos::recommendations::RecommendedVideos;
use recommended_videos::utils::{format_published_date, format_views};
use recommended_videos::{RecommendationInput, VideoDetails, VideoSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WatchPageProps {
    pub uuid: String,
}

#[function_component(WatchPage)]
pub fn watch_page(props: &WatchPageProps) -> Html {
    let video = use_state(|| None::<VideoDetails>);
    let error_message = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let up_next = use_state(|| None::<VideoSummary>);
    let recommendation = use_state(RecommendationInput::default);
    // Source of the next revision; state handles captured by pending loads
    // may be stale.
    let last_recommendation = use_mut_ref(RecommendationInput::default);

    {
        let video = video.clone();
        let error_message = error_message.clone();
        let loading = loading.clone();
        let recommendation = recommendation.clone();
        use_effect_with(props.uuid.clone(), move |uuid| {
            let uuid = uuid.clone();
            loading.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let info = match api::get_video(&uuid).await {
                    Ok(details) => {
                        let info = details.recommendation_info();
                        video.set(Some(details));
                        Some(info)
                    }
                    Err(e) => {
                        video.set(None);
                        error_message.set(Some(e.message()));
                        None
                    }
                };
                let next = last_recommendation.borrow().assign(info);
                *last_recommendation.borrow_mut() = next.clone();
                recommendation.set(next);
                loading.set(false);
            });
            || ()
        });
    }

    let on_got_recommendations = {
        let up_next = up_next.clone();
        Callback::from(move |videos: Vec<VideoSummary>| {
            up_next.set(videos.into_iter().next());
        })
    };

    html! {
        <div class="flex flex-col lg:flex-row gap-6 w-full max-w-6xl">
            <div class="flex-grow bg-white p-6 rounded-lg shadow-lg">
                if *loading {
                    <p class="text-gray-500">{"Loading..."}</p>
                }
                if let Some(msg) = &*error_message {
                    <p class="text-red-600">{ format!("Error: {msg}") }</p>
                }
                if let Some(details) = &*video {
                    <div class="w-full aspect-video bg-black rounded mb-4"></div>
                    <h1 class="text-2xl font-bold text-gray-800">{ &details.summary.name }</h1>
                    <p class="text-sm text-gray-500 mb-2">
                        { format!(
                            "{} · {} · {}",
                            details.summary.account_display_name,
                            format_published_date(&details.summary.published_at),
                            format_views(details.summary.views)
                        ) }
                    </p>
                    <p class="text-gray-700 whitespace-pre-line">{ &details.description }</p>
                    if let Some(next) = &*up_next {
                        <p class="mt-4 text-sm text-gray-600">{ format!("Up next: {}", next.name) }</p>
                    }
                }
            </div>
            <div class="lg:w-96 bg-white p-4 rounded-lg shadow-lg">
                <RecommendedVideos
                    input_recommendation={(*recommendation).clone()}
                    on_got_recommendations={on_got_recommendations}
                />
            </div>
        </div>
    }
}
