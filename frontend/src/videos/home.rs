use crate::services::{api, AppServices};
use crate::videos::miniature::VideoMiniature;
use recommended_videos::{AuthService, VideoSummary};
use yew::prelude::*;

const HOME_VIDEO_COUNT: usize = 15;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let services = use_context::<AppServices>().expect("AppServices context is provided by App");
    let videos = use_state(Vec::<VideoSummary>::default);
    let error_message = use_state(Option::<String>::default);
    let reload = use_state(|| 0u32);

    {
        let videos = videos.clone();
        let error_message = error_message.clone();
        use_effect_with(*reload, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::list_videos(HOME_VIDEO_COUNT).await {
                    Ok(list) => {
                        videos.set(list);
                        error_message.set(None);
                    }
                    Err(e) => error_message.set(Some(e.message())),
                }
            });
            || ()
        });
    }

    let on_video_removed = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let user = services.auth.get_user();

    html! {
        <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl">
            <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">{"Recent videos"}</h1>
            if let Some(msg) = &*error_message {
                <p class="text-red-600 text-center mb-4">{ format!("Error: {msg}") }</p>
            }
            <div class="flex flex-col gap-2">
                { for videos.iter().map(|video| html! {
                    <VideoMiniature
                        key={video.uuid.clone()}
                        video={video.clone()}
                        user={user.clone()}
                        on_video_removed={on_video_removed.clone()}
                    />
                })}
            </div>
        </div>
    }
}
