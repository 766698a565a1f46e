use crate::router::Route;
use crate::services::{api, AppServices};
use recommended_videos::utils::{format_duration, format_published_date, format_views};
use recommended_videos::{MiniatureDisplayOptions, Notifier, User, VideoPlaylist, VideoSummary};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoMiniatureProps {
    pub video: VideoSummary,
    #[prop_or_default]
    pub display_options: MiniatureDisplayOptions,
    #[prop_or_default]
    pub user: Option<User>,
    #[prop_or_default]
    pub playlist: Option<VideoPlaylist>,
    #[prop_or_default]
    pub on_video_removed: Callback<()>,
}

fn owns(user: Option<&User>, video: &VideoSummary) -> bool {
    user.is_some_and(|user| !user.anonymous && user.username == video.account_name)
}

#[function_component(VideoMiniature)]
pub fn video_miniature(props: &VideoMiniatureProps) -> Html {
    let services = use_context::<AppServices>().expect("AppServices context is provided by App");
    let removing = use_state(|| false);
    let video = &props.video;
    let options = props.display_options;

    let on_remove = {
        let services = services.clone();
        let removing = removing.clone();
        let uuid = video.uuid.clone();
        let on_video_removed = props.on_video_removed.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(token) = services.auth.token() else {
                return;
            };
            let services = services.clone();
            let removing = removing.clone();
            let uuid = uuid.clone();
            let on_video_removed = on_video_removed.clone();
            removing.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_video(&uuid, &token).await {
                    Ok(()) => {
                        services.notifier.success("Video removed");
                        on_video_removed.emit(());
                    }
                    Err(e) => services.notifier.error(&e.message()),
                }
                removing.set(false);
            });
        })
    };

    html! {
        <div class="flex gap-3 p-2 rounded hover:bg-gray-100">
            <Link<Route> to={Route::Watch { uuid: video.uuid.clone() }} classes="relative shrink-0">
                <div class="w-40 h-24 bg-gray-300 rounded overflow-hidden">
                    if let Some(thumbnail) = &video.thumbnail_url {
                        <img src={thumbnail.clone()} alt={video.name.clone()} class="w-full h-full object-cover" />
                    }
                </div>
                <span class="absolute bottom-1 right-1 bg-black text-white text-xs px-1 rounded">
                    { format_duration(video.duration) }
                </span>
            </Link<Route>>
            <div class="flex flex-col text-sm min-w-0">
                <Link<Route> to={Route::Watch { uuid: video.uuid.clone() }} classes="font-semibold text-gray-800 hover:underline truncate">
                    { &video.name }
                </Link<Route>>
                if options.by {
                    <span class="flex items-center gap-1 text-gray-600">
                        if options.avatar {
                            if let Some(avatar) = &video.account_avatar_url {
                                <img src={avatar.clone()} alt="" class="w-4 h-4 rounded-full" />
                            }
                        }
                        { &video.account_display_name }
                    </span>
                }
                <span class="text-gray-500">
                    if options.date {
                        { format_published_date(&video.published_at) }
                    }
                    if options.date && options.views {
                        { " · " }
                    }
                    if options.views {
                        { format_views(video.views) }
                    }
                </span>
                if let Some(playlist) = &props.playlist {
                    <span class="text-xs text-gray-400">{ format!("In {}", playlist.display_name) }</span>
                }
                if owns(props.user.as_ref(), video) {
                    <button
                        class="self-start text-xs text-red-600 hover:underline disabled:opacity-50"
                        onclick={on_remove}
                        disabled={*removing}
                    >
                        { if *removing { "Removing..." } else { "Remove" } }
                    </button>
                }
            </div>
        </div>
    }
}
