mod env_variable_utils;
mod login;
mod router;
mod services;
mod toasts;
mod videos;

use crate::env_variable_utils::{get_backend_url, get_app_name, get_log_level, is_debug_mode};
use crate::router::{switch, Route};
use crate::services::AppServices;
use crate::toasts::Toasts;
use recommended_videos::{AuthService, User};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NavBar)]
fn nav_bar() -> Html {
    let services = use_context::<AppServices>().expect("AppServices context is provided by App");
    let user = use_state(|| services.auth.get_user());

    {
        let user = user.clone();
        let services = services.clone();
        use_effect_with((), move |_| {
            let subscription = services
                .auth
                .subscribe_user(move |current: &Option<User>| user.set(current.clone()));
            move || drop(subscription)
        });
    }

    let on_logout = {
        let services = services.clone();
        Callback::from(move |_: MouseEvent| services.auth.logout())
    };

    html! {
        <nav class="w-full max-w-6xl flex justify-between items-center text-white mb-6">
            <Link<Route> to={Route::Home} classes="text-xl font-bold">
                { get_app_name() }
            </Link<Route>>
            if let Some(current) = &*user {
                <div class="flex items-center gap-4">
                    <span>{ &current.display_name }</span>
                    <button onclick={on_logout} class="bg-red-600 px-3 py-1 rounded hover:bg-red-700">
                        {"Logout"}
                    </button>
                </div>
            } else {
                <Link<Route> to={Route::Login} classes="hover:underline">{"Log in"}</Link<Route>>
            }
        </nav>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| {
        let services = AppServices::new();
        // Starts from the stored profile snapshot; this brings it up to date.
        services.auth.refresh_user_information();
        services
    });

    html! {
        <ContextProvider<AppServices> context={(*services).clone()}>
            <BrowserRouter>
                <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
                    <NavBar />
                    <Switch<Route> render={switch} />
                </div>
                <Toasts />
            </BrowserRouter>
        </ContextProvider<AppServices>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(get_log_level()));
    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        get_backend_url(),
        is_debug_mode()
    );
}
