use crate::router::Route;
use crate::services::AppServices;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let services = use_context::<AppServices>().expect("AppServices context is provided by App");
    let navigator = use_navigator();
    let login_token_input = use_state(String::new);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_token_input = {
        let login_token_input = login_token_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            login_token_input.set(input_value);
        })
    };

    let on_login_submit = {
        let login_token_input = login_token_input.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();

            let token = login_token_input.trim().to_string();
            if token.is_empty() {
                error_message.set(Some("Please enter an access token".to_string()));
                return;
            }

            let loading = loading.clone();
            let error_message = error_message.clone();
            let navigator = navigator.clone();

            loading.set(true);
            error_message.set(None);

            services.auth.login(
                token,
                Box::new(move |result| {
                    loading.set(false);
                    match result {
                        Ok(_) => {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Home);
                            }
                        }
                        Err(e) => error_message.set(Some(format!("Login failed: {}", e.message()))),
                    }
                }),
            );
        })
    };

    html! {
        <div class="bg-white rounded-lg shadow-lg p-8 w-full max-w-md">
            <h1 class="text-2xl font-bold text-gray-800 mb-6">{"Log in"}</h1>

            if let Some(msg) = &*error_message {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    { msg }
                </div>
            }

            <form onsubmit={on_login_submit} class="flex flex-col gap-4">
                <input
                    type="password"
                    class="p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="Access token"
                    value={(*login_token_input).clone()}
                    oninput={on_token_input}
                    disabled={*loading}
                />
                <button
                    type="submit"
                    class="bg-blue-600 text-white p-3 rounded-lg hover:bg-blue-700 disabled:opacity-50"
                    disabled={*loading}
                >
                    { if *loading { "Logging in..." } else { "Log in" } }
                </button>
            </form>
        </div>
    }
}
