use crate::login::LoginPage;
use crate::videos::home::HomePage;
use crate::videos::watch::WatchPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/videos/watch/:uuid")]
    Watch { uuid: String },
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Watch { uuid } => html! { <WatchPage uuid={uuid} /> },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! {
            <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                    {"Go back to recent videos"}
                </Link<Route>>
            </div>
        },
    }
}
