mod api;
mod channel_detail;
mod channels;
mod components;
mod env_variable_utils;
mod login;
mod models;
mod monitoring;
mod profile;
mod register;
mod router;
mod session;
mod utils;

use std::rc::Rc;

use crate::api::ApiClient;
use crate::env_variable_utils::{get_api_base_url, get_app_name, is_debug_mode};
use crate::router::{switch, Route};
use crate::session::BrowserCredentials;
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // One client for the whole tree; the credential store is read once here
    // and cleared on logout or 401.
    let client = use_memo((), |_| ApiClient::new(Rc::new(BrowserCredentials)));

    html! {
        <ContextProvider<ApiClient> context={(*client).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiClient>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!(
            "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
            get_app_name(),
            get_api_base_url(),
            is_debug_mode()
        )
        .into(),
    );
}
