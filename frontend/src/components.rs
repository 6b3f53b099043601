use crate::api::ApiClient;
use crate::env_variable_utils::get_app_name;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeMessageProps {
    pub notice: Option<String>,
}

#[function_component(NoticeMessage)]
pub fn notice_message(props: &NoticeMessageProps) -> Html {
    if let Some(msg) = &props.notice {
        html! {
            <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-4">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingIndicatorProps {
    #[prop_or(AttrValue::from("Loading..."))]
    pub text: AttrValue,
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator(props: &LoadingIndicatorProps) -> Html {
    html! {
        <div class="text-center py-8">
            <p class="text-gray-600">{ &props.text }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Children,
    pub title: String,
}

/// Shell around every authenticated view. Redirects to the login screen
/// when no token is stored.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context missing");
    let navigator = use_navigator().expect("navigator missing");

    if client.token().is_none() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    let on_logout = {
        Callback::from(move |_| {
            client.logout();
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-6xl mx-auto">
                <div class="flex justify-between items-center mb-4 text-white">
                    <div class="flex items-center gap-6">
                        <span class="text-xl font-bold">{ get_app_name() }</span>
                        <nav class="flex gap-4 text-sm">
                            <Link<Route> to={Route::Dashboard} classes="hover:underline">
                                {"Overview"}
                            </Link<Route>>
                            <Link<Route> to={Route::Channels} classes="hover:underline">
                                {"Channels"}
                            </Link<Route>>
                            <Link<Route> to={Route::Monitorings} classes="hover:underline">
                                {"Monitoring"}
                            </Link<Route>>
                            <Link<Route> to={Route::Profile} classes="hover:underline">
                                {"Profile"}
                            </Link<Route>>
                        </nav>
                    </div>
                    <button
                        onclick={on_logout}
                        class="bg-red-600 text-white px-4 py-2 rounded hover:bg-red-700"
                    >
                        {"Logout"}
                    </button>
                </div>
                <div class="bg-white rounded-lg shadow-lg p-8">
                    <h1 class="text-3xl font-bold text-gray-800 mb-6">
                        {&props.title}
                    </h1>
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
