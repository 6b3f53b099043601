use crate::api::{ApiClient, ApiError};
use crate::router::Route;
use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Serialize, Clone)]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<(), ApiError> {
    client.post_json_unit("/auth/register", request).await
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context missing");
    let navigator = use_navigator().expect("navigator missing");
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_name_input = text_input(&name);
    let on_email_input = text_input(&email);
    let on_password_input = text_input(&password);
    let on_confirm_input = text_input(&confirm_password);

    let on_submit = {
        let client = client.clone();
        let navigator = navigator.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.is_empty() || email.is_empty() || password.is_empty() {
                error_message.set(Some("Please fill in all required fields".to_string()));
                return;
            }
            if *password != *confirm_password {
                error_message.set(Some("Passwords do not match".to_string()));
                return;
            }

            let request = RegisterRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm_password).clone(),
            };

            let client = client.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();

            loading.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match register(&client, &request).await {
                    Ok(_) => {
                        navigator.push(&Route::Login);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Registration failed: {}", e)));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-md">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    {"Create an account"}
                </h1>

                {
                    if let Some(msg) = &*error_message {
                        html! {
                            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                                { msg }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <form onsubmit={on_submit}>
                    <div class="mb-4">
                        <label class="block text-gray-700 text-sm font-bold mb-2">
                            {"Name"}
                        </label>
                        <input
                            type="text"
                            class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                            value={(*name).clone()}
                            oninput={on_name_input}
                            disabled={*loading}
                        />
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 text-sm font-bold mb-2">
                            {"Email"}
                        </label>
                        <input
                            type="email"
                            class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                            value={(*email).clone()}
                            oninput={on_email_input}
                            disabled={*loading}
                        />
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 text-sm font-bold mb-2">
                            {"Password"}
                        </label>
                        <input
                            type="password"
                            class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            disabled={*loading}
                        />
                    </div>
                    <div class="mb-6">
                        <label class="block text-gray-700 text-sm font-bold mb-2">
                            {"Confirm password"}
                        </label>
                        <input
                            type="password"
                            class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                            value={(*confirm_password).clone()}
                            oninput={on_confirm_input}
                            disabled={*loading}
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={*loading}
                        class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700 disabled:opacity-50"
                    >
                        {if *loading { "Creating..." } else { "Register" }}
                    </button>
                </form>

                <div class="text-center mt-4">
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline text-sm">
                        {"Already registered? Sign in"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
