use crate::api::{ApiClient, ApiError};
use crate::router::Route;
use serde::Deserialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Deserialize)]
struct Token {
    access_token: String,
}

// OAuth2 password flow: the backend expects form fields named `username`
// and `password`, not JSON.
fn login_form_body(email: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(email),
        urlencoding::encode(password)
    )
}

async fn login(client: &ApiClient, email: &str, password: &str) -> Result<Token, ApiError> {
    client
        .post_form("/auth/login", login_form_body(email, password))
        .await
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context missing");
    let navigator = use_navigator().expect("navigator missing");
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let client = client.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_value = (*email).clone();
            let password_value = (*password).clone();

            if email_value.is_empty() || password_value.is_empty() {
                error_message.set(Some("Please enter your email and password".to_string()));
                return;
            }

            let client = client.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();

            loading.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match login(&client, &email_value, &password_value).await {
                    Ok(token) => {
                        client.store_token(&token.access_token);
                        navigator.push(&Route::Dashboard);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Login failed: {}", e)));
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
                    {"Sign in"}
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
                            {"Email"}
                        </label>
                        <input
                            type="email"
                            class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={on_email_input}
                            disabled={*loading}
                        />
                    </div>
                    <div class="mb-6">
                        <label class="block text-gray-700 text-sm font-bold mb-2">
                            {"Password"}
                        </label>
                        <input
                            type="password"
                            class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Your password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            disabled={*loading}
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={*loading}
                        class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700 disabled:opacity-50"
                    >
                        {if *loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="text-center mt-4">
                    <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline text-sm">
                        {"No account yet? Register"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::login_form_body;

    #[test]
    fn encodes_credentials_as_form_fields() {
        assert_eq!(
            login_form_body("user@example.com", "secret"),
            "username=user%40example.com&password=secret"
        );
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(
            login_form_body("a b", "p&ss=word"),
            "username=a%20b&password=p%26ss%3Dword"
        );
    }
}
