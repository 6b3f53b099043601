use crate::api::{ApiClient, ApiError};
use crate::components::{DashboardLayout, ErrorMessage, LoadingIndicator, NoticeMessage};
use crate::models::User;
use crate::utils::{format_iso8601_date, format_time_since};
use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Debug, Serialize)]
struct UserUpdateRequest {
    avatar: String,
}

async fn load_me(client: &ApiClient) -> Result<User, ApiError> {
    client.get_json("/users/me").await
}

async fn update_avatar(client: &ApiClient, avatar: &str) -> Result<User, ApiError> {
    client
        .patch_json(
            "/users/me",
            &UserUpdateRequest {
                avatar: avatar.to_string(),
            },
        )
        .await
}

// Deterministic fallback avatar derived from the display name.
fn default_avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&format=svg&size=128",
        urlencoding::encode(name)
    )
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context missing");
    let user = use_state(|| None::<User>);
    let avatar_input = use_state(String::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);

    {
        let client = client.clone();
        let user = user.clone();
        let avatar_input = avatar_input.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match load_me(&client).await {
                    Ok(me) => {
                        avatar_input.set(me.avatar.clone().unwrap_or_default());
                        user.set(Some(me));
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to load profile: {}", e)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_avatar_input = {
        let avatar_input = avatar_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            avatar_input.set(input.value());
        })
    };

    let on_use_default = {
        let user = user.clone();
        let avatar_input = avatar_input.clone();
        Callback::from(move |_| {
            if let Some(me) = &*user {
                let name = me.name.clone().unwrap_or_else(|| me.email.clone());
                avatar_input.set(default_avatar_url(&name));
            }
        })
    };

    let on_save_avatar = {
        let client = client.clone();
        let user = user.clone();
        let avatar_input = avatar_input.clone();
        let saving = saving.clone();
        let error_message = error_message.clone();
        let notice = notice.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let avatar = (*avatar_input).clone();
            if avatar.is_empty() {
                error_message.set(Some("Enter an avatar URL first".to_string()));
                return;
            }

            let client = client.clone();
            let user = user.clone();
            let saving = saving.clone();
            let error_message = error_message.clone();
            let notice = notice.clone();

            saving.set(true);
            error_message.set(None);
            notice.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match update_avatar(&client, &avatar).await {
                    Ok(me) => {
                        user.set(Some(me));
                        notice.set(Some("Profile updated".to_string()));
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to update profile: {}", e)));
                    }
                }
                saving.set(false);
            });
        })
    };

    html! {
        <DashboardLayout title="Profile">
            <ErrorMessage error_message={(*error_message).clone()} />
            <NoticeMessage notice={(*notice).clone()} />

            {
                if *loading {
                    html! { <LoadingIndicator text="Loading profile..." /> }
                } else if let Some(me) = &*user {
                    html! {
                        <div class="max-w-xl">
                            <div class="flex items-center gap-6 mb-6">
                                {
                                    if let Some(avatar) = &me.avatar {
                                        html! {
                                            <img
                                                src={avatar.clone()}
                                                alt="avatar"
                                                class="h-20 w-20 rounded-full border"
                                            />
                                        }
                                    } else {
                                        let initial = me
                                            .name
                                            .as_deref()
                                            .unwrap_or("?")
                                            .chars()
                                            .next()
                                            .map(String::from)
                                            .unwrap_or_else(|| "?".to_string());
                                        html! {
                                            <div class="h-20 w-20 rounded-full bg-gray-300 flex items-center justify-center text-2xl text-gray-700">
                                                { initial }
                                            </div>
                                        }
                                    }
                                }
                                <div>
                                    <h2 class="text-2xl font-semibold text-gray-800">
                                        { me.name.clone().unwrap_or_else(|| "Unnamed".to_string()) }
                                    </h2>
                                    <p class="text-gray-600">{ &me.email }</p>
                                    {
                                        if let Some(created_at) = &me.created_at {
                                            html! {
                                                <p class="text-sm text-gray-500">
                                                    { format!("Member since {}", format_iso8601_date(created_at)) }
                                                </p>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    {
                                        if let Some(last_login) = &me.last_login {
                                            html! {
                                                <p class="text-sm text-gray-500">
                                                    { format!("Last login {}", format_time_since(last_login)) }
                                                </p>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            </div>

                            <form onsubmit={on_save_avatar}>
                                <label class="block text-gray-700 text-sm font-bold mb-2">
                                    {"Avatar URL"}
                                </label>
                                <div class="flex gap-2">
                                    <input
                                        type="text"
                                        class="flex-grow px-4 py-2 border rounded"
                                        placeholder="https://..."
                                        value={(*avatar_input).clone()}
                                        oninput={on_avatar_input}
                                        disabled={*saving}
                                    />
                                    <button
                                        type="button"
                                        onclick={on_use_default}
                                        class="px-4 py-2 bg-gray-600 text-white rounded hover:bg-gray-700"
                                    >
                                        {"Generate"}
                                    </button>
                                    <button
                                        type="submit"
                                        disabled={*saving}
                                        class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                                    >
                                        {if *saving { "Saving..." } else { "Save" }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    }
                } else {
                    html! { <p class="text-gray-600">{"Profile unavailable."}</p> }
                }
            }
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::default_avatar_url;

    #[test]
    fn default_avatar_encodes_the_name() {
        assert_eq!(
            default_avatar_url("Jo Doe"),
            "https://ui-avatars.com/api/?name=Jo%20Doe&format=svg&size=128"
        );
    }
}
