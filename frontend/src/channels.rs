use crate::api::{ApiClient, ApiError};
use crate::components::{DashboardLayout, ErrorMessage, LoadingIndicator};
use crate::models::Channel;
use crate::router::Route;
use crate::utils::format_number;
use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Serialize, Clone)]
struct CreateChannelRequest {
    channel_url: String,
    api_key: String,
}

pub async fn load_channels(client: &ApiClient) -> Result<Vec<Channel>, ApiError> {
    client.get_json("/youtube/channels").await
}

async fn create_channel(client: &ApiClient, request: &CreateChannelRequest) -> Result<Channel, ApiError> {
    client.post_json("/youtube/channels", request).await
}

#[function_component(ChannelsPage)]
pub fn channels_page() -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context missing");
    let navigator = use_navigator().expect("navigator missing");
    let channels = use_state(Vec::<Channel>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let show_dialog = use_state(|| false);
    let channel_url = use_state(String::new);
    let api_key = use_state(String::new);
    let submitting = use_state(|| false);
    let reload_tick = use_state(|| 0u32);

    {
        let client = client.clone();
        let channels = channels.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with(*reload_tick, move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match load_channels(&client).await {
                    Ok(channel_list) => {
                        channels.set(channel_list);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to load channels: {}", e)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_open_dialog = {
        let show_dialog = show_dialog.clone();
        Callback::from(move |_| show_dialog.set(true))
    };

    let on_close_dialog = {
        let show_dialog = show_dialog.clone();
        Callback::from(move |_| show_dialog.set(false))
    };

    let on_url_input = {
        let channel_url = channel_url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            channel_url.set(input.value());
        })
    };

    let on_key_input = {
        let api_key = api_key.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            api_key.set(input.value());
        })
    };

    let on_submit = {
        let client = client.clone();
        let channel_url = channel_url.clone();
        let api_key = api_key.clone();
        let show_dialog = show_dialog.clone();
        let submitting = submitting.clone();
        let error_message = error_message.clone();
        let reload_tick = reload_tick.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let url_value = (*channel_url).clone();
            let key_value = (*api_key).clone();

            if url_value.is_empty() || key_value.is_empty() {
                error_message.set(Some(
                    "Channel URL and API key are both required".to_string(),
                ));
                return;
            }

            let request = CreateChannelRequest {
                channel_url: url_value,
                api_key: key_value,
            };

            let client = client.clone();
            let channel_url = channel_url.clone();
            let api_key = api_key.clone();
            let show_dialog = show_dialog.clone();
            let submitting = submitting.clone();
            let error_message = error_message.clone();
            let reload_tick = reload_tick.clone();

            submitting.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match create_channel(&client, &request).await {
                    Ok(_) => {
                        channel_url.set(String::new());
                        api_key.set(String::new());
                        show_dialog.set(false);
                        reload_tick.set(*reload_tick + 1);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to add channel: {}", e)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <DashboardLayout title="YouTube Channels">
            <div class="flex justify-end mb-4">
                <button
                    onclick={on_open_dialog}
                    class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                >
                    {"Add Channel"}
                </button>
            </div>

            <ErrorMessage error_message={(*error_message).clone()} />

            {
                if *loading {
                    html! { <LoadingIndicator text="Loading channels..." /> }
                } else if channels.is_empty() {
                    html! {
                        <p class="text-gray-600 text-center py-8">
                            {"No channels registered yet. Add one to start monitoring."}
                        </p>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                            {
                                (*channels).iter().map(|channel| {
                                    let id = channel.id;
                                    let navigator = navigator.clone();
                                    let on_click = Callback::from(move |_| {
                                        navigator.push(&Route::ChannelDetail { id });
                                    });

                                    html! {
                                        <div
                                            onclick={on_click}
                                            class="border rounded-lg overflow-hidden cursor-pointer hover:shadow-lg"
                                        >
                                            {
                                                if let Some(banner) = &channel.banner_image {
                                                    html! {
                                                        <div
                                                            class="h-24 w-full bg-cover bg-center"
                                                            style={format!("background-image: url({})", banner)}
                                                        />
                                                    }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                            <div class="p-4 flex items-center gap-4">
                                                {
                                                    if let Some(avatar) = &channel.avatar_image {
                                                        html! {
                                                            <img
                                                                src={avatar.clone()}
                                                                alt={channel.channel_name.clone()}
                                                                class="h-12 w-12 rounded-full"
                                                            />
                                                        }
                                                    } else {
                                                        html! {}
                                                    }
                                                }
                                                <div>
                                                    <p class="font-semibold text-gray-800">{&channel.channel_name}</p>
                                                    {
                                                        if let Some(count) = channel.subscriber_count {
                                                            html! {
                                                                <p class="text-sm text-gray-500">
                                                                    { format!("{} subscribers", format_number(count)) }
                                                                </p>
                                                            }
                                                        } else {
                                                            html! {}
                                                        }
                                                    }
                                                </div>
                                            </div>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    }
                }
            }

            {
                if *show_dialog {
                    html! {
                        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4">
                            <div class="bg-white rounded-lg shadow-lg p-6 w-full max-w-md">
                                <h2 class="text-xl font-semibold text-gray-800 mb-4">
                                    {"Add YouTube Channel"}
                                </h2>
                                <form onsubmit={on_submit}>
                                    <div class="mb-4">
                                        <label class="block text-gray-700 text-sm font-bold mb-2">
                                            {"Channel URL"}
                                        </label>
                                        <input
                                            type="text"
                                            class="w-full px-4 py-2 border rounded"
                                            placeholder="https://youtube.com/@channel"
                                            value={(*channel_url).clone()}
                                            oninput={on_url_input}
                                            disabled={*submitting}
                                        />
                                    </div>
                                    <div class="mb-6">
                                        <label class="block text-gray-700 text-sm font-bold mb-2">
                                            {"API Key"}
                                        </label>
                                        <input
                                            type="password"
                                            class="w-full px-4 py-2 border rounded"
                                            placeholder="YouTube Data API key"
                                            value={(*api_key).clone()}
                                            oninput={on_key_input}
                                            disabled={*submitting}
                                        />
                                    </div>
                                    <div class="flex justify-end gap-2">
                                        <button
                                            type="button"
                                            onclick={on_close_dialog}
                                            class="px-4 py-2 bg-gray-200 text-gray-800 rounded hover:bg-gray-300"
                                        >
                                            {"Cancel"}
                                        </button>
                                        <button
                                            type="submit"
                                            disabled={*submitting}
                                            class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                                        >
                                            {if *submitting { "Adding..." } else { "Add Channel" }}
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </DashboardLayout>
    }
}
