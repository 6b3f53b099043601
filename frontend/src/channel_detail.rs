use crate::api::{ApiClient, ApiError};
use crate::components::{DashboardLayout, ErrorMessage, LoadingIndicator};
use crate::models::{Channel, VideoCandidate};
use crate::router::Route;
use crate::utils::{format_number, format_time_since, video_thumbnail_url};
use yew::prelude::*;
use yew_router::prelude::*;

async fn load_channel(client: &ApiClient, id: i64) -> Result<Channel, ApiError> {
    client.get_json(&format!("/youtube/channels/{}", id)).await
}

async fn load_recent_videos(client: &ApiClient, id: i64) -> Result<Vec<VideoCandidate>, ApiError> {
    client
        .get_json(&format!(
            "/youtube/channels/{}/videos?limit=12&sort=-published_at",
            id
        ))
        .await
}

#[derive(Properties, PartialEq)]
pub struct ChannelDetailPageProps {
    pub id: i64,
}

#[function_component(ChannelDetailPage)]
pub fn channel_detail_page(props: &ChannelDetailPageProps) -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context missing");
    let channel = use_state(|| None::<Channel>);
    let videos = use_state(Vec::<VideoCandidate>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let client = client.clone();
        let channel = channel.clone();
        let videos = videos.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with(props.id, move |&id| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match load_channel(&client, id).await {
                    Ok(data) => {
                        channel.set(Some(data));

                        match load_recent_videos(&client, id).await {
                            Ok(video_list) => videos.set(video_list),
                            Err(e) => {
                                error_message
                                    .set(Some(format!("Failed to load recent videos: {}", e)));
                            }
                        }
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to load channel: {}", e)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <DashboardLayout title="Channel">
            <div class="mb-4">
                <Link<Route> to={Route::Channels} classes="text-blue-600 hover:underline">
                    {"← Back to Channels"}
                </Link<Route>>
            </div>

            <ErrorMessage error_message={(*error_message).clone()} />

            {
                if *loading {
                    html! { <LoadingIndicator text="Loading channel..." /> }
                } else if let Some(channel) = &*channel {
                    html! {
                        <div>
                            <div class="flex items-center gap-4 mb-6">
                                {
                                    if let Some(avatar) = &channel.avatar_image {
                                        html! {
                                            <img
                                                src={avatar.clone()}
                                                alt={channel.channel_name.clone()}
                                                class="h-16 w-16 rounded-full"
                                            />
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div>
                                    <h2 class="text-2xl font-semibold text-gray-800">
                                        <a
                                            href={channel.channel_url.clone()}
                                            class="hover:underline"
                                        >
                                            {&channel.channel_name}
                                        </a>
                                    </h2>
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

                            <h3 class="text-xl font-semibold text-gray-800 mb-4">{"Recent Videos"}</h3>
                            {
                                if videos.is_empty() {
                                    html! {
                                        <p class="text-gray-600">{"No videos found for this channel."}</p>
                                    }
                                } else {
                                    html! {
                                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                            {
                                                (*videos).iter().map(|video| {
                                                    let thumbnail = video
                                                        .thumbnail_url
                                                        .clone()
                                                        .unwrap_or_else(|| video_thumbnail_url(&video.video_id));

                                                    html! {
                                                        <div class="border rounded-lg overflow-hidden">
                                                            <div
                                                                class="h-32 w-full bg-cover bg-center"
                                                                style={format!("background-image: url({})", thumbnail)}
                                                            />
                                                            <div class="p-3">
                                                                <p class="text-sm font-medium text-gray-800">{&video.title}</p>
                                                                <p class="text-xs text-gray-500">
                                                                    { format_time_since(&video.published_at) }
                                                                    {
                                                                        if video.is_live {
                                                                            html! { <span class="ml-2 text-red-600 font-semibold">{"LIVE"}</span> }
                                                                        } else {
                                                                            html! {}
                                                                        }
                                                                    }
                                                                </p>
                                                            </div>
                                                        </div>
                                                    }
                                                }).collect::<Html>()
                                            }
                                        </div>
                                    }
                                }
                            }
                        </div>
                    }
                } else {
                    html! { <p class="text-gray-600">{"Channel not found."}</p> }
                }
            }
        </DashboardLayout>
    }
}
