use super::api::{
    delete_monitoring, get_channel_playlists, get_channel_videos, get_monitoring,
    update_monitoring, update_monitoring_status, validate_video_url,
};
use super::components::{ProgressBar, StatusBadge};
use super::form::{toggle_target, MonitoringForm};
use super::models::{interval_label, MonitoringDetails, MonitoringStatus, PlaylistCandidate, INTERVAL_OPTIONS};
use crate::api::ApiClient;
use crate::components::{DashboardLayout, ErrorMessage, NoticeMessage};
use crate::models::VideoCandidate;
use crate::router::Route;
use crate::utils::{format_iso8601_date, format_time_since, video_thumbnail_url};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonitoringDetailPageProps {
    pub id: i64,
}

#[function_component(MonitoringDetailPage)]
pub fn monitoring_detail_page(props: &MonitoringDetailPageProps) -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context missing");
    let navigator = use_navigator().expect("navigator missing");

    let record = use_state(|| None::<MonitoringDetails>);
    let load_failed = use_state(|| None::<String>);
    let retry_tick = use_state(|| 0u32);
    let form = use_state(MonitoringForm::new);
    // None = not fetched yet; fetched results are cached per mode.
    let recent_videos = use_state(|| None::<Vec<VideoCandidate>>);
    let playlists = use_state(|| None::<Vec<PlaylistCandidate>>);
    let video_url = use_state(String::new);
    let saving = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);

    // Load the record; on failure stay in a failed state with a manual
    // retry affordance.
    {
        let client = client.clone();
        let record = record.clone();
        let load_failed = load_failed.clone();
        let form = form.clone();
        let recent_videos = recent_videos.clone();
        let playlists = playlists.clone();

        use_effect_with((props.id, *retry_tick), move |&(id, _)| {
            record.set(None);
            load_failed.set(None);
            recent_videos.set(None);
            playlists.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match get_monitoring(&client, id).await {
                    Ok(details) => {
                        form.set(MonitoringForm::from_record(&details));
                        record.set(Some(details));
                    }
                    Err(e) => {
                        load_failed.set(Some(format!("Failed to load monitoring: {}", e)));
                    }
                }
            });
            || ()
        });
    }

    // Secondary data follows the mode: recent videos for one-shot,
    // playlists for continuous. Each is fetched at most once per visit.
    {
        let client = client.clone();
        let recent_videos = recent_videos.clone();
        let playlists = playlists.clone();
        let error_message = error_message.clone();

        let channel = (*record).as_ref().map(|r| r.channel_id);
        let continuous = form.is_continuous();
        let videos_cached = (*recent_videos).is_some();
        let playlists_cached = (*playlists).is_some();

        use_effect_with(
            (channel, continuous, videos_cached, playlists_cached),
            move |&(channel, continuous, videos_cached, playlists_cached)| {
                if let Some(channel_id) = channel {
                    if continuous && !playlists_cached {
                        wasm_bindgen_futures::spawn_local(async move {
                            match get_channel_playlists(&client, channel_id).await {
                                Ok(list) => playlists.set(Some(list)),
                                Err(e) => {
                                    error_message
                                        .set(Some(format!("Failed to load playlists: {}", e)));
                                }
                            }
                        });
                    } else if !continuous && !videos_cached {
                        wasm_bindgen_futures::spawn_local(async move {
                            match get_channel_videos(&client, channel_id).await {
                                Ok(list) => recent_videos.set(Some(list)),
                                Err(e) => {
                                    error_message
                                        .set(Some(format!("Failed to load recent videos: {}", e)));
                                }
                            }
                        });
                    }
                }
                || ()
            },
        );
    }

    let on_retry = {
        let retry_tick = retry_tick.clone();
        Callback::from(move |_| retry_tick.set(*retry_tick + 1))
    };

    let on_mode_toggle = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_mode(input.checked());
            form.set(next);
        })
    };

    let on_interval_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_interval(select.value().parse::<i64>().ok());
            form.set(next);
        })
    };

    let on_toggle_video = {
        let form = form.clone();
        Callback::from(move |video: VideoCandidate| {
            let mut next = (*form).clone();
            next.toggle_video(&video);
            form.set(next);
        })
    };

    let on_remove_video = {
        let form = form.clone();
        Callback::from(move |video_id: String| {
            let mut next = (*form).clone();
            next.remove_video(&video_id);
            form.set(next);
        })
    };

    let on_toggle_playlist = {
        let form = form.clone();
        Callback::from(move |playlist_id: String| {
            let mut next = (*form).clone();
            next.toggle_playlist(&playlist_id);
            form.set(next);
        })
    };

    let on_video_url_input = {
        let video_url = video_url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            video_url.set(input.value());
        })
    };

    let on_add_by_url = {
        let client = client.clone();
        let record = record.clone();
        let form = form.clone();
        let video_url = video_url.clone();
        let error_message = error_message.clone();

        Callback::from(move |_| {
            let url = (*video_url).clone();
            let Some(channel_id) = (*record).as_ref().map(|r| r.channel_id) else {
                return;
            };
            if url.is_empty() {
                return;
            }

            let client = client.clone();
            let form = form.clone();
            let video_url = video_url.clone();
            let error_message = error_message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match validate_video_url(&client, channel_id, &url).await {
                    Ok(candidate) => {
                        let mut next = (*form).clone();
                        next.add_video(candidate);
                        form.set(next);
                        video_url.set(String::new());
                        error_message.set(None);
                    }
                    Err(_) => {
                        // Selection stays untouched on a rejected URL.
                        error_message.set(Some(
                            "Invalid video URL or the video does not belong to this channel"
                                .to_string(),
                        ));
                    }
                }
            });
        })
    };

    let on_save = {
        let client = client.clone();
        let record = record.clone();
        let form = form.clone();
        let saving = saving.clone();
        let error_message = error_message.clone();
        let notice = notice.clone();

        Callback::from(move |_| {
            let Some(id) = (*record).as_ref().map(|r| r.id) else {
                return;
            };

            // Local validation first; nothing is sent when it fails.
            let payload = match form.build_update() {
                Ok(payload) => payload,
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };

            let client = client.clone();
            let record = record.clone();
            let form = form.clone();
            let saving = saving.clone();
            let error_message = error_message.clone();
            let notice = notice.clone();

            saving.set(true);
            error_message.set(None);
            notice.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match update_monitoring(&client, id, &payload).await {
                    Ok(updated) => {
                        form.set(MonitoringForm::from_record(&updated));
                        record.set(Some(updated));
                        notice.set(Some("Monitoring configuration saved".to_string()));
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to update monitoring: {}", e)));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_toggle_status = {
        let client = client.clone();
        let record = record.clone();
        let error_message = error_message.clone();

        Callback::from(move |_| {
            let Some(current) = (*record).as_ref().map(|r| (r.id, r.status)) else {
                return;
            };
            let Some(payload) = toggle_target(current.1) else {
                return;
            };

            let client = client.clone();
            let record = record.clone();
            let error_message = error_message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match update_monitoring_status(&client, current.0, &payload).await {
                    Ok(updated) => {
                        record.set(Some(updated));
                    }
                    Err(e) => {
                        error_message
                            .set(Some(format!("Failed to change monitoring status: {}", e)));
                    }
                }
            });
        })
    };

    let on_delete = {
        let client = client.clone();
        let navigator = navigator.clone();
        let record = record.clone();
        let error_message = error_message.clone();

        Callback::from(move |_| {
            let Some(id) = (*record).as_ref().map(|r| r.id) else {
                return;
            };
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Delete this monitoring? This cannot be undone.")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let client = client.clone();
            let navigator = navigator.clone();
            let error_message = error_message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match delete_monitoring(&client, id).await {
                    Ok(_) => {
                        navigator.push(&Route::Monitorings);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to delete monitoring: {}", e)));
                    }
                }
            });
        })
    };

    html! {
        <DashboardLayout title="Monitoring Details">
            <div class="mb-4">
                <Link<Route> to={Route::Monitorings} classes="text-blue-600 hover:underline">
                    {"← Back to Monitoring"}
                </Link<Route>>
            </div>

            <ErrorMessage error_message={(*error_message).clone()} />
            <NoticeMessage notice={(*notice).clone()} />

            {
                if let Some(msg) = &*load_failed {
                    html! {
                        <div class="text-center py-8">
                            <p class="text-red-600 mb-4">{ msg }</p>
                            <button
                                onclick={on_retry}
                                class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                            >
                                {"Retry"}
                            </button>
                        </div>
                    }
                } else if let Some(details) = &*record {
                    html! {
                        <div class="space-y-6">
                            <div class="border rounded-lg p-6">
                                <h2 class="text-xl font-semibold text-gray-800 mb-4">
                                    {"Configuration"}
                                </h2>

                                <div class="flex items-center justify-between mb-4">
                                    <div>
                                        <h3 class="font-medium text-gray-800">{"Continuous monitoring"}</h3>
                                        <p class="text-sm text-gray-500">
                                            {"Re-check the channel on an interval instead of a fixed video list"}
                                        </p>
                                    </div>
                                    <input
                                        type="checkbox"
                                        class="h-5 w-5"
                                        checked={form.is_continuous()}
                                        onchange={on_mode_toggle}
                                    />
                                </div>

                                {
                                    if form.is_continuous() {
                                        html! {
                                            <div>
                                                <div class="mb-4">
                                                    <label class="block text-gray-700 text-sm font-bold mb-2">
                                                        {"Check interval"}
                                                    </label>
                                                    <select
                                                        class="w-full px-4 py-2 border rounded bg-white"
                                                        onchange={on_interval_change}
                                                    >
                                                        <option value="" selected={form.interval_time.is_none()}>
                                                            {"Select an interval"}
                                                        </option>
                                                        {
                                                            INTERVAL_OPTIONS.iter().map(|(minutes, label)| {
                                                                html! {
                                                                    <option
                                                                        value={minutes.to_string()}
                                                                        selected={form.interval_time == Some(*minutes)}
                                                                    >
                                                                        { *label }
                                                                    </option>
                                                                }
                                                            }).collect::<Html>()
                                                        }
                                                    </select>
                                                </div>

                                                <h3 class="font-medium text-gray-800 mb-2">{"Playlists"}</h3>
                                                {
                                                    match &*playlists {
                                                        None => html! {
                                                            <p class="text-gray-600">{"Loading playlists..."}</p>
                                                        },
                                                        Some(list) if list.is_empty() => html! {
                                                            <p class="text-gray-600">
                                                                {"No playlists found; the whole channel will be monitored."}
                                                            </p>
                                                        },
                                                        Some(list) => html! {
                                                            <div class="space-y-2">
                                                                {
                                                                    list.iter().map(|playlist| {
                                                                        let playlist_id = playlist.playlist_id.clone();
                                                                        let on_toggle = on_toggle_playlist.clone();

                                                                        html! {
                                                                            <label class="flex items-center gap-3 border rounded p-3 cursor-pointer hover:bg-gray-50">
                                                                                <input
                                                                                    type="checkbox"
                                                                                    class="h-4 w-4"
                                                                                    checked={form.has_playlist(&playlist.playlist_id)}
                                                                                    onchange={Callback::from(move |_| on_toggle.emit(playlist_id.clone()))}
                                                                                />
                                                                                {
                                                                                    if let Some(thumbnail) = &playlist.thumbnail_url {
                                                                                        html! {
                                                                                            <div
                                                                                                class="w-16 h-10 bg-cover bg-center rounded"
                                                                                                style={format!("background-image: url({})", thumbnail)}
                                                                                            />
                                                                                        }
                                                                                    } else {
                                                                                        html! {}
                                                                                    }
                                                                                }
                                                                                <div>
                                                                                    <p class="text-sm font-medium text-gray-800">{&playlist.title}</p>
                                                                                    {
                                                                                        if let Some(description) = &playlist.description {
                                                                                            html! {
                                                                                                <p class="text-xs text-gray-500">{ description }</p>
                                                                                            }
                                                                                        } else {
                                                                                            html! {}
                                                                                        }
                                                                                    }
                                                                                    <p class="text-xs text-gray-500">
                                                                                        { format!("{} videos", playlist.video_count) }
                                                                                    </p>
                                                                                </div>
                                                                            </label>
                                                                        }
                                                                    }).collect::<Html>()
                                                                }
                                                            </div>
                                                        },
                                                    }
                                                }
                                            </div>
                                        }
                                    } else {
                                        html! {
                                            <div>
                                                <h3 class="font-medium text-gray-800 mb-2">{"Recent videos"}</h3>
                                                {
                                                    match &*recent_videos {
                                                        None => html! {
                                                            <p class="text-gray-600">{"Loading recent videos..."}</p>
                                                        },
                                                        Some(list) if list.is_empty() => html! {
                                                            <p class="text-gray-600">{"No recent videos found."}</p>
                                                        },
                                                        Some(list) => html! {
                                                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-4">
                                                                {
                                                                    list.iter().map(|video| {
                                                                        let selected = form.has_video(&video.video_id);
                                                                        let thumbnail = video
                                                                            .thumbnail_url
                                                                            .clone()
                                                                            .unwrap_or_else(|| video_thumbnail_url(&video.video_id));
                                                                        let on_toggle = on_toggle_video.clone();
                                                                        let video = video.clone();
                                                                        let video_for_toggle = video.clone();

                                                                        html! {
                                                                            <div
                                                                                onclick={Callback::from(move |_| on_toggle.emit(video_for_toggle.clone()))}
                                                                                class={if selected {
                                                                                    "border-2 border-blue-600 rounded-lg overflow-hidden cursor-pointer"
                                                                                } else {
                                                                                    "border rounded-lg overflow-hidden cursor-pointer hover:shadow"
                                                                                }}
                                                                            >
                                                                                <div
                                                                                    class="h-32 w-full bg-cover bg-center"
                                                                                    style={format!("background-image: url({})", thumbnail)}
                                                                                />
                                                                                <div class="p-3">
                                                                                    <p class="text-sm font-medium text-gray-800">{&video.title}</p>
                                                                                    <p class="text-xs text-gray-500">
                                                                                        { format_time_since(&video.published_at) }
                                                                                    </p>
                                                                                </div>
                                                                            </div>
                                                                        }
                                                                    }).collect::<Html>()
                                                                }
                                                            </div>
                                                        },
                                                    }
                                                }

                                                <h3 class="font-medium text-gray-800 mb-2">{"Add video by URL"}</h3>
                                                <div class="flex gap-2 mb-4">
                                                    <input
                                                        type="text"
                                                        class="flex-grow px-4 py-2 border rounded"
                                                        placeholder="Paste the video URL here"
                                                        value={(*video_url).clone()}
                                                        oninput={on_video_url_input}
                                                    />
                                                    <button
                                                        onclick={on_add_by_url}
                                                        class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                                                    >
                                                        {"Add"}
                                                    </button>
                                                </div>

                                                {
                                                    if !form.selected_videos().is_empty() {
                                                        html! {
                                                            <div>
                                                                <h3 class="font-medium text-gray-800 mb-2">{"Selected videos"}</h3>
                                                                <div class="space-y-2">
                                                                    {
                                                                        form.selected_videos().iter().map(|video| {
                                                                            let video_id = video.video_id.clone();
                                                                            let thumbnail = video
                                                                                .thumbnail_url
                                                                                .clone()
                                                                                .unwrap_or_else(|| video_thumbnail_url(&video.video_id));
                                                                            let on_remove = on_remove_video.clone();

                                                                            html! {
                                                                                <div class="flex items-center justify-between border rounded p-3">
                                                                                    <div class="flex items-center gap-4">
                                                                                        <div
                                                                                            class="w-24 h-16 bg-cover bg-center rounded"
                                                                                            style={format!("background-image: url({})", thumbnail)}
                                                                                        />
                                                                                        <div>
                                                                                            <p class="font-medium text-gray-800">{&video.title}</p>
                                                                                            <p class="text-sm text-gray-500">
                                                                                                { format_time_since(&video.published_at) }
                                                                                            </p>
                                                                                        </div>
                                                                                    </div>
                                                                                    <button
                                                                                        onclick={Callback::from(move |_| on_remove.emit(video_id.clone()))}
                                                                                        class="text-red-600 hover:text-red-900"
                                                                                    >
                                                                                        {"Remove"}
                                                                                    </button>
                                                                                </div>
                                                                            }
                                                                        }).collect::<Html>()
                                                                    }
                                                                </div>
                                                            </div>
                                                        }
                                                    } else {
                                                        html! {}
                                                    }
                                                }
                                            </div>
                                        }
                                    }
                                }

                                <button
                                    onclick={on_save}
                                    disabled={*saving}
                                    class="w-full mt-6 px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                                >
                                    {if *saving { "Saving..." } else { "Save Configuration" }}
                                </button>
                            </div>

                            <div class="border rounded-lg p-6">
                                <h2 class="text-xl font-semibold text-gray-800 mb-4">
                                    {"Status"}
                                </h2>

                                <div class="flex justify-between items-center mb-4">
                                    <div class="flex items-center gap-3">
                                        {
                                            if let Some(avatar) = &details.channel_avatar {
                                                html! {
                                                    <img
                                                        src={avatar.clone()}
                                                        alt={details.channel_name.clone()}
                                                        class="h-10 w-10 rounded-full"
                                                    />
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <div>
                                            <h3 class="font-medium text-gray-800">{&details.name}</h3>
                                            <p class="text-sm text-gray-500">
                                                { format!("Channel: {}", details.channel_name) }
                                            </p>
                                        </div>
                                    </div>
                                    <StatusBadge status={details.status} />
                                </div>

                                <div class="mb-4">
                                    <ProgressBar
                                        processed={details.processed_videos}
                                        total={details.total_videos}
                                    />
                                </div>

                                <p class="text-sm text-gray-500 mb-4">
                                    { format!("Created {}", format_iso8601_date(&details.created_at)) }
                                    {" · "}
                                    {
                                        match &details.last_check_at {
                                            Some(checked) => format!("Last checked {}", format_time_since(checked)),
                                            None => "Never checked".to_string(),
                                        }
                                    }
                                    {
                                        if details.is_continuous {
                                            match details.interval_time {
                                                Some(minutes) => format!(" · every {}", interval_label(minutes)),
                                                None => String::new(),
                                            }
                                        } else {
                                            String::new()
                                        }
                                    }
                                </p>

                                {
                                    if !details.videos.is_empty() {
                                        html! {
                                            <div class="mb-4">
                                                <h3 class="font-medium text-gray-800 mb-2">{"Tracked videos"}</h3>
                                                <div class="space-y-1">
                                                    {
                                                        details.videos.iter().map(|entry| {
                                                            html! {
                                                                <div
                                                                    key={entry.id.to_string()}
                                                                    class="flex items-center justify-between text-sm border rounded px-3 py-2"
                                                                >
                                                                    <span class="text-gray-700">
                                                                        { format!("Video #{}", entry.video_id) }
                                                                    </span>
                                                                    <div class="flex items-center gap-2">
                                                                        {
                                                                            if let Some(error) = &entry.error_message {
                                                                                html! {
                                                                                    <span class="text-xs text-red-600">{ error }</span>
                                                                                }
                                                                            } else if let Some(processed_at) = &entry.processed_at {
                                                                                html! {
                                                                                    <span class="text-xs text-gray-500">
                                                                                        { format!("processed {}", format_time_since(processed_at)) }
                                                                                    </span>
                                                                                }
                                                                            } else {
                                                                                html! {}
                                                                            }
                                                                        }
                                                                        <span class={format!(
                                                                            "px-2 py-1 rounded text-xs font-semibold {}",
                                                                            entry.status.badge_class()
                                                                        )}>
                                                                            { entry.status.label() }
                                                                        </span>
                                                                    </div>
                                                                </div>
                                                            }
                                                        }).collect::<Html>()
                                                    }
                                                </div>
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }

                                <div class="flex gap-2">
                                    {
                                        if toggle_target(details.status).is_some() {
                                            html! {
                                                <button
                                                    onclick={on_toggle_status}
                                                    class={if details.status == MonitoringStatus::Active {
                                                        "px-4 py-2 bg-yellow-600 text-white rounded hover:bg-yellow-700"
                                                    } else {
                                                        "px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700"
                                                    }}
                                                >
                                                    {
                                                        if details.status == MonitoringStatus::Active {
                                                            "Pause"
                                                        } else {
                                                            "Resume"
                                                        }
                                                    }
                                                </button>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <button
                                        onclick={on_delete}
                                        class="px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700"
                                    >
                                        {"Delete"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-8">
                            <p class="text-gray-600">{"Loading monitoring..."}</p>
                        </div>
                    }
                }
            }
        </DashboardLayout>
    }
}
