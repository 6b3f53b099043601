use super::api::{delete_monitoring, list_monitorings, update_monitoring_status};
use super::components::{ProgressBar, StatusBadge};
use super::form::toggle_target;
use super::models::{interval_label, Monitoring, MonitoringStatus};
use crate::api::ApiClient;
use crate::router::Route;
use crate::utils::{format_iso8601_date, format_time_since};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonitoringListProps {
    /// Bumped by the parent to force a reload (e.g. after the create
    /// dialog succeeds).
    pub reload: u32,
}

#[function_component(MonitoringList)]
pub fn monitoring_list(props: &MonitoringListProps) -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context missing");
    let navigator = use_navigator().expect("navigator missing");
    let monitorings = use_state(Vec::<Monitoring>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let local_tick = use_state(|| 0u32);

    {
        let client = client.clone();
        let monitorings = monitorings.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with((props.reload, *local_tick), move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match list_monitorings(&client).await {
                    Ok(list) => {
                        monitorings.set(list);
                        error_message.set(None);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to load monitorings: {}", e)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    // Per-row mutation, then a full list reload. No optimistic update.
    let on_toggle_status = {
        let client = client.clone();
        let error_message = error_message.clone();
        let local_tick = local_tick.clone();

        Callback::from(move |(id, status): (i64, MonitoringStatus)| {
            let Some(payload) = toggle_target(status) else {
                return;
            };

            let client = client.clone();
            let error_message = error_message.clone();
            let local_tick = local_tick.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match update_monitoring_status(&client, id, &payload).await {
                    Ok(_) => {
                        local_tick.set(*local_tick + 1);
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
        let error_message = error_message.clone();
        let local_tick = local_tick.clone();

        Callback::from(move |id: i64| {
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
            let error_message = error_message.clone();
            let local_tick = local_tick.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match delete_monitoring(&client, id).await {
                    Ok(_) => {
                        local_tick.set(*local_tick + 1);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to delete monitoring: {}", e)));
                    }
                }
            });
        })
    };

    if *loading {
        return html! {
            <div class="text-center py-8">
                <p class="text-gray-600">{"Loading monitorings..."}</p>
            </div>
        };
    }

    html! {
        <div>
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

            {
                if monitorings.is_empty() {
                    html! {
                        <p class="text-gray-600 text-center py-8">{"No monitorings found."}</p>
                    }
                } else {
                    html! {
                        <div class="overflow-x-auto">
                            <table class="min-w-full bg-white border border-gray-300">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Name"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Mode"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Progress"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Created"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Last Check"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    {
                                        (*monitorings).iter().map(|monitoring| {
                                            let id = monitoring.id;
                                            let status = monitoring.status;

                                            let on_open = {
                                                let navigator = navigator.clone();
                                                Callback::from(move |_| {
                                                    navigator.push(&Route::MonitoringDetail { id });
                                                })
                                            };

                                            html! {
                                                <tr class="hover:bg-gray-50">
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                        <div class="flex items-center gap-3">
                                                            {
                                                                if let Some(avatar) = &monitoring.channel_avatar {
                                                                    html! {
                                                                        <img
                                                                            src={avatar.clone()}
                                                                            alt={monitoring.channel_name.clone()}
                                                                            class="h-10 w-10 rounded-full"
                                                                        />
                                                                    }
                                                                } else {
                                                                    html! {}
                                                                }
                                                            }
                                                            <div>
                                                                <button
                                                                    onclick={on_open}
                                                                    class="font-medium text-blue-600 hover:underline"
                                                                >
                                                                    {&monitoring.name}
                                                                </button>
                                                                <p class="text-xs text-gray-500">{&monitoring.channel_name}</p>
                                                            </div>
                                                        </div>
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                        {
                                                            if monitoring.is_continuous {
                                                                match monitoring.interval_time {
                                                                    Some(minutes) => {
                                                                        format!("Continuous · every {}", interval_label(minutes))
                                                                    }
                                                                    None => "Continuous".to_string(),
                                                                }
                                                            } else {
                                                                "One-shot".to_string()
                                                            }
                                                        }
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 min-w-[200px]">
                                                        <ProgressBar
                                                            processed={monitoring.processed_videos}
                                                            total={monitoring.total_videos}
                                                        />
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                        <StatusBadge status={monitoring.status} />
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                        { format_iso8601_date(&monitoring.created_at) }
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                        {
                                                            match &monitoring.last_check_at {
                                                                Some(checked) => format_time_since(checked),
                                                                None => "Never checked".to_string(),
                                                            }
                                                        }
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                                                        <div class="flex gap-2">
                                                            {
                                                                if toggle_target(status).is_some() {
                                                                    let on_toggle = on_toggle_status.clone();
                                                                    html! {
                                                                        <button
                                                                            onclick={Callback::from(move |_| on_toggle.emit((id, status)))}
                                                                            class="text-blue-600 hover:text-blue-900"
                                                                        >
                                                                            {
                                                                                if status == MonitoringStatus::Active {
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
                                                            {
                                                                {
                                                                    let on_delete = on_delete.clone();
                                                                    html! {
                                                                        <button
                                                                            onclick={Callback::from(move |_| on_delete.emit(id))}
                                                                            class="text-red-600 hover:text-red-900"
                                                                        >
                                                                            {"Delete"}
                                                                        </button>
                                                                    }
                                                                }
                                                            }
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect::<Html>()
                                    }
                                </tbody>
                            </table>
                        </div>
                    }
                }
            }
        </div>
    }
}
