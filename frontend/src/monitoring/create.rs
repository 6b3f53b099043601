use super::api::create_monitoring;
use super::models::MonitoringCreate;
use crate::api::ApiClient;
use crate::channels::load_channels;
use crate::models::Channel;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreateMonitoringDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_created: Callback<()>,
}

/// Short-lived create form: loads the channel list when opened, requires a
/// name and a channel, and posts a not-yet-configured record (the detail
/// view does the actual configuration).
#[function_component(CreateMonitoringDialog)]
pub fn create_monitoring_dialog(props: &CreateMonitoringDialogProps) -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context missing");
    let channels = use_state(Vec::<Channel>::new);
    let name = use_state(String::new);
    let selected_channel = use_state(|| None::<i64>);
    let submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    {
        let client = client.clone();
        let channels = channels.clone();
        let error_message = error_message.clone();

        use_effect_with(props.open, move |&open| {
            if open {
                wasm_bindgen_futures::spawn_local(async move {
                    match load_channels(&client).await {
                        Ok(channel_list) => channels.set(channel_list),
                        Err(e) => {
                            error_message.set(Some(format!("Failed to load channels: {}", e)));
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_channel_change = {
        let selected_channel = selected_channel.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected_channel.set(select.value().parse::<i64>().ok());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        let name = name.clone();
        let selected_channel = selected_channel.clone();
        let error_message = error_message.clone();
        Callback::from(move |_| {
            name.set(String::new());
            selected_channel.set(None);
            error_message.set(None);
            on_close.emit(());
        })
    };

    let on_submit = {
        let client = client.clone();
        let name = name.clone();
        let selected_channel = selected_channel.clone();
        let submitting = submitting.clone();
        let error_message = error_message.clone();
        let on_close = props.on_close.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name_value = (*name).clone();
            let Some(channel_id) = *selected_channel else {
                error_message.set(Some("Please choose a name and a channel".to_string()));
                return;
            };
            if name_value.is_empty() {
                error_message.set(Some("Please choose a name and a channel".to_string()));
                return;
            }

            let request = MonitoringCreate {
                name: name_value,
                channel_id,
                is_continuous: false,
            };

            let client = client.clone();
            let name = name.clone();
            let selected_channel = selected_channel.clone();
            let submitting = submitting.clone();
            let error_message = error_message.clone();
            let on_close = on_close.clone();
            let on_created = on_created.clone();

            submitting.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match create_monitoring(&client, &request).await {
                    Ok(_) => {
                        name.set(String::new());
                        selected_channel.set(None);
                        on_created.emit(());
                        on_close.emit(());
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to create monitoring: {}", e)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    if !props.open {
        return html! {};
    }

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4">
            <div class="bg-white rounded-lg shadow-lg p-6 w-full max-w-md">
                <h2 class="text-xl font-semibold text-gray-800 mb-4">
                    {"Create Monitoring"}
                </h2>

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
                            class="w-full px-4 py-2 border rounded"
                            placeholder="A name to identify this monitoring"
                            value={(*name).clone()}
                            oninput={on_name_input}
                            disabled={*submitting}
                        />
                    </div>
                    <div class="mb-6">
                        <label class="block text-gray-700 text-sm font-bold mb-2">
                            {"Channel"}
                        </label>
                        <select
                            class="w-full px-4 py-2 border rounded bg-white"
                            onchange={on_channel_change}
                            disabled={*submitting}
                        >
                            <option value="" selected={selected_channel.is_none()}>
                                {"Select a channel"}
                            </option>
                            {
                                (*channels).iter().map(|channel| {
                                    html! {
                                        <option
                                            value={channel.id.to_string()}
                                            selected={*selected_channel == Some(channel.id)}
                                        >
                                            { &channel.channel_name }
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            onclick={on_cancel}
                            class="px-4 py-2 bg-gray-200 text-gray-800 rounded hover:bg-gray-300"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            disabled={*submitting}
                            class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                        >
                            {if *submitting { "Creating..." } else { "Create Monitoring" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
