pub mod api;
pub mod components;
pub mod create;
pub mod detail;
pub mod form;
pub mod list;
pub mod models;

use self::create::CreateMonitoringDialog;
use self::list::MonitoringList;
use crate::components::DashboardLayout;
use yew::prelude::*;

#[function_component(MonitoringsPage)]
pub fn monitorings_page() -> Html {
    let show_create = use_state(|| false);
    let reload_tick = use_state(|| 0u32);

    let on_open_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(true))
    };

    let on_close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };

    let on_created = {
        let reload_tick = reload_tick.clone();
        Callback::from(move |_| reload_tick.set(*reload_tick + 1))
    };

    html! {
        <DashboardLayout title="Video Monitoring">
            <div class="flex justify-end mb-4">
                <button
                    onclick={on_open_create}
                    class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                >
                    {"Add Monitoring"}
                </button>
            </div>

            <MonitoringList reload={*reload_tick} />

            <CreateMonitoringDialog
                open={*show_create}
                on_close={on_close_create}
                on_created={on_created}
            />
        </DashboardLayout>
    }
}
