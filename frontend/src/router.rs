use crate::api::ApiClient;
use crate::channel_detail::ChannelDetailPage;
use crate::channels::{load_channels, ChannelsPage};
use crate::components::{DashboardLayout, ErrorMessage};
use crate::login::LoginPage;
use crate::monitoring::api::list_monitorings;
use crate::monitoring::detail::MonitoringDetailPage;
use crate::monitoring::models::MonitoringStatus;
use crate::monitoring::MonitoringsPage;
use crate::profile::ProfilePage;
use crate::register::RegisterPage;
use crate::utils::format_number;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/profile")]
    Profile,
    #[at("/dashboard/channels")]
    Channels,
    #[at("/dashboard/channels/:id")]
    ChannelDetail { id: i64 },
    #[at("/dashboard/monitoring")]
    Monitorings,
    #[at("/dashboard/monitoring/:id")]
    MonitoringDetail { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Channels => html! { <ChannelsPage /> },
        Route::ChannelDetail { id } => html! { <ChannelDetailPage {id} /> },
        Route::Monitorings => html! { <MonitoringsPage /> },
        Route::MonitoringDetail { id } => html! { <MonitoringDetailPage {id} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Dashboard} classes="text-blue-600 hover:underline">
                        {"Go back to the dashboard"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context missing");
    let channel_count = use_state(|| None::<usize>);
    let monitoring_counts = use_state(|| None::<(usize, usize)>); // (total, active)
    let error_message = use_state(|| None::<String>);

    {
        let client = client.clone();
        let channel_count = channel_count.clone();
        let monitoring_counts = monitoring_counts.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match load_channels(&client).await {
                    Ok(channels) => channel_count.set(Some(channels.len())),
                    Err(e) => error_message.set(Some(format!("Failed to load channels: {}", e))),
                }

                match list_monitorings(&client).await {
                    Ok(monitorings) => {
                        let active = monitorings
                            .iter()
                            .filter(|m| m.status == MonitoringStatus::Active)
                            .count();
                        monitoring_counts.set(Some((monitorings.len(), active)));
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to load monitorings: {}", e)))
                    }
                }
            });
            || ()
        });
    }

    html! {
        <DashboardLayout title="Overview">
            <ErrorMessage error_message={(*error_message).clone()} />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
                <Link<Route> to={Route::Channels} classes="bg-blue-600 text-white p-4 rounded text-center hover:bg-blue-700">
                    <div class="font-semibold text-lg mb-2">{"YouTube Channels"}</div>
                    <div class="text-3xl font-bold">
                        {
                            match *channel_count {
                                Some(count) => format_number(count as i64),
                                None => "-".to_string(),
                            }
                        }
                    </div>
                    <div class="text-sm opacity-80">{"Registered Channels"}</div>
                </Link<Route>>
                <Link<Route> to={Route::Monitorings} classes="bg-orange-600 text-white p-4 rounded text-center hover:bg-orange-700">
                    <div class="font-semibold text-lg mb-2">{"Monitoring"}</div>
                    <div class="text-3xl font-bold">
                        {
                            match *monitoring_counts {
                                Some((total, active)) => format!("{} / {}", active, total),
                                None => "-".to_string(),
                            }
                        }
                    </div>
                    <div class="text-sm opacity-80">{"Active / Total Monitorings"}</div>
                </Link<Route>>
                <Link<Route> to={Route::Profile} classes="bg-purple-600 text-white p-4 rounded text-center hover:bg-purple-700">
                    <div class="font-semibold text-lg mb-2">{"Profile"}</div>
                    <div class="text-3xl font-bold">{"Me"}</div>
                    <div class="text-sm opacity-80">{"Account Settings"}</div>
                </Link<Route>>
            </div>
        </DashboardLayout>
    }
}
