use super::form::progress_fraction;
use super::models::MonitoringStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: MonitoringStatus,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={format!(
            "px-2 py-1 rounded text-xs font-semibold {}",
            props.status.badge_class()
        )}>
            { props.status.label() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub processed: i64,
    pub total: i64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let fraction = progress_fraction(props.processed, props.total);

    html! {
        <div>
            <div class="h-2 w-full bg-gray-200 rounded-full overflow-hidden">
                <div
                    class="h-full bg-blue-600"
                    style={format!("width: {}%", fraction * 100.0)}
                />
            </div>
            <p class="mt-1 text-sm text-gray-500">
                { format!("{} of {} videos processed", props.processed, props.total) }
            </p>
        </div>
    }
}
