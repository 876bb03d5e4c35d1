use leptos::*;

use crate::utils::time::now_in_app_tz;

/// Live clock in the application time zone, ticking once per second.
#[component]
pub fn LiveClock() -> impl IntoView {
    let (time, set_time) = create_signal(now_in_app_tz());

    #[cfg(target_arch = "wasm32")]
    {
        let interval = gloo_timers::callback::Interval::new(1000, move || {
            set_time.set(now_in_app_tz());
        });
        on_cleanup(move || drop(interval.cancel()));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_time;

    let date_str = move || crate::utils::format::format_long_id_date(time.get().date_naive());
    let time_str = move || time.get().format("%H:%M:%S").to_string();

    view! {
        <div class="text-center py-4 space-y-1">
            <div class="text-sm text-gray-600">{date_str}</div>
            <div class="text-4xl font-bold font-mono tracking-wider" data-testid="live-clock">{time_str}</div>
        </div>
    }
}
