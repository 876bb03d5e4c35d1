use leptos::*;

use crate::utils::{format::month_name_id, time::year_options};

#[component]
pub fn MonthYearPicker(month: RwSignal<u32>, year: RwSignal<i32>, current_year: i32) -> impl IntoView {
    view! {
        <div class="flex gap-2">
            <select
                class="border rounded px-2 py-1"
                aria-label="Bulan"
                on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                        month.set(value);
                    }
                }
            >
                {(1..=12u32)
                    .map(|m| {
                        view! {
                            <option value=m.to_string() selected=move || month.get() == m>
                                {month_name_id(m)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <select
                class="border rounded px-2 py-1"
                aria-label="Tahun"
                on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                        year.set(value);
                    }
                }
            >
                {year_options(current_year)
                    .into_iter()
                    .map(|y| {
                        view! {
                            <option value=y.to_string() selected=move || year.get() == y>
                                {y}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn picker_lists_months_and_ten_years() {
        let html = render_to_string(move || {
            let month = create_rw_signal(2u32);
            let year = create_rw_signal(2024);
            view! { <MonthYearPicker month=month year=year current_year=2024 /> }
        });
        assert!(html.contains("Februari"));
        assert!(html.contains("Desember"));
        assert!(html.contains("2019"));
        assert!(html.contains("2028"));
        assert!(!html.contains("2029"));
    }
}
