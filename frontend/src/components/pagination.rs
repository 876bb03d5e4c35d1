use leptos::*;

/// Page buttons plus the "Showing X to Y of N entries" line. `page` is
/// 1-based.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] page_count: Signal<usize>,
    on_select: Callback<usize>,
    #[prop(into)] summary: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col sm:flex-row items-center justify-between gap-2 mt-4">
            <p class="text-sm text-gray-600">{move || summary.get()}</p>
            <nav class="flex gap-1" aria-label="Pagination">
                {move || {
                    (1..=page_count.get())
                        .map(|number| {
                            let active = move || page.get() == number;
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if active() {
                                            "px-3 py-1 rounded border text-sm bg-blue-600 text-white"
                                        } else {
                                            "px-3 py-1 rounded border text-sm"
                                        }
                                    }
                                    aria-current=move || active().then_some("page")
                                    on:click=move |_| on_select.call(number)
                                >
                                    {number}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_one_button_per_page_and_summary() {
        let html = render_to_string(move || {
            view! {
                <Pagination
                    page=Signal::derive(|| 2usize)
                    on_select=Callback::new(|_| {})
                    page_count=Signal::derive(|| 3usize)
                    summary=Signal::derive(|| "Showing 11 to 20 of 25 entries".to_string())
                />
            }
        });
        assert_eq!(html.matches("<button").count(), 3);
        assert!(html.contains("Showing 11 to 20 of 25 entries"));
        assert!(html.contains("aria-current=\"page\""));
    }
}
