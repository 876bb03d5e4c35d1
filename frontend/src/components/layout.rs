use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
            <span class="sr-only">"Memuat..."</span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Error banner bound to a screen's single error slot.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|message| view! { <ErrorMessage message=message /> })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="gagal" />
                </div>
            }
        });
        assert!(html.contains("Memuat..."));
        assert!(html.contains("gagal"));
    }

    #[test]
    fn error_banner_only_renders_when_set() {
        let empty = render_to_string(move || {
            view! { <ErrorBanner message=Signal::derive(|| None::<String>) /> }
        });
        assert!(!empty.contains("role=\"alert\""));

        let html = render_to_string(move || {
            view! { <ErrorBanner message=Signal::derive(|| Some("Failed to load holidays.".to_string())) /> }
        });
        assert!(html.contains("Failed to load holidays."));
    }
}
