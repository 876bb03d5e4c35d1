use leptos::ev::KeyboardEvent;
use leptos::*;

/// Blocking confirmation prompt. Nothing happens until the user picks one of
/// the two buttons; Escape and the backdrop count as cancel.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] cancel_label: Option<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        "rounded px-4 py-2 text-sm font-semibold bg-red-600 text-white hover:bg-red-700 disabled:opacity-50"
    } else {
        "rounded px-4 py-2 text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
    };
    let confirm_label = store_value(confirm_label.unwrap_or_else(|| "Ya".to_string()));
    let cancel_label = store_value(cancel_label.unwrap_or_else(|| "Batal".to_string()));
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_disabled = Signal::derive(move || confirm_disabled.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Tutup"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-50 w-full max-w-md rounded-lg bg-white shadow-xl p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold">{move || title.get()}</h2>
                    <p class="text-sm text-gray-600">{move || message.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded px-4 py-2 text-sm font-semibold bg-gray-200 hover:bg-gray-300"
                            on:click=move |_| on_cancel.call(())
                        >
                            {cancel_label.get_value()}
                        </button>
                        <button
                            type="button"
                            class=confirm_button_class
                            disabled=move || confirm_disabled.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {confirm_label.get_value()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
