use leptos::*;

use super::view_model::{use_self_service_view_model, SelfServiceViewModel};
use crate::{
    api::{CheckKind, EmployeeCategory},
    components::{clock::LiveClock, layout::ErrorBanner},
};

#[component]
pub fn SelfServicePage(category: EmployeeCategory) -> impl IntoView {
    let vm = use_self_service_view_model(category);
    view! { <CheckPanel vm=vm /> }
}

#[component]
pub fn CheckPanel(vm: SelfServiceViewModel) -> impl IntoView {
    let state = vm.state;
    let error = vm.error;
    let vm_in = vm.clone();
    let vm_out = vm.clone();
    let busy_in = vm.clone();
    let busy_out = vm.clone();

    view! {
        <div class="max-w-md mx-auto mt-10 p-6 bg-gray-800 rounded-lg shadow-xl text-white">
            <h2 class="text-2xl font-bold mb-2 text-center pb-4 border-b-2">"Absensi GesanG"</h2>
            <p class="text-center text-sm text-gray-300">{vm.category.label()}</p>
            <LiveClock />
            <ErrorBanner message=error />
            <div class="mb-10 flex items-center justify-center gap-4">
                <button
                    class="bg-green-600 hover:bg-green-700 text-white font-bold py-2 px-4 rounded"
                    disabled=move || busy_in.is_busy() || !state.with(|s| s.can_check_in())
                    on:click=move |_| vm_in.check(CheckKind::CheckIn)
                >
                    "Masuk"
                </button>
                {move || {
                    state
                        .with(|s| s.check_in.clone())
                        .map(|time| view! { <span class="text-lg font-semibold text-gray-300">"Jam Masuk : " {time}</span> })
                }}
            </div>
            <div class="mb-10 flex items-center justify-center gap-4">
                <button
                    class="bg-red-600 hover:bg-red-700 text-white font-bold py-2 px-4 rounded"
                    disabled=move || busy_out.is_busy()
                    on:click=move |_| vm_out.check(CheckKind::CheckOut)
                >
                    "Keluar"
                </button>
                {move || {
                    state
                        .with(|s| s.check_out.clone())
                        .map(|time| view! { <span class="text-lg font-semibold text-gray-300">"Jam Keluar : " {time}</span> })
                }}
            </div>
            <p class="mt-4" data-testid="check-summary">{move || state.with(|s| s.summary_line())}</p>
        </div>
    }
}
