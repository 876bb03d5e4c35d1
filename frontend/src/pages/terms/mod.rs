use leptos::*;

use crate::{
    api::EmployeeCategory,
    components::common::{Button, ButtonVariant},
    utils::navigation::go_to,
};

pub const TERMS: [&str; 4] = [
    "Tombol Check-in dan Check-out hanya bisa diklik ketika Karyawan berada di lingkungan Kantor.",
    "Check In paling lambat jam 07:05 pagi, checkout diantara jam 14.00 sd 15.00.",
    "Bila Karyawan telat Check-in atau terlalu cepat checkout, maka akan dikenakan potongan dari gaji setiap menitnya.",
    "Pastikan Lokasi HP dinyalakan sebelum Check-in dan Check-out.",
];

/// Acknowledgement gate shown between employee login and the attendance screen.
#[component]
pub fn TermsPage(category: EmployeeCategory) -> impl IntoView {
    let agreed = create_rw_signal(false);
    let on_continue = Callback::new(move |_| {
        if agreed.get_untracked() {
            go_to(&category.attendance_route());
        }
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 p-4">
            <div class="w-full max-w-xl p-8 bg-red-600 rounded-lg shadow text-white space-y-6">
                <h2 class="text-3xl font-bold text-center">"Syarat dan Ketentuan"</h2>
                <ol class="space-y-2">
                    {TERMS
                        .iter()
                        .enumerate()
                        .map(|(idx, rule)| {
                            view! {
                                <li>
                                    <b>{format!("{}.", idx + 1)}</b>
                                    " "
                                    {*rule}
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                <label class="flex items-center gap-2">
                    <input
                        type="checkbox"
                        prop:checked=move || agreed.get()
                        on:change=move |ev| agreed.set(event_target_checked(&ev))
                    />
                    "Saya telah membaca & memahami ketentuan diatas"
                </label>
                <Button
                    variant=ButtonVariant::Secondary
                    class="w-full"
                    disabled=Signal::derive(move || !agreed.get())
                    on_click=on_continue
                >
                    "Lanjutkan"
                </Button>
            </div>
        </div>
    }
}
