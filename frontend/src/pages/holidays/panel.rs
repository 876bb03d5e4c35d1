use leptos::*;

use super::utils::HolidayDraft;
use crate::{
    api::{Collection, Holiday, HolidayType},
    components::layout::ErrorBanner,
    pages::crud::{use_crud_view_model, CrudTable, CrudViewModel, FormActions, RowActions},
    utils::format::format_list_date,
};

#[component]
pub fn HolidaysPage() -> impl IntoView {
    let vm: CrudViewModel<Holiday> = use_crud_view_model(Collection::Holidays);

    view! {
        <section class="bg-white p-6 rounded-lg shadow space-y-6">
            <h2 class="text-2xl font-bold">"Hari Libur"</h2>
            <HolidayForm vm=vm />
            <ErrorBanner message=vm.error />
            <CrudTable
                vm=vm
                headers=&["Tanggal", "Keterangan", "Tipe", "Pilihan"]
                search_placeholder="Cari keterangan..."
                empty_title="Belum ada hari libur"
                row=move |holiday: Holiday| {
                    view! {
                        <tr class="border-t">
                            <td class="px-4 py-2">{format_list_date(holiday.date)}</td>
                            <td class="px-4 py-2">{holiday.description.clone()}</td>
                            <td class="px-4 py-2">{holiday.kind.label()}</td>
                            <RowActions vm=vm record=holiday />
                        </tr>
                    }
                }
            />
        </section>
    }
}

#[component]
fn HolidayForm(vm: CrudViewModel<Holiday>) -> impl IntoView {
    let field = move |read: fn(&HolidayDraft) -> String| move || vm.form.with(|f| read(f.active()));
    let selected_kind = field(|d| d.kind.clone());

    view! {
        <form
            class="grid grid-cols-1 md:grid-cols-4 gap-4 items-start"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <input
                type="date"
                class="border rounded px-3 py-2"
                prop:value=field(|d| d.date.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.edit(|d| d.date = value);
                }
            />
            <input
                type="text"
                class="border rounded px-3 py-2"
                placeholder="Keterangan"
                prop:value=field(|d| d.description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.edit(|d| d.description = value);
                }
            />
            <select
                class="border rounded px-3 py-2"
                prop:value=selected_kind
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    vm.edit(|d| d.kind = value);
                }
            >
                <option value="">"Pilih Tipe"</option>
                {HolidayType::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <option value=kind.as_str() selected=move || selected_kind() == kind.as_str()>
                                {kind.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <div class="md:col-span-4 space-y-2">
                <FormActions vm=vm noun="Hari Libur" />
            </div>
        </form>
    }
}
