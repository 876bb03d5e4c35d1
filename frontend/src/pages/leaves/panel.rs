use leptos::*;
use std::rc::Rc;

use super::{repository::LeaveEmployeesRepository, utils::LeaveDraft};
use crate::{
    api::{ApiClient, Collection, Employee, Leave},
    components::layout::ErrorBanner,
    pages::crud::{
        use_crud_view_model, CrudTable, CrudViewModel, FormActions, FormMode, RowActions,
    },
    state::session::use_session,
    utils::format::format_list_date,
};

const EMPLOYEES_LOAD_ERROR: &str = "Failed to load employees. Please try again later.";

#[component]
pub fn LeavesPage() -> impl IntoView {
    let vm: CrudViewModel<Leave> = use_crud_view_model(Collection::Leaves);
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LeaveEmployeesRepository::new_with_client(Rc::new(api), use_session());

    let employees = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_employees().await }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = employees.get() {
            log::error!("loading employees for leave form failed: {}", err);
            vm.error.set(Some(err.user_message(EMPLOYEES_LOAD_ERROR)));
        }
    });
    let employee_options = Signal::derive(move || {
        employees
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });

    view! {
        <section class="bg-white p-6 rounded-lg shadow space-y-6">
            <h1 class="text-3xl font-bold">"Pengaturan Cuti / Izin"</h1>
            <ErrorBanner message=vm.error />
            <LeaveForm vm=vm employees=employee_options />
            <h2 class="text-2xl font-semibold">"List Cuti / Izin"</h2>
            <CrudTable
                vm=vm
                headers=&["Karyawan", "Tanggal", "Alasan", "Pilihan"]
                search_placeholder="Cari cuti/izin..."
                empty_title="Belum ada data cuti / izin"
                row=move |leave: Leave| {
                    view! {
                        <tr class="border-t">
                            <td class="px-4 py-2">{leave.employee_name().to_string()}</td>
                            <td class="px-4 py-2">{format_list_date(leave.date)}</td>
                            <td class="px-4 py-2">{leave.reason.clone()}</td>
                            <RowActions vm=vm record=leave />
                        </tr>
                    }
                }
            />
        </section>
    }
}

#[component]
fn LeaveForm(vm: CrudViewModel<Leave>, employees: Signal<Vec<Employee>>) -> impl IntoView {
    let field = move |read: fn(&LeaveDraft) -> String| move || vm.form.with(|f| read(f.active()));
    let selected_employee = field(|d| d.employee_id.clone());
    let heading = move || {
        if vm.mode() == FormMode::Update {
            "Edit Cuti / Izin"
        } else {
            "Tambah Cuti / Izin"
        }
    };

    view! {
        <form
            class="p-4 bg-gray-50 rounded-lg space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <h2 class="text-xl font-semibold">{heading}</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <label class="block">
                    <span class="block mb-2">"Karyawan"</span>
                    <select
                        class="w-full border rounded p-2"
                        prop:value=selected_employee
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit(|d| d.employee_id = value);
                        }
                    >
                        <option value="">"Pilih Karyawan"</option>
                        {move || {
                            employees
                                .get()
                                .into_iter()
                                .map(|employee| {
                                    let id = employee.id.to_string();
                                    let is_selected = {
                                        let id = id.clone();
                                        move || selected_employee() == id
                                    };
                                    view! {
                                        <option value=id selected=is_selected>{employee.name}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="block">
                    <span class="block mb-2">"Tanggal"</span>
                    <input
                        type="date"
                        class="w-full border rounded p-2"
                        prop:value=field(|d| d.date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit(|d| d.date = value);
                        }
                    />
                </label>
                <label class="block">
                    <span class="block mb-2">"Alasan"</span>
                    <input
                        type="text"
                        class="w-full border rounded p-2"
                        prop:value=field(|d| d.reason.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit(|d| d.reason = value);
                        }
                    />
                </label>
            </div>
            <FormActions vm=vm noun="Cuti / Izin" />
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    #[test]
    fn page_renders_headings_and_search() {
        let html = render_to_string(move || view! { <LeavesPage /> });
        assert!(html.contains("Pengaturan Cuti &#x2F; Izin"));
        assert!(html.contains("Tambah Cuti &#x2F; Izin"));
        assert!(html.contains("Cari cuti/izin..."));
        assert!(html.contains("Pilih Karyawan"));
    }

    #[test]
    fn form_lists_regular_employees() {
        let html = render_to_string(move || {
            let vm: CrudViewModel<Leave> = use_crud_view_model(Collection::Leaves);
            let employees = Signal::derive(|| vec![employee(1, "Budi"), employee(2, "Sari")]);
            view! { <LeaveForm vm=vm employees=employees /> }
        });
        assert!(html.contains("Budi"));
        assert!(html.contains("Sari"));
        assert!(html.contains("value=\"2\""));
    }
}
