use leptos::*;

use super::utils::EmployeeDraft;
use crate::{
    api::{Collection, Employee, EmployeeCategory},
    components::layout::ErrorBanner,
    pages::crud::{use_crud_view_model, CrudTable, CrudViewModel, FormActions, RowActions},
    utils::format::format_rupiah,
};

/// Both employee categories on one screen. Each section owns its own
/// view model, so drafts and edit targets never leak between them.
#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <div class="space-y-16">
            {EmployeeCategory::ALL
                .into_iter()
                .map(|category| view! { <EmployeeSection category=category /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn EmployeeSection(category: EmployeeCategory) -> impl IntoView {
    let vm: CrudViewModel<Employee> = use_crud_view_model(Collection::Employees(category));
    let title = match category {
        EmployeeCategory::Regular => "Pengaturan Karyawan",
        EmployeeCategory::Khusus => "Pengaturan Karyawan Khusus",
    };

    view! {
        <section class="bg-white p-6 rounded-lg shadow space-y-6" data-category=format!("{:?}", category).to_lowercase()>
            <h2 class="text-2xl font-bold">{title}</h2>
            <EmployeeForm vm=vm />
            <ErrorBanner message=vm.error />
            <CrudTable
                vm=vm
                headers=&["Nama", "Username", "Gaji Bulanan", "Pilihan"]
                search_placeholder="Cari nama karyawan..."
                empty_title="Belum ada data karyawan"
                row=move |employee: Employee| {
                    let salary = format_rupiah(employee.monthly_salary);
                    view! {
                        <tr class="border-t">
                            <td class="px-4 py-2">{employee.name.clone()}</td>
                            <td class="px-4 py-2">{employee.username.clone()}</td>
                            <td class="px-4 py-2">{salary}</td>
                            <RowActions vm=vm record=employee />
                        </tr>
                    }
                }
            />
        </section>
    }
}

#[component]
fn EmployeeForm(vm: CrudViewModel<Employee>) -> impl IntoView {
    let field = move |read: fn(&EmployeeDraft) -> String| {
        move || vm.form.with(|f| read(f.active()))
    };
    let is_update = move || vm.mode() == crate::pages::crud::FormMode::Update;

    view! {
        <form
            class="space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <input
                    type="text"
                    class="border rounded px-3 py-2"
                    placeholder="Nama"
                    prop:value=field(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.edit(|d| d.name = value);
                    }
                />
                <input
                    type="text"
                    class="border rounded px-3 py-2"
                    placeholder="Username"
                    prop:value=field(|d| d.username.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.edit(|d| d.username = value);
                    }
                />
                <input
                    type="password"
                    class="border rounded px-3 py-2"
                    placeholder=move || {
                        if is_update() { "Password (kosongkan jika tidak diubah)" } else { "Password" }
                    }
                    prop:value=field(|d| d.password.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.edit(|d| d.password = value);
                    }
                />
                <input
                    type="number"
                    min="0"
                    class="border rounded px-3 py-2"
                    placeholder="Gaji Bulanan"
                    prop:value=field(|d| d.monthly_salary.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.edit(|d| d.monthly_salary = value);
                    }
                />
            </div>
            <FormActions vm=vm noun="Karyawan" />
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_independent_sections_per_category() {
        let html = render_to_string(move || view! { <EmployeesPage /> });
        assert!(html.contains("Pengaturan Karyawan"));
        assert!(html.contains("Pengaturan Karyawan Khusus"));
        assert!(html.contains("data-category=\"regular\""));
        assert!(html.contains("data-category=\"khusus\""));
        assert_eq!(html.matches("Tambah Karyawan").count(), 2);
    }
}
