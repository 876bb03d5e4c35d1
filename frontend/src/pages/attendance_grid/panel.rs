use chrono::{Datelike, NaiveDate};
use leptos::*;

use super::{
    utils::{cell_time, find_record, TimeField},
    view_model::{use_attendance_grid_view_model, AttendanceGridViewModel},
};
use crate::{
    api::{EmployeeCategory, RecordId},
    components::{
        layout::{ErrorBanner, LoadingSpinner},
        month_picker::MonthYearPicker,
    },
};

#[component]
pub fn AttendanceGridPage(category: EmployeeCategory) -> impl IntoView {
    let vm = use_attendance_grid_view_model(category);

    view! {
        <section class="bg-white p-6 rounded-lg shadow space-y-4" data-category=format!("{:?}", category).to_lowercase()>
            <div class="flex flex-wrap items-end justify-between gap-4">
                <div>
                    <h2 class="text-2xl font-bold">"Absensi Manual"</h2>
                    <small class="text-gray-500">"(Jika Terjadi Masalah Di Server / HP Karyawan)"</small>
                    <p class="text-sm text-gray-600">{category.label()}</p>
                </div>
                <MonthYearPicker month=vm.month year=vm.year current_year=vm.current_year />
            </div>
            <ErrorBanner message=vm.error />
            <Show when=move || vm.upsert_action.pending().get()>
                <LoadingSpinner />
            </Show>
            <AttendanceGrid vm=vm />
        </section>
    }
}

#[component]
pub fn AttendanceGrid(vm: AttendanceGridViewModel) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full text-sm border">
                <thead class="bg-gray-100">
                    <tr>
                        <th class="px-3 py-2 text-left">"Tanggal"</th>
                        {move || {
                            vm.employee_list()
                                .into_iter()
                                .map(|employee| view! { <th class="px-3 py-2 text-left">{employee.name}</th> })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let employees = vm.employee_list();
                        let records = vm.records();
                        vm.days()
                            .into_iter()
                            .map(|date| {
                                let cells = employees
                                    .iter()
                                    .map(|employee| {
                                        let record = find_record(&records, &employee.id, date);
                                        view! {
                                            <td class="px-3 py-1">
                                                <div class="flex gap-1">
                                                    <TimeCell
                                                        vm=vm
                                                        employee_id=employee.id.clone()
                                                        date=date
                                                        field=TimeField::CheckIn
                                                        value=cell_time(record, TimeField::CheckIn)
                                                    />
                                                    <TimeCell
                                                        vm=vm
                                                        employee_id=employee.id.clone()
                                                        date=date
                                                        field=TimeField::CheckOut
                                                        value=cell_time(record, TimeField::CheckOut)
                                                    />
                                                </div>
                                            </td>
                                        }
                                    })
                                    .collect_view();
                                view! {
                                    <tr class="border-t" data-day=date.day().to_string()>
                                        <td class="px-3 py-1 font-medium">{date.day().to_string()}</td>
                                        {cells}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn TimeCell(
    vm: AttendanceGridViewModel,
    employee_id: RecordId,
    date: NaiveDate,
    field: TimeField,
    value: String,
) -> impl IntoView {
    let label = match field {
        TimeField::CheckIn => "Jam Masuk",
        TimeField::CheckOut => "Jam Keluar",
    };
    view! {
        <input
            type="time"
            class="border rounded px-1 py-0.5"
            aria-label=label
            value=value
            on:change=move |ev| {
                let value = event_target_value(&ev);
                vm.update_cell(&employee_id, date, field, &value);
            }
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn rows_for(year: i32, month: u32) -> usize {
        let html = render_to_string(move || {
            let vm = use_attendance_grid_view_model(EmployeeCategory::Khusus);
            vm.year.set(year);
            vm.month.set(month);
            view! { <AttendanceGrid vm=vm /> }
        });
        html.matches("data-day=").count()
    }

    #[test]
    fn grid_has_one_row_per_day_of_month() {
        assert_eq!(rows_for(2024, 2), 29);
        assert_eq!(rows_for(2023, 2), 28);
        assert_eq!(rows_for(2024, 1), 31);
    }

    #[test]
    fn page_shows_title_and_pickers() {
        let html = render_to_string(move || {
            view! { <AttendanceGridPage category=EmployeeCategory::Regular /> }
        });
        assert!(html.contains("Absensi Manual"));
        assert!(html.contains("(Jika Terjadi Masalah Di Server &#x2F; HP Karyawan)"));
        assert!(html.contains("Tanggal"));
        assert!(html.contains("Karyawan Bulanan"));
    }
}
