use leptos::*;

use super::view_model::{use_report_view_model, ReportViewModel};
use crate::{
    api::{EmployeeCategory, MonthlyReport},
    components::{
        common::{Button, ButtonVariant},
        layout::{ErrorBanner, LoadingSpinner},
        month_picker::MonthYearPicker,
    },
    utils::format::{display_time, format_long_id_date, format_rupiah},
};

#[component]
pub fn MonthlyReportPage(category: EmployeeCategory) -> impl IntoView {
    let vm = use_report_view_model(category);

    view! {
        <section class="bg-white p-6 rounded-lg shadow space-y-6">
            <div>
                <h2 class="text-2xl font-bold">"Laporan Kehadiran Bulanan"</h2>
                <p class="text-sm text-gray-600">{category.label()}</p>
            </div>
            <div class="flex flex-wrap gap-4 items-center">
                <MonthYearPicker month=vm.month year=vm.year current_year=vm.current_year />
                <EmployeeSelect vm=vm />
                <Button
                    variant=ButtonVariant::Primary
                    disabled=Signal::derive(move || vm.current().is_none())
                    on_click=Callback::new(move |_| vm.export_pdf())
                >
                    "Cetak PDF"
                </Button>
            </div>
            <ErrorBanner message=vm.error />
            {move || {
                if vm.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                match vm.current() {
                    Some(report) => view! { <ReportDetail report=report /> }.into_view(),
                    None => view! {
                        <p class="text-gray-600">"Pilih karyawan untuk melihat laporan"</p>
                    }
                    .into_view(),
                }
            }}
        </section>
    }
}

#[component]
fn EmployeeSelect(vm: ReportViewModel) -> impl IntoView {
    view! {
        <select
            class="border rounded px-2 py-1"
            aria-label="Karyawan"
            on:change=move |ev| vm.select(&event_target_value(&ev))
        >
            {move || {
                let reports = vm.list();
                if reports.is_empty() {
                    return view! { <option value="">"No employees available"</option> }.into_view();
                }
                reports
                    .into_iter()
                    .map(|report| {
                        let id = report.employee.id.clone();
                        let is_selected = move || vm.selected.with(|s| s.as_ref() == Some(&id));
                        view! {
                            <option value=report.employee.id.to_string() selected=is_selected>
                                {report.employee.name}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn ReportDetail(report: MonthlyReport) -> impl IntoView {
    let summary = [
        ("Gaji Bulanan", report.employee.monthly_salary, "text-gray-900"),
        ("Total Potongan", report.total_deduction, "text-red-600"),
        ("Gaji Akhir", report.final_salary, "text-green-600"),
    ];

    view! {
        <div class="border rounded-lg p-6 space-y-4" data-testid="report-detail">
            <h3 class="text-xl font-semibold">{report.employee.name.clone()}</h3>
            <div class="grid grid-cols-3 gap-4">
                {summary
                    .into_iter()
                    .map(|(label, amount, tone)| {
                        view! {
                            <div>
                                <p class="text-sm text-gray-500">{label}</p>
                                <p class=format!("text-lg font-semibold {}", tone)>{format_rupiah(amount)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <table class="min-w-full text-sm">
                <thead class="bg-gray-100">
                    <tr>
                        {["Tanggal", "Status", "Jam Masuk", "Jam Keluar", "Potongan"]
                            .into_iter()
                            .map(|title| view! { <th class="px-4 py-2 text-left">{title}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {report
                        .daily_reports
                        .into_iter()
                        .map(|day| {
                            view! {
                                <tr class="border-t">
                                    <td class="px-4 py-2">{format_long_id_date(day.date)}</td>
                                    <td class="px-4 py-2">{day.status}</td>
                                    <td class="px-4 py-2">{display_time(day.check_in.as_deref())}</td>
                                    <td class="px-4 py-2">{display_time(day.check_out.as_deref())}</td>
                                    <td class="px-4 py-2">{format_rupiah(day.deduction)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
