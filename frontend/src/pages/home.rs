use leptos::*;

use crate::api::EmployeeCategory;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 p-4">
            <div class="w-full max-w-md space-y-4">
                <h1 class="text-3xl font-bold text-white text-center">"GesanG Absensi"</h1>
                <a
                    href=EmployeeCategory::Regular.login_route()
                    class="block w-full text-center py-4 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-semibold"
                >
                    "Karyawan Bulanan"
                </a>
                <a
                    href=EmployeeCategory::Khusus.login_route()
                    class="block w-full text-center py-4 rounded-lg bg-green-600 hover:bg-green-700 text-white font-semibold"
                >
                    "Karyawan Khusus (Pulang Bawa Paket)"
                </a>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn home_links_both_employee_logins() {
        let html = render_to_string(|| view! { <HomePage /> });
        assert!(html.contains("href=\"/login-employee\""));
        assert!(html.contains("href=\"/login-employee-khusus\""));
    }
}
