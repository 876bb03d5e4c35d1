use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{ApiClient, EmployeeCategory},
    pages::{
        admin::AdminShell,
        attendance_grid::AttendanceGridPage,
        employees::EmployeesPage,
        holidays::HolidaysPage,
        home::HomePage,
        leaves::LeavesPage,
        login::{AdminLoginPage, EmployeeLoginPage},
        report::MonthlyReportPage,
        self_service::SelfServicePage,
        terms::TermsPage,
    },
    state::session::SessionProvider,
};

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    "/login-employee",
    "/login-employee-khusus",
    "/login-admin",
    "/terms-and-conditions",
    "/terms-and-conditions-khusus",
    "/employee",
    "/employee-khusus",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin/employees",
    "/admin/attendance",
    "/admin/attendance-khusus",
    "/admin/report",
    "/admin/report-khusus",
    "/admin/holidays",
    "/admin/leaves",
];

pub const ADMIN_INDEX_REDIRECT: &str = "/admin/employees";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Title text="GesanG Absensi" />
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/login-admin" view=AdminLoginPage />
                    <Route path="/login-employee" view=|| view! { <EmployeeLoginPage category=EmployeeCategory::Regular /> } />
                    <Route path="/login-employee-khusus" view=|| view! { <EmployeeLoginPage category=EmployeeCategory::Khusus /> } />
                    <Route path="/terms-and-conditions" view=|| view! { <TermsPage category=EmployeeCategory::Regular /> } />
                    <Route path="/terms-and-conditions-khusus" view=|| view! { <TermsPage category=EmployeeCategory::Khusus /> } />
                    <Route path="/employee" view=|| view! { <SelfServicePage category=EmployeeCategory::Regular /> } />
                    <Route path="/employee-khusus" view=|| view! { <SelfServicePage category=EmployeeCategory::Khusus /> } />
                    <Route path="/admin" view=AdminShell>
                        <Route path="" view=|| view! { <Redirect path=ADMIN_INDEX_REDIRECT /> } />
                        <Route path="employees" view=EmployeesPage />
                        <Route path="attendance" view=|| view! { <AttendanceGridPage category=EmployeeCategory::Regular /> } />
                        <Route path="attendance-khusus" view=|| view! { <AttendanceGridPage category=EmployeeCategory::Khusus /> } />
                        <Route path="report" view=|| view! { <MonthlyReportPage category=EmployeeCategory::Regular /> } />
                        <Route path="report-khusus" view=|| view! { <MonthlyReportPage category=EmployeeCategory::Khusus /> } />
                        <Route path="holidays" view=HolidaysPage />
                        <Route path="leaves" view=LeavesPage />
                    </Route>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::admin::NAV_ITEMS;
    use std::collections::HashSet;

    #[test]
    fn category_routes_match_route_table() {
        for category in EmployeeCategory::ALL {
            assert!(PUBLIC_ROUTE_PATHS.contains(&category.login_route().as_str()));
            assert!(PUBLIC_ROUTE_PATHS.contains(&category.terms_route().as_str()));
            assert!(PUBLIC_ROUTE_PATHS.contains(&category.attendance_route().as_str()));
        }
    }

    #[test]
    fn every_nav_link_is_a_routed_admin_screen() {
        let admin: HashSet<&str> = ADMIN_ROUTE_PATHS.iter().copied().collect();
        assert_eq!(admin.len(), ADMIN_ROUTE_PATHS.len());
        for item in NAV_ITEMS.iter() {
            assert!(admin.contains(item.path), "unrouted nav link: {}", item.path);
        }
        assert!(admin.contains(ADMIN_INDEX_REDIRECT));
    }

    #[test]
    fn public_and_admin_routes_do_not_overlap() {
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert_eq!(public.len(), PUBLIC_ROUTE_PATHS.len());
        assert!(ADMIN_ROUTE_PATHS.iter().all(|path| !public.contains(path)));
    }
}
