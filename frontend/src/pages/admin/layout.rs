use leptos::*;
use leptos_router::{Outlet, A};

use crate::components::guard::RequireAdmin;

pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { path: "/admin/employees", label: "Karyawan" },
    NavItem { path: "/admin/report", label: "Report Bulanan" },
    NavItem { path: "/admin/report-khusus", label: "Report Bulanan Khusus" },
    NavItem { path: "/admin/holidays", label: "Hari Libur" },
    NavItem { path: "/admin/leaves", label: "Cuti / Izin" },
    NavItem { path: "/admin/attendance", label: "Absensi Manual" },
    NavItem { path: "/admin/attendance-khusus", label: "Absensi Manual Khusus" },
];

/// Admin console chrome. The active child screen renders through the outlet.
#[component]
pub fn AdminShell() -> impl IntoView {
    view! {
        <RequireAdmin>
            <div class="min-h-screen bg-gray-100">
                <nav class="bg-gray-900 shadow">
                    <div class="max-w-7xl mx-auto px-4 flex h-16 items-center gap-6">
                        <span class="text-white font-bold">"GesanG Absensi"</span>
                        <div class="flex gap-1 overflow-x-auto">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <A
                                            href=item.path
                                            exact=true
                                            class="px-4 py-2 text-sm font-medium text-gray-400 hover:text-white"
                                            active_class="text-blue-400 border-b-2 border-blue-400"
                                        >
                                            {item.label}
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </nav>
                <main class="max-w-7xl mx-auto py-6 px-4">
                    <Outlet />
                </main>
            </div>
        </RequireAdmin>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_covers_every_admin_screen_once() {
        let paths: HashSet<&str> = NAV_ITEMS.iter().map(|item| item.path).collect();
        assert_eq!(paths.len(), NAV_ITEMS.len());
        assert!(NAV_ITEMS.iter().all(|item| item.path.starts_with("/admin/")));
        assert_eq!(NAV_ITEMS[0].label, "Karyawan");
    }
}
