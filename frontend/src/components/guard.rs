use crate::state::session::{use_session, Session, SessionRole};
use leptos::*;

/// Renders admin screens only while an admin session is active. Without one
/// the user gets a link back to the admin login instead of a redirect.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let has_admin =
        create_memo(move |_| should_render_admin(session.current(SessionRole::Admin).as_ref()));
    view! {
        <Show
            when=move || has_admin.get()
            fallback=|| view! {
                <div class="max-w-md mx-auto mt-16 p-6 bg-white rounded shadow text-center space-y-4">
                    <p class="text-gray-700">"Silahkan login sebagai admin terlebih dahulu."</p>
                    <a href="/login-admin" class="inline-block px-4 py-2 bg-blue-600 text-white rounded">
                        "Login Admin"
                    </a>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_admin(session: Option<&Session>) -> bool {
    session
        .map(|s| s.role == SessionRole::Admin)
        .unwrap_or(false)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_admin_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn require_admin_renders_children_for_admin_session() {
        let html = render_to_string(move || {
            provide_admin_session();
            view! { <RequireAdmin><div>"Panel Admin"</div></RequireAdmin> }
        });
        assert!(html.contains("Panel Admin"));
    }

    #[test]
    fn require_admin_prompts_login_without_session() {
        let html = render_to_string(move || {
            view! { <RequireAdmin><div>"Panel Admin"</div></RequireAdmin> }
        });
        assert!(!html.contains("Panel Admin"));
        assert!(html.contains("/login-admin"));
    }
}
