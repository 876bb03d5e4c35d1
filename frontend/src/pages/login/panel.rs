use leptos::*;

use super::{
    utils::login_title,
    view_model::{use_login_view_model, LoginViewModel},
};
use crate::{
    api::EmployeeCategory,
    components::{
        common::{Button, ButtonVariant},
        layout::ErrorBanner,
    },
    state::session::SessionRole,
};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <LoginPanel role=SessionRole::Admin /> }
}

#[component]
pub fn EmployeeLoginPage(category: EmployeeCategory) -> impl IntoView {
    view! { <LoginPanel role=SessionRole::Employee(category) /> }
}

#[component]
fn LoginPanel(role: SessionRole) -> impl IntoView {
    let vm = use_login_view_model(role);
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 p-4">
            <div class="w-full max-w-sm p-8 bg-gray-800 rounded-lg shadow space-y-4">
                <h2 class="text-2xl font-bold text-white text-center">{login_title(role)}</h2>
                <LoginForm vm=vm />
            </div>
        </div>
    }
}

#[component]
fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let pending = vm.login_action.pending();
    let submit_label = match vm.role {
        SessionRole::Admin => "Sign in",
        SessionRole::Employee(_) => "Login",
    };

    view! {
        <form
            class="space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <input
                type="text"
                class="w-full px-4 py-3 rounded bg-gray-600 text-white"
                placeholder="Username"
                required
                prop:value=move || vm.form.with(|f| f.username.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| f.username = value);
                }
            />
            <input
                type="password"
                class="w-full px-4 py-3 rounded bg-gray-600 text-white"
                placeholder="Password"
                required
                prop:value=move || vm.form.with(|f| f.password.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| f.password = value);
                }
            />
            <ErrorBanner message=vm.error />
            <Button variant=ButtonVariant::Primary class="w-full" button_type="submit" loading=pending>
                {submit_label}
            </Button>
        </form>
    }
}
