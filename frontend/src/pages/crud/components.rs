use leptos::*;

use super::{
    state::{CrudResource, FormMode},
    view_model::CrudViewModel,
};
use crate::components::{
    common::{Button, ButtonVariant},
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::LoadingSpinner,
    pagination::Pagination,
};

/// Searchable, paginated table with the delete confirmation attached.
/// `row` renders one `<tr>` for a record.
#[component]
pub fn CrudTable<R, F, IV>(
    vm: CrudViewModel<R>,
    headers: &'static [&'static str],
    row: F,
    #[prop(into)] search_placeholder: String,
    #[prop(into)] empty_title: String,
) -> impl IntoView
where
    R: CrudResource,
    F: Fn(R) -> IV + Clone + 'static,
    IV: IntoView + 'static,
{
    let empty_title = store_value(empty_title);
    let row = store_value(row);
    let rows = move || {
        vm.visible_page()
            .into_iter()
            .map(row.get_value())
            .collect_view()
    };

    view! {
        <div class="space-y-3">
            <input
                type="search"
                class="w-full sm:w-72 border rounded px-3 py-2"
                placeholder=search_placeholder
                prop:value=move || vm.list.with(|state| state.search.clone())
                on:input=move |ev| vm.set_search(event_target_value(&ev))
            />
            <Show
                when=move || vm.records.get().is_some()
                fallback=|| view! { <LoadingSpinner /> }
            >
                <Show
                    when=move || !vm.filtered().is_empty()
                    fallback=move || view! { <EmptyState title=empty_title.get_value() /> }
                >
                    <div class="overflow-x-auto">
                        <table class="min-w-full bg-white border">
                            <thead class="bg-gray-100">
                                <tr>
                                    {headers
                                        .iter()
                                        .map(|title| view! { <th class="px-4 py-2 text-left text-sm">{*title}</th> })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                </Show>
                <Pagination
                    page=Signal::derive(move || vm.list.with(|state| state.page))
                    page_count=Signal::derive(move || vm.page_count())
                    on_select=Callback::new(move |page| vm.set_page(page))
                    summary=Signal::derive(move || vm.summary())
                />
            </Show>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Konfirmasi"
                message=R::DELETE_PROMPT.to_string()
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                confirm_label="Hapus"
                destructive=true
            />
        </div>
    }
}

/// Edit/delete buttons for one table row.
#[component]
pub fn RowActions<R: CrudResource>(vm: CrudViewModel<R>, record: R) -> impl IntoView {
    let id = record.id().clone();
    let record = store_value(record);
    view! {
        <td class="px-4 py-2 space-x-2 whitespace-nowrap">
            <Button
                variant=ButtonVariant::Secondary
                on_click=Callback::new(move |_| record.with_value(|r| vm.begin_edit(r)))
            >
                "Edit"
            </Button>
            <Button
                variant=ButtonVariant::Danger
                on_click=Callback::new(move |_| vm.request_delete(id.clone()))
            >
                "Hapus"
            </Button>
        </td>
    }
}

/// Submit (and, while editing, cancel) buttons plus validation feedback.
#[component]
pub fn FormActions<R: CrudResource>(vm: CrudViewModel<R>, noun: &'static str) -> impl IntoView {
    let is_update = move || vm.mode() == FormMode::Update;
    let pending = vm.submit_action.pending();
    view! {
        <InlineErrorMessage error=vm.form_error />
        <div class="flex gap-2">
            <Button button_type="submit" loading=Signal::derive(move || pending.get())>
                {move || if is_update() { format!("Edit {noun}") } else { format!("Tambah {noun}") }}
            </Button>
            <Show when=is_update>
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| vm.cancel_edit())
                >
                    "Batal"
                </Button>
            </Show>
        </div>
    }
}
