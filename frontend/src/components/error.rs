use crate::api::ApiError;
use leptos::*;

/// Field-level validation feedback shown under a form.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="text-sm text-red-600 my-2" role="alert">
                {move || error.get().map(|e| e.error).unwrap_or_default()}
                {move || error.get().and_then(|e| {
                    let fields = e.details.as_ref()?.get("fields")?.as_array()?.clone();
                    Some(view! {
                        <ul class="list-disc list-inside">
                            {fields.into_iter().map(|field| {
                                view! { <li>{field.as_str().unwrap_or_default().to_string()}</li> }
                            }).collect_view()}
                        </ul>
                    })
                })}
            </div>
        </Show>
    }
}
