use contracts::domain::common::FieldErrors;
use leptos::prelude::*;

/// Label + input slot + inline "required" marker for one form field
#[component]
pub fn FormField(
    #[prop(into)]
    label: String,
    /// Wire name of the field, the key used in [`FieldErrors`]
    field: &'static str,
    #[prop(into)]
    errors: Signal<FieldErrors>,
    #[prop(optional)]
    required: bool,
    children: Children,
) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field).map(str::to_string));

    view! {
        <div class=move || if message().is_some() { "form-group form-group--invalid" } else { "form-group" }>
            <label for=field>
                {label}
                {required.then(|| view! { <span class="form-required">" *"</span> })}
            </label>
            {children()}
            {move || message().map(|m| view! { <small class="form-error">{m}</small> })}
        </div>
    }
}
