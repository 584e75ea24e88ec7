//! Labeled form input with inline validation feedback.

use leptos::prelude::*;

/// Text input wrapped in its label, followed by the field's current
/// validation message when one is set.
#[component]
pub fn FormInput(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
    error: Signal<&'static str>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="label-text">
            {label}
            <input
                type=input_type
                id=id
                class="input-field"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
        <Show when=move || !error.get().is_empty()>
            <p class="error-message">{move || error.get()}</p>
        </Show>
    }
}
