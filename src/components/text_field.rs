//! Labelled text input with an optional right-aligned aside (e.g. a
//! "Forgot password?" link) next to the label.

use leptos::prelude::*;

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="text-field">
            <div class="text-field__header">
                <label for=id class="text-field__label">{label}</label>
                {children.map(|aside| view! { <div class="text-field__aside">{aside()}</div> })}
            </div>
            <input
                id=id
                name=id
                class="text-field__input"
                type=input_type
                placeholder=placeholder
                required=required
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
