use leptos::prelude::*;

/// Text input bound to a signal, with label support
///
/// The DOM value follows the signal, so programmatic updates (chips, range
/// helpers) show up in the field.
#[component]
pub fn Input(
    /// ID for the input element
    id: &'static str,
    /// Label text
    #[prop(into)]
    label: String,
    /// Bound value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                {label}
            </label>
            <input
                id=id
                class="form__input"
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                autocomplete="off"
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
