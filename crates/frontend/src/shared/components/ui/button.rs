use leptos::prelude::*;

/// Button component with variants (primary, secondary)
#[component]
pub fn Button(
    /// ID for the button element
    id: &'static str,
    /// Button variant: "primary" (default) or "secondary"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Adds the `button--busy` modifier while true; the button stays clickable
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    /// Click event handler
    on_click: Callback<leptos::ev::MouseEvent>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        _ => "button--primary",
    };

    let busy_class = move || {
        if busy.get().unwrap_or(false) {
            "button--busy"
        } else {
            ""
        }
    };

    view! {
        <button
            id=id
            type="button"
            class=move || format!("button {} {}", variant_class(), busy_class())
            on:click=move |ev| on_click.run(ev)
        >
            {children()}
        </button>
    }
}
