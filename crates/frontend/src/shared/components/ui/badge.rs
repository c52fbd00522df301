use leptos::prelude::*;

/// Badge showing the console status ("idle", "running", "exporting")
#[component]
pub fn StatusBadge(
    /// ID for the badge element
    id: &'static str,
    /// Status text; also selects the color modifier
    #[prop(into)]
    status: Signal<&'static str>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        "idle" => "badge badge--status badge--neutral",
        _ => "badge badge--status badge--primary",
    };

    view! {
        <span id=id class=status_class>
            {move || status.get()}
        </span>
    }
}
