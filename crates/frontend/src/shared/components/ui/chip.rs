use leptos::prelude::*;

/// What a chip fills in; selects its `data-*` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    Component,
    Keyword,
    Range,
    Event,
}

/// Small clickable token.
///
/// Carries `data-component`, `data-keyword`, `data-range` or `data-event`
/// (per `kind`) set to `value`, so the host page can target chips by kind.
#[component]
pub fn Chip(
    kind: ChipKind,
    #[prop(into)] value: String,
    #[prop(into)] label: String,
    on_click: Callback<()>,
) -> impl IntoView {
    let attr_for = |k: ChipKind| (kind == k).then(|| value.clone());

    view! {
        <button
            type="button"
            class="chip"
            data-component=attr_for(ChipKind::Component)
            data-keyword=attr_for(ChipKind::Keyword)
            data-range=attr_for(ChipKind::Range)
            data-event=attr_for(ChipKind::Event)
            on:click=move |_| on_click.run(())
        >
            {label}
        </button>
    }
}
