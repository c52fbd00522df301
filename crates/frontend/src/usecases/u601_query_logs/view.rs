use super::console::QueryConsole;
use crate::shared::chat_log::Message;
use crate::shared::components::ui::{Button, Chip, ChipKind, Input, StatusBadge};
use crate::shared::config::ConsoleConfig;
use leptos::html::Div;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn QueryConsolePage(config: ConsoleConfig) -> impl IntoView {
    let console = QueryConsole::new(config);

    view! {
        <div id="u601_query_logs--usecase" class="page console" data-page-category="usecase">
            <ConsoleHeader console=console />
            <div class="console__body">
                <ChatLog console=console />
                <QueryPanel console=console />
            </div>
        </div>
    }
}

#[component]
fn ConsoleHeader(console: QueryConsole) -> impl IntoView {
    let status = Signal::derive(move || console.status.get().as_str());

    view! {
        <Flex class="console__header" justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
            <h2 class="section-title">"LogService"</h2>
            <StatusBadge id="status" status=status />
        </Flex>
    }
}

#[component]
fn ChatLog(console: QueryConsole) -> impl IntoView {
    let chat_ref = NodeRef::<Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        console.messages.track();
        if let Some(chat) = chat_ref.get() {
            chat.set_scroll_top(chat.scroll_height());
        }
    });

    view! {
        <div id="chat" class="chat" node_ref=chat_ref>
            <Show when=move || console.messages.with(|m| m.is_empty())>
                <div class="chat__empty">
                    "Pick a cluster, components and a time window, then run a query."
                </div>
            </Show>
            <For
                each=move || console.messages.get()
                key=|message| message.id
                children=move |message: Message| view! { <MessageBlock message=message /> }
            />
        </div>
    }
}

#[component]
fn MessageBlock(message: Message) -> impl IntoView {
    view! {
        <div class=message.kind.css_class()>
            <strong>{message.title}</strong>
            {message.content.map(|content| view! { <pre>{content}</pre> })}
            {message.note.map(|note| view! { <small class="message__note">{note}</small> })}
        </div>
    }
}

#[component]
fn QueryPanel(console: QueryConsole) -> impl IntoView {
    let config = console.config();
    let form = console.form;

    let component_chips = config
        .component_chips
        .into_iter()
        .map(|token| {
            let value = token.clone();
            let on_click = Callback::new(move |_| console.add_component(&value));
            view! { <Chip kind=ChipKind::Component value=token.clone() label=token on_click=on_click /> }
        })
        .collect_view();

    let keyword_chips = config
        .keyword_chips
        .into_iter()
        .map(|token| {
            let value = token.clone();
            let on_click = Callback::new(move |_| console.add_keyword(&value));
            view! { <Chip kind=ChipKind::Keyword value=token.clone() label=token on_click=on_click /> }
        })
        .collect_view();

    let range_chips = config
        .range_minutes
        .into_iter()
        .map(|minutes| {
            let on_click = Callback::new(move |_| console.set_relative_range(minutes));
            view! {
                <Chip
                    kind=ChipKind::Range
                    value=minutes.to_string()
                    label=format!("Last {}m", minutes)
                    on_click=on_click
                />
            }
        })
        .collect_view();

    let event_chips = config
        .event_markers
        .into_iter()
        .map(|ts| {
            let value = ts.clone();
            let on_click = Callback::new(move |_| console.set_event_window(&value));
            view! { <Chip kind=ChipKind::Event value=ts.clone() label=ts on_click=on_click /> }
        })
        .collect_view();

    let on_run = Callback::new(move |_| console.run_query());
    let on_export = Callback::new(move |_| console.export_text());
    let query_busy = Signal::derive(move || console.queries_in_flight.get() > 0);
    let export_busy = Signal::derive(move || console.exports_in_flight.get() > 0);

    view! {
        <div class="card query-panel">
            <div class="card__body">
                <Flex vertical=true gap=FlexGap::Small>
                    <Input id="clusterId" label="Cluster" value=form.cluster_id placeholder="prod-eu-1" />
                    <Input
                        id="configPath"
                        label="Cluster config"
                        value=form.config_path
                        placeholder="optional path to cluster config"
                    />

                    <Input id="components" label="Components" value=form.components placeholder="comma separated" />
                    <div class="chips">{component_chips}</div>

                    <Input id="keywords" label="Keywords" value=form.keywords placeholder="comma separated" />
                    <div class="chips">{keyword_chips}</div>

                    <Flex gap=FlexGap::Small>
                        <Input id="startTime" label="Start" value=form.start_time placeholder="ISO-8601" />
                        <Input id="endTime" label="End" value=form.end_time placeholder="ISO-8601" />
                    </Flex>
                    <div class="chips">{range_chips}{event_chips}</div>
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Input id="eventTime" label="Event" value=form.event_time placeholder="ISO-8601 event time" />
                        <button
                            type="button"
                            class="chip"
                            data-event=move || form.event_time.get()
                            on:click=move |_| console.center_on_event()
                        >
                            "Center on event"
                        </button>
                    </Flex>
                    <div class="timeline">
                        <div
                            id="timelineWindow"
                            class="timeline__window"
                            style:width=move || format!("{}%", console.window_width.get())
                        ></div>
                    </div>

                    <Flex gap=FlexGap::Small>
                        <Button id="runQuery" busy=query_busy on_click=on_run>
                            "Run query"
                        </Button>
                        <Button id="exportText" variant="secondary" busy=export_busy on_click=on_export>
                            "Export text"
                        </Button>
                    </Flex>
                </Flex>
            </div>
        </div>
    }
}
