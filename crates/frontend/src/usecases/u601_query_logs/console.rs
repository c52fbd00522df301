//! QueryConsole: the view-controller behind the console page.
//!
//! Constructed once per page with every signal the page renders from.
//! Event handlers call its methods instead of reaching for DOM elements.

use super::api;
use super::form::QueryForm;
use super::render::query_outcome_message;
use crate::shared::chat_log::{last_system_content, Message};
use crate::shared::config::ConsoleConfig;
use crate::shared::date_utils::{event_window, relative_range, window_width_percent, RangeSelection};
use crate::shared::list_utils::append_token;
use crate::usecases::u602_export_lines::api as export_api;
use crate::usecases::u602_export_lines::render::{export_outcome_message, lines_from_display};
use chrono::Utc;
use contracts::usecases::u601_query_logs::{QueryRequest, QueryResponse};
use contracts::usecases::u602_export_lines::{ExportRequest, ExportResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStatus {
    Idle,
    Running,
    Exporting,
}

impl ConsoleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsoleStatus::Idle => "idle",
            ConsoleStatus::Running => "running",
            ConsoleStatus::Exporting => "exporting",
        }
    }
}

/// Resets status to idle and releases an in-flight slot when dropped, so the
/// reset also happens if the request future is abandoned.
struct InFlight {
    status: RwSignal<ConsoleStatus>,
    counter: RwSignal<u32>,
}

impl InFlight {
    fn begin(status: RwSignal<ConsoleStatus>, counter: RwSignal<u32>, state: ConsoleStatus) -> Self {
        status.set(state);
        counter.update(|n| *n += 1);
        Self { status, counter }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.counter.try_update(|n| *n = n.saturating_sub(1));
        self.status.try_set(ConsoleStatus::Idle);
    }
}

#[derive(Clone, Copy)]
pub struct QueryConsole {
    pub form: QueryForm,
    pub messages: RwSignal<Vec<Message>>,
    pub status: RwSignal<ConsoleStatus>,
    /// Width of the timeline window indicator, percent
    pub window_width: RwSignal<f64>,
    pub queries_in_flight: RwSignal<u32>,
    pub exports_in_flight: RwSignal<u32>,
    config: StoredValue<ConsoleConfig>,
}

impl QueryConsole {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            form: QueryForm::new(&config),
            messages: RwSignal::new(Vec::new()),
            status: RwSignal::new(ConsoleStatus::Idle),
            window_width: RwSignal::new(window_width_percent(15)),
            queries_in_flight: RwSignal::new(0),
            exports_in_flight: RwSignal::new(0),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config.get_value()
    }

    fn api_base(&self) -> String {
        self.config.with_value(|c| c.api_base.clone())
    }

    pub fn append(&self, message: Message) {
        self.messages.update(|messages| messages.push(message));
    }

    /// Current form values as a request body
    pub fn read_inputs(&self) -> QueryRequest {
        self.form.snapshot().to_request()
    }

    /// Submit the form to `/api/query` in the background
    pub fn run_query(self) {
        spawn_local(self.run_query_with(api::query_logs));
    }

    /// Submit the form through `fetch`.
    ///
    /// Renders a `Query` message before `fetch` is awaited and exactly one
    /// `Results` or `Error` message after it settles.
    pub async fn run_query_with<F, Fut>(self, fetch: F)
    where
        F: FnOnce(String, QueryRequest) -> Fut,
        Fut: Future<Output = Result<QueryResponse, String>>,
    {
        let request = self.read_inputs();
        let max_lines = request.max_lines;
        let payload = serde_json::to_string_pretty(&request).unwrap_or_default();
        self.append(Message::user("Query", payload));

        let _in_flight = InFlight::begin(self.status, self.queries_in_flight, ConsoleStatus::Running);
        log::debug!(
            "u601: querying cluster '{}' ({} components, {} keywords)",
            request.cluster_id,
            request.components.len(),
            request.keywords.len()
        );

        let result = fetch(self.api_base(), request).await;
        match &result {
            Ok(response) => log::info!("u601: {} lines received", response.lines.len()),
            Err(e) => log::error!("u601: query failed: {}", e),
        }
        self.append(query_outcome_message(result, max_lines));
    }

    /// Send the last rendered result block to `/api/export` in the background
    pub fn export_text(self) {
        spawn_local(self.export_text_with(export_api::export_lines));
    }

    /// Export the most recent system message body through `fetch`.
    ///
    /// With nothing rendered yet an empty line list is sent.
    pub async fn export_text_with<F, Fut>(self, fetch: F)
    where
        F: FnOnce(String, ExportRequest) -> Fut,
        Fut: Future<Output = Result<ExportResponse, String>>,
    {
        self.append(Message::user("Export", "Requesting export..."));
        let _in_flight = InFlight::begin(self.status, self.exports_in_flight, ConsoleStatus::Exporting);

        let lines = self
            .messages
            .with_untracked(|messages| last_system_content(messages).map(lines_from_display))
            .unwrap_or_default();
        log::debug!("u602: exporting {} lines", lines.len());

        let result = fetch(self.api_base(), ExportRequest::text(lines)).await;
        match &result {
            Ok(response) => log::info!("u602: exported to {}", response.path),
            Err(e) => log::error!("u602: export failed: {}", e),
        }
        self.append(export_outcome_message(result));
    }

    pub fn add_component(&self, token: &str) {
        self.form.components.update(|value| *value = append_token(value, token));
    }

    pub fn add_keyword(&self, token: &str) {
        self.form.keywords.update(|value| *value = append_token(value, token));
    }

    /// Last `minutes` minutes up to now
    pub fn set_relative_range(&self, minutes: u32) {
        self.apply_range(relative_range(Utc::now(), minutes));
    }

    /// Ten minutes leading up to `event_ts`; an invalid timestamp changes nothing
    pub fn set_event_window(&self, event_ts: &str) {
        match event_window(event_ts) {
            Some(range) => self.apply_range(range),
            None => log::warn!("Ignoring event marker with invalid timestamp '{}'", event_ts),
        }
    }

    /// Event window around the timestamp typed into the event field
    pub fn center_on_event(&self) {
        let event_ts = self.form.event_time.get_untracked();
        self.set_event_window(&event_ts);
    }

    fn apply_range(&self, range: RangeSelection) {
        self.form.start_time.set(range.start);
        self.form.end_time.set(range.end);
        self.window_width.set(range.width_percent);
    }
}
