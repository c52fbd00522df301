use crate::shared::config::ConsoleConfig;
use crate::usecases::u601_query_logs::QueryConsolePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = ConsoleConfig::from_location();
    log::info!("Console API base: '{}'", config.api_base);

    view! {
        <QueryConsolePage config=config />
    }
}
