//! Campsite demand across national parks
//!
//! One small area chart of weekly campsite demand per park. Clicking a park
//! opens its demand curve in the inset; clicking a week there adds the
//! booking-lead-time curve for that camping date.
//!
//! Data flow:
//! 1. On mount: fetch `data/npscampr.json` once, group it by park and
//!    validate it. A failure here is terminal and shown as an error.
//! 2. Scales are fixed from the full dataset.
//! 3. Clicks go through the selection reducer; the inset draws whatever
//!    layers the resulting stage holds.

use campr_chart_ui::components::{
    ChartHeader, ErrorDisplay, InsetChart, LoadingSpinner, SmallMultiples,
};
use campr_chart_ui::loader;
use campr_chart_ui::state::AppState;
use dioxus::prelude::*;

/// Relative URL of the pre-aggregated dataset.
const DATA_URL: &str = "data/npscampr.json";

/// Fade-in for freshly mounted chart areas.
const FADE_CSS: &str = r#"
@keyframes campr-fade { from { opacity: 0; } }
.campr-fade { animation: campr-fade 0.5s ease-in; }
"#;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("[campr] campsite demand {} starting, data at {}", env!("CARGO_PKG_VERSION"), DATA_URL);
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("campsite-demand-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Load the dataset once on mount ───
    use_effect(move || {
        spawn(async move {
            match loader::fetch_index(DATA_URL).await {
                Ok(index) => state.install(index),
                Err(e) => state.fail(format!("Failed to load campsite data: {}", e)),
            }
        });
    });

    let loaded = state.index.read().is_some();

    // ─── Render ───
    rsx! {
        style { "{FADE_CSS}" }
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if let Some(err) = state.selection_error() {
                ErrorDisplay {
                    message: err,
                    on_dismiss: move |_| state.dismiss_selection_error(),
                }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if loaded {
                ChartHeader {
                    title: "Campsite Demand at National Parks".to_string(),
                    hint: "Select a park, then a week, to see how far ahead its campsites are booked.".to_string(),
                }

                InsetChart {}

                SmallMultiples {}

                p {
                    style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
                    "Data: recreation.gov reservations. Dates are shifted to protect privacy."
                }
            }
        }
    }
}
