//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use campr_data::ParkIndex;
use campr_scene::{ChartDimensions, ScaleSet, SelectionEvent, Session};
use dioxus::prelude::*;

/// Shared application state for the campsite demand app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Grouped dataset (None until loaded)
    pub index: Signal<Option<ParkIndex>>,
    /// Scales, fixed once the dataset is loaded
    pub scales: Signal<Option<ScaleSet>>,
    /// Chart geometry
    pub dims: Signal<ChartDimensions>,
    /// Current selection and the inset stage it produced
    pub session: Signal<Session>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Terminal load failure
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            index: Signal::new(None),
            scales: Signal::new(None),
            dims: Signal::new(ChartDimensions::default()),
            session: Signal::new(Session::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Store a freshly loaded dataset and derive the scales from it.
    pub fn install(&mut self, index: ParkIndex) {
        let dims = (self.dims)();
        self.scales.set(Some(ScaleSet::new(&dims, index.date_domain())));
        self.index.set(Some(index));
        self.loading.set(false);
    }

    /// Record a terminal load failure.
    pub fn fail(&mut self, message: String) {
        log::error!("[campr] {}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }

    /// Feed a click to the selection state machine. An event that does not
    /// resolve against the data is reported, not ignored: the session keeps
    /// it for the banner until the next successful click or a dismiss.
    pub fn dispatch(&mut self, event: SelectionEvent) {
        let index = self.index.read();
        let Some(index) = index.as_ref() else {
            log::warn!("[campr] {:?} before the dataset loaded", event);
            return;
        };
        let result = self.session.write().dispatch(&event, index);
        if let Err(e) = result {
            log::error!("[campr] selection failed: {}", e);
        }
    }

    /// Message of the last failed click, if it is still current.
    pub fn selection_error(&self) -> Option<String> {
        self.session.read().error().map(|e| e.to_string())
    }

    pub fn dismiss_selection_error(&mut self) {
        self.session.write().dismiss_error();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
