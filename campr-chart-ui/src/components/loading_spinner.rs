//! Placeholder shown while the dataset is in flight.

use crate::state::AppState;
use campr_scene::shape::fmt_num;
use dioxus::prelude::*;

/// Grey box the size of the inset, so the page does not jump once the
/// charts arrive.
#[component]
pub fn LoadingSpinner() -> Element {
    let state = use_context::<AppState>();
    let (width, height) = (state.dims)().inset_outer();
    let (width, height) = (fmt_num(width), fmt_num(height));
    rsx! {
        div {
            role: "status",
            "aria-live": "polite",
            style: "display: flex; justify-content: center; align-items: center; width: {width}px; height: {height}px; background: #F4F4F4; color: #666; font-size: 14px;",
            "Loading campsite data..."
        }
    }
}
