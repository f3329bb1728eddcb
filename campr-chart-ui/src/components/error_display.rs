//! Error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a close button when set. Load failures leave it unset: there is
    /// nothing to go back to.
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; align-items: baseline; gap: 8px; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span {
                style: "flex: 1;",
                strong { "Error: " }
                "{props.message}"
            }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    "aria-label": "Dismiss",
                    style: "border: none; background: none; color: inherit; font-size: 16px; cursor: pointer;",
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}
