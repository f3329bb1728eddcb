//! Reusable Dioxus RSX components for the campsite demand app.

mod chart_header;
mod error_display;
mod inset_chart;
mod loading_spinner;
mod shape_view;
mod small_multiples;

pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use inset_chart::InsetChart;
pub use loading_spinner::LoadingSpinner;
pub use shape_view::ShapeView;
pub use small_multiples::SmallMultiples;

/// DOM id of the inset (detail) chart mount point.
pub const INSET_CONTAINER_ID: &str = "container0";
/// DOM id of the small-multiple grid mount point.
pub const PANELS_CONTAINER_ID: &str = "container1";
