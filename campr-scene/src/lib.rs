//! Chart geometry and interaction state for the campsite demand charts.
//!
//! Nothing in here touches a DOM. The UI feeds click events to
//! [`selection::Session`], which runs the pure reducer and applies its
//! mount/unmount deltas to a [`stage::Stage`]. [`scene`] then turns the
//! stage into shapes, which the Dioxus adapter or [`svg`] draws.

pub mod dims;
pub mod error;
pub mod scale;
pub mod scene;
pub mod selection;
pub mod shape;
pub mod stage;
pub mod svg;

pub use dims::ChartDimensions;
pub use error::SelectionError;
pub use scale::{ClusterPalette, LinearScale, ScaleSet, TimeScale};
pub use selection::{reduce, Session, Selection, SelectionEvent, Transition};
pub use stage::{Annotation, Delta, LayerId, Stage};
