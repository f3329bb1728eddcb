//! Shared Dioxus components and data loading for the campsite demand app.
//!
//! This crate provides:
//! - `loader`: one-shot browser fetch of the dataset JSON
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: RSX components that draw `campr-scene` scenes as SVG

pub mod components;
pub mod loader;
pub mod state;
