//! The inset: demand chart and booking chart of the current selection.

use super::{ErrorDisplay, ShapeView, INSET_CONTAINER_ID};
use crate::state::AppState;
use campr_data::ParkKey;
use campr_scene::scene::{self, date_bar_opacity};
use campr_scene::shape::{fmt_num, Rect, Shape};
use campr_scene::{LayerId, SelectionEvent};
use dioxus::prelude::*;

/// Draws the stage held in `AppState`: backdrop and annotations, then each
/// mounted layer in mount order.
#[component]
pub fn InsetChart() -> Element {
    let state = use_context::<AppState>();
    let dims = (state.dims)();
    let Some(scales) = (state.scales)() else {
        return rsx! {};
    };
    let session = state.session.read().clone();
    let built = {
        let index = state.index.read();
        let Some(index) = index.as_ref() else {
            return rsx! {};
        };
        scene::inset(session.stage(), index, &scales, &dims)
    };
    let inset = match built {
        Ok(inset) => inset,
        Err(e) => {
            log::error!("[campr] inset: {}", e);
            return rsx! { ErrorDisplay { message: e.to_string() } };
        }
    };

    let (width, height) = dims.inset_outer();
    let (width, height) = (fmt_num(width), fmt_num(height));

    rsx! {
        div {
            id: INSET_CONTAINER_ID,
            svg {
                width: "{width}",
                height: "{height}",
                for (i, shape) in inset.furniture.into_iter().enumerate() {
                    ShapeView { key: "{i}", shape }
                }
                for layer in inset.layers {
                    LayerView {
                        key: "{layer.id}",
                        id: layer.id.clone(),
                        shapes: layer.shapes.clone(),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LayerViewProps {
    id: LayerId,
    shapes: Vec<Shape>,
}

/// One mounted layer. Date bars get their own interactive component.
#[component]
fn LayerView(props: LayerViewProps) -> Element {
    let class = match props.id {
        LayerId::Demand(_) => "parkarea",
        LayerId::Booking(..) => "lowerarea",
    };
    let park = match &props.id {
        LayerId::Demand(key) | LayerId::Booking(key, _) => key.clone(),
    };

    let mut plain = Vec::new();
    let mut bars = Vec::new();
    for shape in props.shapes {
        match shape {
            Shape::Rect(rect) if rect.date.is_some() => {
                bars.push((date_bar_key(&rect, bars.len()), rect));
            }
            other => plain.push(other),
        }
    }

    rsx! {
        g {
            class: class,
            for (i, shape) in plain.into_iter().enumerate() {
                ShapeView { key: "{i}", shape, class: "campr-fade".to_string() }
            }
            for (bar_key, rect) in bars {
                DateBar {
                    key: "{bar_key}",
                    park: park.clone(),
                    rect,
                }
            }
        }
    }
}

/// Sibling key of a date bar. Records can repeat a date, so the position
/// keeps keys unique within a layer.
fn date_bar_key(rect: &Rect, position: usize) -> String {
    match rect.date {
        Some(date) => format!("{date}-{position}"),
        None => position.to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
struct DateBarProps {
    park: ParkKey,
    rect: Rect,
}

/// Selectable week bar over the demand chart. Hover is local; the
/// persistent highlight comes from the stage, through `rect.opacity`.
#[component]
fn DateBar(props: DateBarProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut hovered = use_signal(|| false);
    let Some(date) = props.rect.date else {
        return rsx! {};
    };
    let selected = props.rect.opacity > 0.0;
    let opacity = date_bar_opacity(selected, hovered());
    let (x, y) = (fmt_num(props.rect.x), fmt_num(props.rect.y));
    let (width, height) = (fmt_num(props.rect.width), fmt_num(props.rect.height));
    let bar_class = if selected {
        "bar-select"
    } else if hovered() {
        "bar-hover"
    } else {
        "bar-unselect"
    };
    let park = props.park.clone();

    rsx! {
        rect {
            id: "date-select",
            class: bar_class,
            x: "{x}",
            y: "{y}",
            width: "{width}",
            height: "{height}",
            fill: props.rect.fill,
            opacity: "{opacity}",
            style: "cursor: pointer;",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onclick: move |_| state.dispatch(SelectionEvent::DateClicked(park.clone(), date)),
        }
    }
}
