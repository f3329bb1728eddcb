//! Grid of one miniature demand chart per park.

use super::{ErrorDisplay, ShapeView, PANELS_CONTAINER_ID};
use crate::state::AppState;
use campr_scene::scene::{self, panel_style, Panel};
use campr_scene::shape::{fmt_num, Shape};
use campr_scene::{ChartDimensions, SelectionEvent};
use dioxus::prelude::*;

/// All panels, laid out by flex-wrap in group order.
#[component]
pub fn SmallMultiples() -> Element {
    let state = use_context::<AppState>();
    let dims = (state.dims)();
    let Some(scales) = (state.scales)() else {
        return rsx! {};
    };
    let built = match state.index.read().as_ref() {
        Some(index) => scene::small_multiples(index, &scales),
        None => return rsx! {},
    };
    let panels = match built {
        Ok(panels) => panels,
        Err(e) => {
            log::error!("[campr] small multiples: {}", e);
            return rsx! { ErrorDisplay { message: e.to_string() } };
        }
    };

    rsx! {
        div {
            id: PANELS_CONTAINER_ID,
            style: "display: flex; flex-wrap: wrap; gap: 4px;",
            for panel in panels {
                ParkPanel { key: "{panel.key}", panel, dims }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ParkPanelProps {
    panel: Panel,
    dims: ChartDimensions,
}

/// One park's panel. Hovering emphasizes the area and its label together;
/// clicking selects the park.
#[component]
fn ParkPanel(props: ParkPanelProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut hovered = use_signal(|| false);

    let (stroke, opacity, label_fill) = panel_style(hovered());
    let mut area = props.panel.area.clone();
    area.stroke = stroke;
    area.opacity = opacity;
    let mut label = props.panel.label.clone();
    label.fill = label_fill;

    let (width, height) = props.dims.panel_outer();
    let (width, height) = (fmt_num(width), fmt_num(height));
    let (ox, oy) = props.dims.panel_offset();
    let (ox, oy) = (fmt_num(ox), fmt_num(oy));
    let key = props.panel.key.clone();

    rsx! {
        svg {
            width: "{width}",
            height: "{height}",
            g {
                transform: "translate({ox},{oy})",
                g {
                    class: "park-area",
                    style: "cursor: pointer;",
                    onmouseenter: move |_| hovered.set(true),
                    onmouseleave: move |_| hovered.set(false),
                    onclick: move |_| state.dispatch(SelectionEvent::ParkClicked(key.clone())),
                    ShapeView { shape: Shape::Area(area) }
                }
                g {
                    class: "park-labels",
                    ShapeView { shape: Shape::Text(label) }
                }
            }
        }
    }
}
