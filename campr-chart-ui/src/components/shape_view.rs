//! Draws one scene shape as SVG elements.

use campr_scene::shape::{fmt_num, Area, Axis, Rect, Shape, Text, TICK_LABEL_OFFSET, TICK_SIZE};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ShapeViewProps {
    pub shape: Shape,
    /// Extra class on the element, e.g. to fade in a freshly mounted area
    #[props(default = String::new())]
    pub class: String,
}

#[component]
pub fn ShapeView(props: ShapeViewProps) -> Element {
    match props.shape {
        Shape::Area(area) => area_view(&area, &props.class),
        Shape::Rect(rect) => rect_view(&rect),
        Shape::Text(text) => text_view(&text),
        Shape::Axis(axis) => axis_view(&axis),
    }
}

fn area_view(area: &Area, class: &str) -> Element {
    let id = area.id.clone().unwrap_or_default();
    let d = area.path_data();
    rsx! {
        path {
            id: "{id}",
            class: "{class}",
            d: "{d}",
            fill: area.fill,
            stroke: area.stroke,
            opacity: "{area.opacity}",
        }
    }
}

fn rect_view(rect: &Rect) -> Element {
    let id = rect.id.clone().unwrap_or_default();
    let stroke = rect.stroke.unwrap_or("none");
    let (x, y) = (fmt_num(rect.x), fmt_num(rect.y));
    let (width, height) = (fmt_num(rect.width), fmt_num(rect.height));
    rsx! {
        rect {
            id: "{id}",
            x: "{x}",
            y: "{y}",
            width: "{width}",
            height: "{height}",
            fill: rect.fill,
            stroke: stroke,
            opacity: "{rect.opacity}",
        }
    }
}

fn text_view(text: &Text) -> Element {
    let id = text.id.clone().unwrap_or_default();
    let (x, y) = (fmt_num(text.x), fmt_num(text.y));
    rsx! {
        text {
            id: "{id}",
            x: "{x}",
            y: "{y}",
            "text-anchor": "middle",
            "font-size": "{text.font_size}px",
            fill: text.fill,
            opacity: "{text.opacity}",
            style: "transition: opacity 0.5s;",
            "{text.text}"
        }
    }
}

fn axis_view(axis: &Axis) -> Element {
    let k = axis.direction();
    let tick_y2 = fmt_num(k * TICK_SIZE);
    let label_y = fmt_num(k * TICK_LABEL_OFFSET);
    let label_dy = if k > 0.0 { "0.71em" } else { "0em" };
    let domain = axis.domain_path();
    let axis_y = fmt_num(axis.y);
    let ticks: Vec<(String, String)> = axis
        .ticks
        .iter()
        .map(|t| (fmt_num(t.x), t.label.clone()))
        .collect();
    rsx! {
        g {
            class: "axis",
            transform: "translate(0,{axis_y})",
            fill: "none",
            "font-size": "10",
            "text-anchor": "middle",
            path { class: "domain", stroke: "currentColor", d: "{domain}" }
            for (tick_x, label) in ticks {
                g {
                    key: "{tick_x}",
                    class: "tick",
                    transform: "translate({tick_x},0)",
                    line { stroke: "currentColor", "y2": "{tick_y2}" }
                    text {
                        fill: "currentColor",
                        y: "{label_y}",
                        "dy": label_dy,
                        "{label}"
                    }
                }
            }
        }
    }
}
