//! Standalone SVG text for scenes, used for export outside the browser.

use crate::dims::ChartDimensions;
use crate::scene::{InsetScene, Panel};
use crate::shape::{fmt_num, Area, Axis, Rect, Shape, Text, TICK_LABEL_OFFSET, TICK_SIZE};
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Escape text content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// The inset as a complete SVG document.
pub fn inset_document(scene: &InsetScene, dims: &ChartDimensions) -> String {
    let (w, h) = dims.inset_outer();
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{}" height="{}">"#,
        fmt_num(w),
        fmt_num(h)
    );
    for shape in &scene.furniture {
        write_shape(&mut out, shape);
    }
    for layer in &scene.layers {
        let class = if layer.id.is_demand() { "parkarea" } else { "lowerarea" };
        let _ = writeln!(out, r#"<g class="{class}">"#);
        for shape in &layer.shapes {
            write_shape(&mut out, shape);
        }
        out.push_str("</g>\n");
    }
    out.push_str("</svg>\n");
    out
}

/// All small multiples in a grid of `columns` panels per row.
pub fn panels_document(panels: &[Panel], dims: &ChartDimensions, columns: usize) -> String {
    let columns = columns.max(1);
    let (pw, ph) = dims.panel_outer();
    let (ox, oy) = dims.panel_offset();
    let rows = panels.len().div_ceil(columns);
    let width = pw * columns.min(panels.len().max(1)) as f64;
    let height = ph * rows as f64;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{}" height="{}">"#,
        fmt_num(width),
        fmt_num(height)
    );
    for (i, panel) in panels.iter().enumerate() {
        let x = pw * (i % columns) as f64;
        let y = ph * (i / columns) as f64;
        let _ = writeln!(
            out,
            r#"<svg x="{}" y="{}" width="{}" height="{}"><g transform="translate({},{})">"#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(pw),
            fmt_num(ph),
            fmt_num(ox),
            fmt_num(oy)
        );
        write_area(&mut out, &panel.area);
        write_text(&mut out, &panel.label, Some("park-labels"));
        out.push_str("</g></svg>\n");
    }
    out.push_str("</svg>\n");
    out
}

fn write_shape(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Area(area) => write_area(out, area),
        Shape::Rect(rect) => write_rect(out, rect),
        Shape::Text(text) => write_text(out, text, None),
        Shape::Axis(axis) => write_axis(out, axis),
    }
}

fn id_attr(id: &Option<String>) -> String {
    id.as_ref()
        .map(|id| format!(r#" id="{}""#, escape(id)))
        .unwrap_or_default()
}

fn write_area(out: &mut String, area: &Area) {
    let _ = writeln!(
        out,
        r#"<path{} d="{}" fill="{}" stroke="{}" opacity="{}"/>"#,
        id_attr(&area.id),
        area.path_data(),
        area.fill,
        area.stroke,
        fmt_num(area.opacity)
    );
}

fn write_rect(out: &mut String, rect: &Rect) {
    let stroke = rect
        .stroke
        .map(|s| format!(r#" stroke="{s}""#))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        r#"<rect{} x="{}" y="{}" width="{}" height="{}" fill="{}"{} opacity="{}"/>"#,
        id_attr(&rect.id),
        fmt_num(rect.x),
        fmt_num(rect.y),
        fmt_num(rect.width),
        fmt_num(rect.height),
        rect.fill,
        stroke,
        fmt_num(rect.opacity)
    );
}

fn write_text(out: &mut String, text: &Text, class: Option<&str>) {
    let class = class
        .map(|c| format!(r#" class="{c}""#))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        r#"<text{}{} x="{}" y="{}" text-anchor="middle" font-size="{}px" fill="{}" opacity="{}">{}</text>"#,
        class,
        id_attr(&text.id),
        fmt_num(text.x),
        fmt_num(text.y),
        fmt_num(text.font_size),
        text.fill,
        fmt_num(text.opacity),
        escape(&text.text)
    );
}

fn write_axis(out: &mut String, axis: &Axis) {
    let k = axis.direction();
    let _ = writeln!(
        out,
        r#"<g class="axis" transform="translate(0,{})" fill="none" font-size="10" text-anchor="middle">"#,
        fmt_num(axis.y)
    );
    let _ = writeln!(
        out,
        r#"<path class="domain" stroke="currentColor" d="{}"/>"#,
        axis.domain_path()
    );
    for tick in &axis.ticks {
        let _ = writeln!(
            out,
            r#"<g class="tick" transform="translate({},0)"><line stroke="currentColor" y2="{}"/><text fill="currentColor" y="{}" dy="{}">{}</text></g>"#,
            fmt_num(tick.x),
            fmt_num(k * TICK_SIZE),
            fmt_num(k * TICK_LABEL_OFFSET),
            if k > 0.0 { "0.71em" } else { "0em" },
            escape(&tick.label)
        );
    }
    out.push_str("</g>\n");
}
