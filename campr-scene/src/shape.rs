//! Declarative shapes making up a scene.
//!
//! Shapes carry final pixel coordinates; renderers only translate them
//! into elements.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

/// Length of an axis tick line.
pub const TICK_SIZE: f64 = 6.0;
/// Distance from the axis line to a tick label.
pub const TICK_LABEL_OFFSET: f64 = 9.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Area(Area),
    Rect(Rect),
    Text(Text),
    Axis(Axis),
}

/// One sample of a filled area: x with a baseline `y0` and a top `y1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaPoint {
    pub x: f64,
    pub y0: f64,
    pub y1: f64,
}

/// Filled area between a baseline and a curve, drawn as straight segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area {
    pub id: Option<String>,
    pub points: Vec<AreaPoint>,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub opacity: f64,
}

impl Area {
    /// SVG path data: along the top curve, back along the baseline, closed.
    /// Empty when there are no points.
    pub fn path_data(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{}{},{}", cmd, fmt_num(p.x), fmt_num(p.y1));
        }
        for p in self.points.iter().rev() {
            let _ = write!(d, "L{},{}", fmt_num(p.x), fmt_num(p.y0));
        }
        if !d.is_empty() {
            d.push('Z');
        }
        d
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rect {
    pub id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub stroke: Option<&'static str>,
    pub opacity: f64,
    /// Set on the selectable date bars of the demand chart.
    pub date: Option<NaiveDate>,
}

/// Text anchored at its middle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub fill: &'static str,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrient {
    /// Ticks and labels above the line
    Top,
    /// Ticks and labels below the line
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub x: f64,
    pub label: String,
}

/// Horizontal axis translated to `y`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub orient: AxisOrient,
    pub y: f64,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// +1 when ticks point down, -1 when up.
    pub fn direction(&self) -> f64 {
        match self.orient {
            AxisOrient::Top => -1.0,
            AxisOrient::Bottom => 1.0,
        }
    }

    /// Path of the axis line with its outer ticks, relative to `y`.
    pub fn domain_path(&self) -> String {
        let k = self.direction() * TICK_SIZE;
        format!(
            "M{},{}V0H{}V{}",
            fmt_num(self.range.0),
            fmt_num(k),
            fmt_num(self.range.1),
            fmt_num(k)
        )
    }
}

/// Format a coordinate compactly: at most three decimals, no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
