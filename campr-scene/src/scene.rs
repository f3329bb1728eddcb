//! Scene builders: selection stage + data → shapes.

use crate::dims::ChartDimensions;
use crate::error::SelectionError;
use crate::scale::ScaleSet;
use crate::shape::{Area, AreaPoint, Axis, AxisOrient, Rect, Shape, Text, Tick};
use crate::stage::{Annotation, LayerId, Stage};
use campr_data::{CampingRecord, Cluster, ParkGroup, ParkIndex, ParkKey};
use campr_utils::dates::month_label;
use chrono::NaiveDate;
use serde::Serialize;

/// At most this many month ticks on the inset axes.
const MAX_AXIS_TICKS: usize = 10;

/// Opacity of a chart area at rest.
pub const AREA_OPACITY: f64 = 0.85;
/// Opacity of a hovered small-multiple area.
pub const AREA_HOVER_OPACITY: f64 = 1.0;
/// Opacity of a shown annotation.
pub const ANNOTATION_OPACITY: f64 = 0.8;
/// Opacity of the "select a park" instruction while shown.
pub const INSTRUCTION_OPACITY: f64 = 0.6;

/// Stroke and opacity of a small-multiple area, and fill of its label.
pub fn panel_style(hovered: bool) -> (&'static str, f64, &'static str) {
    if hovered {
        ("black", AREA_HOVER_OPACITY, "black")
    } else {
        ("grey", AREA_OPACITY, "grey")
    }
}

/// Opacity of a date bar. Selection wins over hover.
pub fn date_bar_opacity(selected: bool, hovered: bool) -> f64 {
    if selected {
        0.75
    } else if hovered {
        0.5
    } else {
        0.0
    }
}

/// One small multiple, in panel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub key: ParkKey,
    pub cluster: Cluster,
    pub area: Area,
    pub label: Text,
}

/// A mounted inset layer and its shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub id: LayerId,
    pub shapes: Vec<Shape>,
}

/// Everything drawn in the inset for a stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsetScene {
    /// Backdrop and annotations, always present
    pub furniture: Vec<Shape>,
    /// Mounted layers, oldest first
    pub layers: Vec<Layer>,
}

/// One panel per park, in group order. A park without a cluster is an
/// error rather than a missing panel.
pub fn small_multiples(index: &ParkIndex, scales: &ScaleSet) -> Result<Vec<Panel>, SelectionError> {
    index
        .parks()
        .iter()
        .map(|group| {
            let cluster = park_cluster(&group.key, index)?;
            Ok(small_multiple(group, cluster, scales))
        })
        .collect()
}

/// Area of occupancy by week plus the park's short-name above it.
pub fn small_multiple(group: &ParkGroup<CampingRecord>, cluster: Cluster, scales: &ScaleSet) -> Panel {
    let (stroke, opacity, label_fill) = panel_style(false);
    let baseline = scales.panel_occupancy.map(0.0);
    let points = group
        .records
        .iter()
        .map(|r| AreaPoint {
            x: scales.panel_week.map(f64::from(r.week)),
            y0: baseline,
            y1: scales.panel_occupancy.map(r.sres),
        })
        .collect();

    Panel {
        key: group.key.clone(),
        cluster,
        area: Area {
            id: Some(group.key.to_string()),
            points,
            fill: scales.palette.color(cluster),
            stroke,
            opacity,
        },
        label: Text {
            id: Some(group.key.to_string()),
            x: scales.panel_week.map(25.0),
            y: -5.0,
            text: group.display.clone(),
            font_size: 14.0,
            fill: label_fill,
            opacity: 1.0,
        },
    }
}

/// Backdrop box and the three annotations, shown or hidden per the stage.
pub fn furniture(stage: &Stage, dims: &ChartDimensions) -> Vec<Shape> {
    let w = dims.inset_width;
    let h = dims.inset_height;
    let shown = |annotation, opacity| {
        if stage.is_visible(annotation) {
            opacity
        } else {
            0.0
        }
    };

    vec![
        Shape::Rect(Rect {
            id: Some("box1".to_string()),
            x: 1.0,
            y: 1.0,
            width: w,
            height: h,
            fill: "#E8E8E8",
            stroke: Some("#E8E8E8"),
            opacity: 0.5,
            date: None,
        }),
        Shape::Text(Text {
            id: Some("instruction".to_string()),
            x: w * 0.5,
            y: h * 0.5,
            text: "select a park".to_string(),
            font_size: 25.0,
            fill: "grey",
            opacity: shown(Annotation::Instruction, INSTRUCTION_OPACITY),
        }),
        Shape::Text(Text {
            id: Some("campsite-demand".to_string()),
            x: w * 0.15,
            y: h * 0.30,
            text: "Campsite Demand".to_string(),
            font_size: 14.0,
            fill: "grey",
            opacity: shown(Annotation::CampsiteDemand, ANNOTATION_OPACITY),
        }),
        Shape::Text(Text {
            id: Some("campsite-window".to_string()),
            x: w * 0.15,
            y: h * 0.95,
            text: "Planning Window".to_string(),
            font_size: 14.0,
            fill: "grey",
            opacity: shown(Annotation::PlanningWindow, ANNOTATION_OPACITY),
        }),
    ]
}

/// Build the shapes of one mounted layer.
pub fn layer(
    id: &LayerId,
    index: &ParkIndex,
    scales: &ScaleSet,
    dims: &ChartDimensions,
    highlighted: Option<NaiveDate>,
) -> Result<Layer, SelectionError> {
    let shapes = match id {
        LayerId::Demand(key) => demand_shapes(key, index, scales, dims, highlighted)?,
        LayerId::Booking(key, date) => booking_shapes(key, *date, index, scales, dims)?,
    };
    Ok(Layer {
        id: id.clone(),
        shapes,
    })
}

/// Furniture plus every layer the stage holds.
pub fn inset(
    stage: &Stage,
    index: &ParkIndex,
    scales: &ScaleSet,
    dims: &ChartDimensions,
) -> Result<InsetScene, SelectionError> {
    let layers = stage
        .layers()
        .iter()
        .map(|id| layer(id, index, scales, dims, stage.highlighted()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(InsetScene {
        furniture: furniture(stage, dims),
        layers,
    })
}

fn park_cluster(key: &ParkKey, index: &ParkIndex) -> Result<Cluster, SelectionError> {
    index
        .cluster(key)
        .ok_or_else(|| SelectionError::UnknownPark(key.clone()))
}

/// Month axis with labels, or blank labels when `labeled` is false.
fn month_axis(scales: &ScaleSet, orient: AxisOrient, y: f64, labeled: bool) -> Axis {
    let ticks = scales
        .date
        .month_ticks(MAX_AXIS_TICKS)
        .into_iter()
        .map(|d| Tick {
            x: scales.date.map(d),
            label: if labeled { month_label(&d) } else { String::new() },
        })
        .collect();
    Axis {
        orient,
        y,
        range: scales.date.range(),
        ticks,
    }
}

fn demand_shapes(
    key: &ParkKey,
    index: &ParkIndex,
    scales: &ScaleSet,
    dims: &ChartDimensions,
    highlighted: Option<NaiveDate>,
) -> Result<Vec<Shape>, SelectionError> {
    let group = index
        .demand(key)
        .ok_or_else(|| SelectionError::UnknownPark(key.clone()))?;
    let cluster = park_cluster(key, index)?;
    let baseline = scales.detail_occupancy.range.0;

    let mut shapes = Vec::with_capacity(group.records.len() + 3);
    shapes.push(Shape::Area(Area {
        id: Some("upper-area".to_string()),
        points: group
            .records
            .iter()
            .map(|r| AreaPoint {
                x: scales.date.map(r.pseudo_date),
                y0: baseline,
                y1: scales.detail_occupancy.map(r.sres),
            })
            .collect(),
        fill: scales.palette.color(cluster),
        stroke: "grey",
        opacity: AREA_OPACITY,
    }));
    shapes.push(Shape::Axis(month_axis(
        scales,
        AxisOrient::Bottom,
        dims.demand_baseline(),
        true,
    )));

    let title = group
        .records
        .first()
        .map(|r| r.park_long.as_str())
        .filter(|long| !long.is_empty())
        .unwrap_or(&group.display);
    shapes.push(Shape::Text(Text {
        id: None,
        x: scales.inset_week.map(26.5),
        y: 20.0,
        text: title.to_string(),
        font_size: 18.0,
        fill: "#505050",
        opacity: 1.0,
    }));

    let bar_top = scales.detail_occupancy.map(1.0);
    let bar_width = scales.date_bar_width();
    for record in &group.records {
        shapes.push(Shape::Rect(Rect {
            id: Some("date-select".to_string()),
            x: scales.date.map(record.pseudo_date),
            y: bar_top,
            width: bar_width,
            height: dims.demand_baseline() - bar_top,
            fill: "grey",
            stroke: None,
            opacity: date_bar_opacity(highlighted == Some(record.pseudo_date), false),
            date: Some(record.pseudo_date),
        }));
    }

    Ok(shapes)
}

fn booking_shapes(
    key: &ParkKey,
    date: NaiveDate,
    index: &ParkIndex,
    scales: &ScaleSet,
    dims: &ChartDimensions,
) -> Result<Vec<Shape>, SelectionError> {
    let cluster = park_cluster(key, index)?;
    if index.planning(key).is_none() {
        log::warn!("[campr] scene: no planning records for park {}", key);
    }
    let bookings = index.bookings(key, date);
    let baseline = scales.booking_pct.map(0.0);

    let mut shapes = Vec::with_capacity(bookings.len() + 2);
    shapes.push(Shape::Area(Area {
        id: Some("lower-plot".to_string()),
        points: bookings
            .iter()
            .map(|b| AreaPoint {
                x: scales.date.map(b.pseudo_book),
                y0: baseline,
                y1: scales.booking_pct.map(b.pct),
            })
            .collect(),
        fill: scales.palette.color(cluster),
        stroke: "grey",
        opacity: AREA_OPACITY,
    }));
    for booking in &bookings {
        shapes.push(Shape::Rect(Rect {
            id: Some("lower-rect".to_string()),
            x: scales.date.map(booking.pseudo_book),
            y: baseline,
            width: 1.0,
            height: (booking.pct - 5.0).max(0.0),
            fill: "grey",
            stroke: None,
            opacity: 0.4,
            date: None,
        }));
    }
    shapes.push(Shape::Axis(month_axis(
        scales,
        AxisOrient::Top,
        dims.booking_axis_y(),
        false,
    )));

    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{SelectionEvent, Session};
    use campr_data::{Dataset, PlanningRecord};

    const FIXTURE: &str = include_str!("../../fixtures/npscampr.json");

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn key(s: &str) -> ParkKey {
        ParkKey::from_display(s)
    }

    fn setup(json: &str) -> (ParkIndex, ScaleSet, ChartDimensions) {
        let index = ParkIndex::build(Dataset::from_json(json).unwrap()).unwrap();
        let dims = ChartDimensions::default();
        let scales = ScaleSet::new(&dims, index.date_domain());
        (index, scales, dims)
    }

    fn zion_dataset() -> String {
        r#"{
            "parks": [
                {"parkShort":"Zion","week":1,"sres":0.2,"cluster":1,"pseudo_date":"2020-01-06"},
                {"parkShort":"Zion","week":2,"sres":0.3,"cluster":1,"pseudo_date":"2020-01-13"}
            ],
            "planning": [
                {"parkShort":"Zion","pseudo_date":"2020-01-06","pseudo_book":"2019-10-01","pct":10,"cluster":1}
            ]
        }"#
        .to_string()
    }

    fn areas(shapes: &[Shape]) -> Vec<&Area> {
        shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Area(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    fn rects(shapes: &[Shape]) -> Vec<&Rect> {
        shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Rect(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_small_multiples_one_per_park_in_order() {
        let (index, scales, _) = setup(FIXTURE);
        let panels = small_multiples(&index, &scales).unwrap();
        let keys: Vec<&str> = panels.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["Zion", "GrandCanyon", "SequoiaKings"]);
        assert_eq!(panels[2].label.text, "Sequoia & Kings");
        assert_eq!(panels[2].area.id.as_deref(), Some("SequoiaKings"));
        assert_eq!(panels[2].label.id, panels[2].area.id);
        assert_eq!(panels[0].area.fill, "#fbb4ae");
        assert_eq!(panels[1].area.fill, "#ccebc5");
        assert_eq!(panels[2].area.fill, "#b3cde3");
    }

    #[test]
    fn test_panel_cluster_lookup_miss_is_an_error() {
        let (index, _, _) = setup(FIXTURE);
        assert_eq!(park_cluster(&key("Zion"), &index), Ok(Cluster::One));
        assert_eq!(
            park_cluster(&key("Nowhere"), &index),
            Err(SelectionError::UnknownPark(key("Nowhere")))
        );
    }

    #[test]
    fn test_small_multiple_geometry() {
        let (index, scales, _) = setup(&zion_dataset());
        let panel = &small_multiples(&index, &scales).unwrap()[0];
        let p = panel.area.points[0];
        assert_close(p.x, scales.panel_week.map(1.0));
        assert_close(p.y0, 50.0);
        assert_close(p.y1, 50.0 - 0.2 * 49.0);
        assert_close(panel.label.x, scales.panel_week.map(25.0));
        assert_close(panel.label.y, -5.0);
        assert_eq!(panel.label.fill, "grey");
        assert_close(panel.area.opacity, AREA_OPACITY);
    }

    #[test]
    fn test_panel_hover_style() {
        assert_eq!(panel_style(true), ("black", 1.0, "black"));
        assert_eq!(panel_style(false), ("grey", 0.85, "grey"));
    }

    #[test]
    fn test_date_bar_opacity() {
        assert_close(date_bar_opacity(false, false), 0.0);
        assert_close(date_bar_opacity(false, true), 0.5);
        assert_close(date_bar_opacity(true, false), 0.75);
        assert_close(date_bar_opacity(true, true), 0.75);
    }

    #[test]
    fn test_idle_inset_has_only_furniture() {
        let (index, scales, dims) = setup(FIXTURE);
        let scene = inset(&Stage::new(), &index, &scales, &dims).unwrap();
        assert!(scene.layers.is_empty());
        assert_eq!(scene.furniture.len(), 4);
        match &scene.furniture[1] {
            Shape::Text(t) => {
                assert_eq!(t.text, "select a park");
                assert_close(t.opacity, INSTRUCTION_OPACITY);
            }
            other => panic!("unexpected shape {other:?}"),
        }
        match &scene.furniture[2] {
            Shape::Text(t) => assert_close(t.opacity, 0.0),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_demand_chart_passes_through_records() {
        let (index, scales, dims) = setup(&zion_dataset());
        let mut session = Session::new();
        session
            .dispatch(&SelectionEvent::ParkClicked(key("Zion")), &index)
            .unwrap();
        let scene = inset(session.stage(), &index, &scales, &dims).unwrap();
        assert_eq!(scene.layers.len(), 1);
        assert_eq!(scene.layers[0].id, LayerId::Demand(key("Zion")));

        let area = areas(&scene.layers[0].shapes)[0];
        assert_eq!(area.points.len(), 2);
        assert_close(area.points[0].x, scales.date.map(date(2020, 1, 6)));
        assert_close(area.points[0].y1, scales.detail_occupancy.map(0.2));
        assert_close(area.points[1].x, scales.date.map(date(2020, 1, 13)));
        assert_close(area.points[1].y1, scales.detail_occupancy.map(0.3));
        assert!(area.points.iter().all(|p| p.y0 == 150.0));
        assert!(area.points[0].x < area.points[1].x);
        assert!(area.points[1].y1 < area.points[0].y1);

        match &scene.furniture[2] {
            Shape::Text(t) => assert_close(t.opacity, ANNOTATION_OPACITY),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_demand_chart_furniture() {
        let (index, scales, dims) = setup(FIXTURE);
        let layer = layer(&LayerId::Demand(key("Zion")), &index, &scales, &dims, None).unwrap();

        let title = layer
            .shapes
            .iter()
            .find_map(|s| match s {
                Shape::Text(t) => Some(t),
                _ => None,
            })
            .unwrap();
        assert_eq!(title.text, "Zion National Park");
        assert_close(title.x, scales.inset_week.map(26.5));

        let axis = layer
            .shapes
            .iter()
            .find_map(|s| match s {
                Shape::Axis(a) => Some(a),
                _ => None,
            })
            .unwrap();
        assert_eq!(axis.orient, AxisOrient::Bottom);
        assert_close(axis.y, 150.0);
        assert!(axis.ticks.iter().all(|t| t.label.len() == 3));
        assert_eq!(axis.ticks[0].label, "Dec");
    }

    #[test]
    fn test_title_falls_back_to_short_name() {
        let (index, scales, dims) = setup(&zion_dataset());
        let layer = layer(&LayerId::Demand(key("Zion")), &index, &scales, &dims, None).unwrap();
        assert!(layer
            .shapes
            .iter()
            .any(|s| matches!(s, Shape::Text(t) if t.text == "Zion")));
    }

    #[test]
    fn test_date_bars_one_per_record_with_fixed_width() {
        let (index, scales, dims) = setup(FIXTURE);
        let highlighted = Some(date(2020, 6, 15));
        let layer = layer(
            &LayerId::Demand(key("Zion")),
            &index,
            &scales,
            &dims,
            highlighted,
        )
        .unwrap();
        let bars = rects(&layer.shapes);
        assert_eq!(bars.len(), 6);
        for bar in &bars {
            assert_close(bar.width, scales.date_bar_width());
            assert_close(bar.y, 40.0);
            assert_close(bar.height, 110.0);
            let d = bar.date.unwrap();
            assert_close(bar.x, scales.date.map(d));
        }
        let lit: Vec<_> = bars.iter().filter(|b| b.opacity > 0.0).collect();
        assert_eq!(lit.len(), 1);
        assert_eq!(lit[0].date, highlighted);
        assert_close(lit[0].opacity, 0.75);
    }

    #[test]
    fn test_booking_chart_marker() {
        let (index, scales, dims) = setup(&zion_dataset());
        let mut session = Session::new();
        session
            .dispatch(&SelectionEvent::ParkClicked(key("Zion")), &index)
            .unwrap();
        session
            .dispatch(
                &SelectionEvent::DateClicked(key("Zion"), date(2020, 1, 6)),
                &index,
            )
            .unwrap();
        let scene = inset(session.stage(), &index, &scales, &dims).unwrap();
        assert_eq!(scene.layers.len(), 2);
        let lower = &scene.layers[1];
        assert_eq!(lower.id, LayerId::Booking(key("Zion"), date(2020, 1, 6)));

        let markers = rects(&lower.shapes);
        assert_eq!(markers.len(), 1);
        assert_close(markers[0].x, scales.date.map(date(2019, 10, 1)));
        assert_close(markers[0].y, scales.booking_pct.map(0.0));
        assert_close(markers[0].height, 5.0);
        assert_close(markers[0].width, 1.0);

        let area = areas(&lower.shapes)[0];
        assert_close(area.points[0].y1, scales.booking_pct.map(10.0));
        assert_close(area.points[0].y0, 175.0);

        let axis = lower
            .shapes
            .iter()
            .find_map(|s| match s {
                Shape::Axis(a) => Some(a),
                _ => None,
            })
            .unwrap();
        assert_eq!(axis.orient, AxisOrient::Top);
        assert_close(axis.y, 174.0);
        assert!(axis.ticks.iter().all(|t| t.label.is_empty()));
    }

    #[test]
    fn test_booking_marker_height_clamped_at_zero() {
        let (index, scales, dims) = setup(FIXTURE);
        // Grand Canyon's earliest booking for 2020-06-01 is at 2%.
        let layer = layer(
            &LayerId::Booking(key("GrandCanyon"), date(2020, 6, 1)),
            &index,
            &scales,
            &dims,
            None,
        )
        .unwrap();
        let markers = rects(&layer.shapes);
        assert_eq!(markers.len(), 3);
        assert_close(markers[0].height, 0.0);
        assert_close(markers[1].height, 50.0);
    }

    #[test]
    fn test_park_without_planning_gets_empty_booking_chart() {
        let (index, scales, dims) = setup(FIXTURE);
        let layer = layer(
            &LayerId::Booking(key("SequoiaKings"), date(2020, 6, 1)),
            &index,
            &scales,
            &dims,
            None,
        )
        .unwrap();
        assert!(rects(&layer.shapes).is_empty());
        assert!(areas(&layer.shapes)[0].points.is_empty());
        assert_eq!(areas(&layer.shapes)[0].fill, "#b3cde3");
    }

    #[test]
    fn test_booking_area_uses_park_cluster() {
        let (index, scales, dims) = setup(FIXTURE);
        let bookings: Vec<&PlanningRecord> = index.bookings(&key("Zion"), date(2020, 6, 1));
        assert_eq!(bookings.len(), 4);
        let layer = layer(
            &LayerId::Booking(key("Zion"), date(2020, 6, 1)),
            &index,
            &scales,
            &dims,
            None,
        )
        .unwrap();
        let area = areas(&layer.shapes)[0];
        assert_eq!(area.fill, "#fbb4ae");
        assert_eq!(area.points.len(), 4);
    }

    #[test]
    fn test_unknown_layer_park_is_an_error() {
        let (index, scales, dims) = setup(FIXTURE);
        let err = layer(&LayerId::Demand(key("Nowhere")), &index, &scales, &dims, None)
            .unwrap_err();
        assert_eq!(err, SelectionError::UnknownPark(key("Nowhere")));
    }
}
