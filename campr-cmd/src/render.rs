//! Offline rendering of the inset and small multiples.
//!
//! Replays the clicks a user would make (park, then optionally a week) through
//! the same selection session the web chart uses, then serializes the
//! resulting scene.

use crate::source;
use campr_data::{ParkIndex, ParkKey};
use campr_scene::scene::{self, InsetScene};
use campr_scene::{svg, ChartDimensions, ScaleSet, SelectionEvent, Session};
use campr_utils::dates::parse_date;
use chrono::NaiveDate;
use log::info;

pub struct RenderArgs<'a> {
    pub source: &'a str,
    pub park: &'a str,
    pub date: Option<&'a str>,
    pub out: &'a str,
    pub panels: Option<&'a str>,
    pub columns: usize,
    pub json: bool,
}

/// Inset scene after clicking `park` and then, if given, `date`.
///
/// `park` may be either the short-name or its key.
pub fn render_inset(
    index: &ParkIndex,
    scales: &ScaleSet,
    dims: &ChartDimensions,
    park: &str,
    date: Option<NaiveDate>,
) -> anyhow::Result<InsetScene> {
    let key = ParkKey::from_display(park);
    let mut session = Session::new();
    session.dispatch(&SelectionEvent::ParkClicked(key.clone()), index)?;
    if let Some(date) = date {
        session.dispatch(&SelectionEvent::DateClicked(key, date), index)?;
    }
    Ok(scene::inset(session.stage(), index, scales, dims)?)
}

pub async fn run_render(args: RenderArgs<'_>) -> anyhow::Result<()> {
    let date = args.date.map(parse_date).transpose()?;
    let index = source::load_index(args.source).await?;
    let dims = ChartDimensions::default();
    let scales = ScaleSet::new(&dims, index.date_domain());

    let inset = render_inset(&index, &scales, &dims, args.park, date)?;
    let body = if args.json {
        serde_json::to_string_pretty(&inset)?
    } else {
        svg::inset_document(&inset, &dims)
    };
    std::fs::write(args.out, body)?;
    info!("Wrote inset for {} to {}", args.park, args.out);

    if let Some(path) = args.panels {
        let panels = scene::small_multiples(&index, &scales)?;
        std::fs::write(path, svg::panels_document(&panels, &dims, args.columns))?;
        info!("Wrote {} panels to {}", panels.len(), path);
    }
    Ok(())
}
