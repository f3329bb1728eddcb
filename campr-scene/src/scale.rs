//! Fixed-domain scales shared by every chart.
//!
//! Domains are the semantic ranges of the data (weeks of a year, a
//! fraction, a percentage), not observed extrema, so geometry stays put
//! when a dataset covers a narrower range. Only the date scale is derived
//! from data, once, from the full dataset.

use crate::dims::ChartDimensions;
use campr_data::Cluster;
use campr_utils::dates::{day_number, MonthStarts};
use chrono::NaiveDate;
use serde::Serialize;

/// Month steps tried, smallest first, when thinning axis ticks.
const MONTH_TICK_STEPS: [u32; 5] = [1, 2, 3, 6, 12];

/// Linear map from `domain` to `range`. Values outside the domain
/// extrapolate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Pixel length of one domain unit. Negative for inverted scales.
    pub fn unit(&self) -> f64 {
        self.map(1.0) - self.map(0.0)
    }
}

/// Linear-in-time scale over calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeScale {
    pub start: NaiveDate,
    pub end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> Self {
        Self {
            start,
            end,
            linear: LinearScale::new((day_number(&start), day_number(&end)), range),
        }
    }

    pub fn map(&self, date: NaiveDate) -> f64 {
        self.linear.map(day_number(&date))
    }

    pub fn range(&self) -> (f64, f64) {
        self.linear.range
    }

    /// Month starts inside the domain, thinned so at most `max_ticks` remain.
    ///
    /// Domains too long for a yearly step get a step of whole years.
    pub fn month_ticks(&self, max_ticks: usize) -> Vec<NaiveDate> {
        let max_ticks = max_ticks.max(1);
        let step = MONTH_TICK_STEPS
            .iter()
            .copied()
            .find(|&step| MonthStarts::new(self.start, self.end, step).count() <= max_ticks)
            .unwrap_or_else(|| {
                let months = MonthStarts::new(self.start, self.end, 1).count();
                let years = months.div_ceil(max_ticks).div_ceil(12);
                12 * u32::try_from(years).unwrap_or(u32::MAX / 12)
            });
        MonthStarts::new(self.start, self.end, step).collect()
    }
}

/// Ordinal cluster → fill color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClusterPalette;

impl ClusterPalette {
    pub fn color(&self, cluster: Cluster) -> &'static str {
        match cluster {
            Cluster::One => "#fbb4ae",
            Cluster::Two => "#ccebc5",
            Cluster::Three => "#b3cde3",
        }
    }
}

/// Every scale used by the inset and the small multiples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleSet {
    /// Week of year → inset x. Sizes the date bars and places the title.
    pub inset_week: LinearScale,
    /// Occupancy → inset y, upper half.
    pub detail_occupancy: LinearScale,
    /// Booking percentage → inset y, lower half.
    pub booking_pct: LinearScale,
    /// Calendar date → inset x.
    pub date: TimeScale,
    /// Week of year → panel x.
    pub panel_week: LinearScale,
    /// Occupancy → panel y.
    pub panel_occupancy: LinearScale,
    pub palette: ClusterPalette,
}

impl ScaleSet {
    /// `date_domain` is the earliest booking date through the latest
    /// camping date across the whole dataset.
    pub fn new(dims: &ChartDimensions, date_domain: (NaiveDate, NaiveDate)) -> Self {
        let w = dims.inset_width;
        let h = dims.inset_height;
        let m = dims.margin;
        Self {
            inset_week: LinearScale::new((0.0, 53.0), (1.0, w - m.right)),
            detail_occupancy: LinearScale::new((0.0, 1.0), (h * 0.5, 40.0)),
            booking_pct: LinearScale::new((0.0, 100.0), (25.0 + h * 0.5, h * 0.9)),
            date: TimeScale::new(date_domain.0, date_domain.1, (m.left, w - m.right)),
            panel_week: LinearScale::new((0.0, 53.0), (1.0, dims.panel_width)),
            panel_occupancy: LinearScale::new((0.0, 1.0), (dims.panel_height, 1.0)),
            palette: ClusterPalette,
        }
    }

    /// Width of a date bar: one week in inset pixels.
    pub fn date_bar_width(&self) -> f64 {
        self.inset_week.map(2.0) - self.inset_week.map(1.0)
    }
}
