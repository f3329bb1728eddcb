//! Per-park overview, as a table or CSV.

use crate::source;
use campr_data::ParkIndex;
use log::info;
use std::io::Write;

const HEADER: [&str; 8] = [
    "key",
    "park",
    "name",
    "cluster",
    "weeks",
    "peak_week",
    "peak_sres",
    "bookings",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ParkSummary {
    pub key: String,
    pub display: String,
    pub long_name: String,
    pub cluster: u32,
    pub weeks: usize,
    pub peak_week: i32,
    pub peak_sres: f64,
    pub bookings: usize,
}

impl ParkSummary {
    fn fields(&self) -> [String; 8] {
        [
            self.key.clone(),
            self.display.clone(),
            self.long_name.clone(),
            self.cluster.to_string(),
            self.weeks.to_string(),
            self.peak_week.to_string(),
            format!("{:.2}", self.peak_sres),
            self.bookings.to_string(),
        ]
    }
}

/// One summary per park, in group order.
pub fn summarize(index: &ParkIndex) -> Vec<ParkSummary> {
    index
        .parks()
        .iter()
        .map(|group| {
            let peak = group
                .records
                .iter()
                .max_by(|a, b| a.sres.total_cmp(&b.sres));
            ParkSummary {
                key: group.key.to_string(),
                display: group.display.clone(),
                long_name: group
                    .records
                    .first()
                    .map(|r| r.park_long.clone())
                    .unwrap_or_default(),
                cluster: index.cluster(&group.key).map(|c| c.id()).unwrap_or_default(),
                weeks: group.records.len(),
                peak_week: peak.map(|r| r.week).unwrap_or_default(),
                peak_sres: peak.map(|r| r.sres).unwrap_or_default(),
                bookings: index
                    .planning(&group.key)
                    .map(|g| g.records.len())
                    .unwrap_or_default(),
            }
        })
        .collect()
}

pub fn write_csv<W: Write>(summaries: &[ParkSummary], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for summary in summaries {
        wtr.write_record(summary.fields())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Fixed-width table for the terminal.
pub fn table(summaries: &[ParkSummary]) -> String {
    let rows: Vec<[String; 8]> = summaries.iter().map(|s| s.fields()).collect();
    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, field) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(field.chars().count());
        }
    }

    let line = |fields: &[String]| -> String {
        fields
            .iter()
            .zip(widths.iter())
            .map(|(field, width)| format!("{:<width$}", field, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(&HEADER.map(String::from)[..]);
    out.push('\n');
    for row in &rows {
        out.push_str(&line(&row[..]));
        out.push('\n');
    }
    out
}

pub async fn run_summary(source: &str, csv_path: Option<&str>) -> anyhow::Result<()> {
    let index = source::load_index(source).await?;
    let summaries = summarize(&index);

    match csv_path {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_csv(&summaries, file)?;
            info!("Wrote {} park summaries to {}", summaries.len(), path);
        }
        None => print!("{}", table(&summaries)),
    }
    Ok(())
}
