//! Dataset validation report.

use crate::source;
use campr_data::{Cluster, ParkIndex};
use campr_utils::dates::format_date;
use log::info;

/// One line per fact, in the order they are printed.
pub fn report(index: &ParkIndex) -> Vec<String> {
    let (start, end) = index.date_domain();
    let camping: usize = index.parks().iter().map(|g| g.records.len()).sum();
    let planning: usize = index.planning_groups().iter().map(|g| g.records.len()).sum();

    let mut lines = vec![
        format!("parks: {}", index.parks().len()),
        format!("camping records: {}", camping),
        format!(
            "planning records: {} across {} parks",
            planning,
            index.planning_groups().len()
        ),
        format!("date domain: {} to {}", format_date(&start), format_date(&end)),
    ];

    for cluster in Cluster::ALL {
        let count = index
            .parks()
            .iter()
            .filter(|g| index.cluster(&g.key) == Some(cluster))
            .count();
        lines.push(format!("cluster {}: {} parks", cluster, count));
    }

    let without_planning: Vec<&str> = index
        .parks()
        .iter()
        .filter(|g| index.planning(&g.key).is_none())
        .map(|g| g.display.as_str())
        .collect();
    if !without_planning.is_empty() {
        lines.push(format!("no booking data: {}", without_planning.join(", ")));
    }
    lines
}

pub async fn run_validate(source: &str) -> anyhow::Result<()> {
    let index = source::load_index(source).await?;
    info!("Dataset {} is valid", source);
    for line in report(&index) {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../fixtures/npscampr.json");

    #[test]
    fn test_report_on_fixture() {
        let index = source::index_from_json(FIXTURE).unwrap();
        let lines = report(&index);
        assert_eq!(lines[0], "parks: 3");
        assert_eq!(lines[1], "camping records: 18");
        assert_eq!(lines[2], "planning records: 9 across 2 parks");
        assert_eq!(lines[3], "date domain: 2019-11-15 to 2020-07-06");
        assert_eq!(lines[4], "cluster 1: 1 parks");
        assert_eq!(lines[6], "cluster 3: 1 parks");
        assert_eq!(lines.last().unwrap(), "no booking data: Sequoia & Kings");
    }
}
