//! Validated, grouped view of a dataset.
//!
//! The camping and planning arrays are grouped independently; they are
//! joined by park key only when a lookup asks for both.

use crate::dataset::Dataset;
use crate::error::{DatasetError, Result};
use crate::group::{group_by_park, ParkGroup};
use crate::park_key::ParkKey;
use crate::record::{CampingRecord, Cluster, Keyed, PlanningRecord};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Weeks of a year as the week scales see them.
const WEEK_DOMAIN: RangeInclusive<i32> = 0..=53;

/// Grouped dataset with per-park lookups.
///
/// Construction checks that every cluster id is known, that a park's
/// cluster is the same across its demand records and that no two display
/// names share a normalized key. After that, `cluster()` and `demand()`
/// are total over the keys returned by `parks()`.
#[derive(Debug, Clone)]
pub struct ParkIndex {
    demand: Vec<ParkGroup<CampingRecord>>,
    planning: Vec<ParkGroup<PlanningRecord>>,
    demand_pos: HashMap<ParkKey, usize>,
    planning_pos: HashMap<ParkKey, usize>,
    clusters: HashMap<ParkKey, Cluster>,
    date_domain: (NaiveDate, NaiveDate),
}

impl ParkIndex {
    /// Group and validate a dataset.
    pub fn build(dataset: Dataset) -> Result<Self> {
        if dataset.parks.is_empty() {
            return Err(DatasetError::Empty);
        }
        let date_domain = date_domain(&dataset.parks, &dataset.planning)?;

        let demand = group_by_park(dataset.parks);
        let planning = group_by_park(dataset.planning);
        let demand_pos = key_positions(&demand)?;
        let planning_pos = key_positions(&planning)?;

        let mut clusters = HashMap::with_capacity(demand.len());
        for group in &demand {
            clusters.insert(group.key.clone(), park_cluster(group)?);
            warn_out_of_domain(group);
        }
        for group in &planning {
            for record in &group.records {
                known_cluster(&group.display, record.cluster)?;
                if !(0.0..=100.0).contains(&record.pct) {
                    log::warn!(
                        "[campr] index: booking pct {} for '{}' is outside 0-100",
                        record.pct,
                        group.display
                    );
                }
            }
            if !demand_pos.contains_key(&group.key) {
                log::warn!(
                    "[campr] index: planning records for '{}' have no demand records",
                    group.display
                );
            }
        }

        log::info!(
            "[campr] index: {} parks, {} with planning data, dates {} to {}",
            demand.len(),
            planning.len(),
            date_domain.0,
            date_domain.1
        );

        Ok(Self {
            demand,
            planning,
            demand_pos,
            planning_pos,
            clusters,
            date_domain,
        })
    }

    /// Demand groups in first-seen order; one small multiple per entry.
    pub fn parks(&self) -> &[ParkGroup<CampingRecord>] {
        &self.demand
    }

    /// Planning groups in first-seen order.
    pub fn planning_groups(&self) -> &[ParkGroup<PlanningRecord>] {
        &self.planning
    }

    pub fn demand(&self, key: &ParkKey) -> Option<&ParkGroup<CampingRecord>> {
        self.demand_pos.get(key).map(|&idx| &self.demand[idx])
    }

    pub fn planning(&self, key: &ParkKey) -> Option<&ParkGroup<PlanningRecord>> {
        self.planning_pos.get(key).map(|&idx| &self.planning[idx])
    }

    pub fn cluster(&self, key: &ParkKey) -> Option<Cluster> {
        self.clusters.get(key).copied()
    }

    /// Booking records for one park and one camping date, in input order.
    ///
    /// Empty when the park has no planning group or no bookings for the date.
    pub fn bookings(&self, key: &ParkKey, date: NaiveDate) -> Vec<&PlanningRecord> {
        self.planning(key)
            .map(|group| {
                group
                    .records
                    .iter()
                    .filter(|r| r.pseudo_date == date)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Earliest booking date through latest camping date.
    pub fn date_domain(&self) -> (NaiveDate, NaiveDate) {
        self.date_domain
    }
}

fn known_cluster(park: &str, cluster: u32) -> Result<Cluster> {
    Cluster::try_from(cluster).map_err(|cluster| DatasetError::UnknownCluster {
        park: park.to_string(),
        cluster,
    })
}

/// The cluster shared by all of a park's demand records.
fn park_cluster(group: &ParkGroup<CampingRecord>) -> Result<Cluster> {
    let first = group.records[0].cluster;
    for record in &group.records {
        if record.cluster != first {
            return Err(DatasetError::ClusterMismatch {
                park: group.display.clone(),
                expected: first,
                found: record.cluster,
            });
        }
    }
    known_cluster(&group.display, first)
}

fn key_positions<T: Keyed>(groups: &[ParkGroup<T>]) -> Result<HashMap<ParkKey, usize>> {
    let mut positions: HashMap<ParkKey, usize> = HashMap::with_capacity(groups.len());
    for (idx, group) in groups.iter().enumerate() {
        if let Some(&prev) = positions.get(&group.key) {
            return Err(DatasetError::KeyCollision {
                key: group.key.to_string(),
                first: groups[prev].display.clone(),
                second: group.display.clone(),
            });
        }
        positions.insert(group.key.clone(), idx);
    }
    Ok(positions)
}

fn date_domain(
    parks: &[CampingRecord],
    planning: &[PlanningRecord],
) -> Result<(NaiveDate, NaiveDate)> {
    let max_camp = parks
        .iter()
        .map(|r| r.pseudo_date)
        .max()
        .ok_or(DatasetError::Empty)?;
    let min_book = planning
        .iter()
        .map(|r| r.pseudo_book)
        .min()
        .or_else(|| parks.iter().map(|r| r.pseudo_date).min())
        .ok_or(DatasetError::Empty)?;
    Ok((min_book, max_camp))
}

fn warn_out_of_domain(group: &ParkGroup<CampingRecord>) {
    for record in &group.records {
        if !WEEK_DOMAIN.contains(&record.week) {
            log::warn!(
                "[campr] index: week {} for '{}' is outside 0-53",
                record.week,
                group.display
            );
        }
        if !(0.0..=1.0).contains(&record.sres) {
            log::warn!(
                "[campr] index: occupancy {} for '{}' is outside 0-1",
                record.sres,
                group.display
            );
        }
    }
}
