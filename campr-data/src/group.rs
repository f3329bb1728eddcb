//! Order-preserving grouping of records by park.

use crate::park_key::ParkKey;
use crate::record::Keyed;
use std::collections::HashMap;

/// All records for one park, in their relative input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkGroup<T> {
    /// Normalized key of `display`
    pub key: ParkKey,
    /// Park short-name as it appears in the data
    pub display: String,
    pub records: Vec<T>,
}

/// Partition records by park short-name.
///
/// Groups come out in order of first appearance of their short-name, and
/// each group keeps its records in input order. Every record lands in
/// exactly one group.
pub fn group_by_park<T: Keyed>(records: Vec<T>) -> Vec<ParkGroup<T>> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ParkGroup<T>> = Vec::new();

    for record in records {
        let display = record.park_short();
        let idx = match positions.get(display) {
            Some(&idx) => idx,
            None => {
                let idx = groups.len();
                positions.insert(display.to_string(), idx);
                groups.push(ParkGroup {
                    key: ParkKey::from_display(display),
                    display: display.to_string(),
                    records: Vec::new(),
                });
                idx
            }
        };
        groups[idx].records.push(record);
    }

    groups
}
