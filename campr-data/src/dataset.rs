use crate::error::Result;
use crate::record::{CampingRecord, PlanningRecord};
use serde::Deserialize;

/// The source document: `{ parks: [...], planning: [...] }`.
///
/// Both arrays are pre-aggregated upstream and loaded once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    /// Weekly camping demand, all parks
    pub parks: Vec<CampingRecord>,
    /// Booking progress per camping date, all parks
    #[serde(default)]
    pub planning: Vec<PlanningRecord>,
}

impl Dataset {
    /// Parse the JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        log::info!(
            "[campr] dataset: {} camping records, {} planning records",
            dataset.parks.len(),
            dataset.planning.len()
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;
    use crate::DatasetError;

    const FIXTURE: &str = include_str!("../../fixtures/npscampr.json");

    #[test]
    fn test_parse_fixture() {
        let dataset = Dataset::from_json(FIXTURE).unwrap();
        assert_eq!(dataset.parks.len(), 18);
        assert_eq!(dataset.planning.len(), 9);
        assert_eq!(dataset.parks[0].park_short, "Zion");
    }

    #[test]
    fn test_planning_array_is_optional() {
        let json = r#"{"parks":[{"parkShort":"Zion","week":1,"sres":0.2,"cluster":1,"pseudo_date":"2020-01-06"}]}"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.parks.len(), 1);
        assert!(dataset.planning.is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Dataset::from_json("{\"parks\": [").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_missing_parks_is_parse_error() {
        let err = Dataset::from_json("{\"planning\": []}").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }
}
