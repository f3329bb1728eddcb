//! Selection state machine.
//!
//! `Idle → Park(k) → ParkAndDate(k, d)`. Clicking a panel always lands in
//! `Park`, clicking a date bar of the selected park lands in
//! `ParkAndDate`. There is no way back to `Idle`.

use crate::error::SelectionError;
use crate::stage::{Annotation, Delta, LayerId, Stage};
use campr_data::{ParkIndex, ParkKey};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum Selection {
    #[default]
    Idle,
    Park(ParkKey),
    ParkAndDate(ParkKey, NaiveDate),
}

impl Selection {
    pub fn park(&self) -> Option<&ParkKey> {
        match self {
            Selection::Idle => None,
            Selection::Park(key) | Selection::ParkAndDate(key, _) => Some(key),
        }
    }

    /// Only ever set together with a park.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Selection::ParkAndDate(_, date) => Some(*date),
            _ => None,
        }
    }
}

/// User clicks the selection reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A small-multiple panel was clicked
    ParkClicked(ParkKey),
    /// A date bar of the demand chart was clicked
    DateClicked(ParkKey, NaiveDate),
}

/// Next selection plus the render changes that get there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: Selection,
    pub deltas: Vec<Delta>,
}

impl Transition {
    fn unchanged(current: &Selection) -> Self {
        Self {
            next: current.clone(),
            deltas: Vec::new(),
        }
    }
}

/// Compute the transition for one event. Pure: nothing is applied.
pub fn reduce(
    current: &Selection,
    event: &SelectionEvent,
    index: &ParkIndex,
) -> Result<Transition, SelectionError> {
    match event {
        SelectionEvent::ParkClicked(key) => select_park(current, key, index),
        SelectionEvent::DateClicked(key, date) => select_date(current, key, *date, index),
    }
}

fn select_park(
    current: &Selection,
    key: &ParkKey,
    index: &ParkIndex,
) -> Result<Transition, SelectionError> {
    if current.park() == Some(key) {
        return Ok(Transition::unchanged(current));
    }
    if index.demand(key).is_none() {
        return Err(SelectionError::UnknownPark(key.clone()));
    }

    let mut deltas = Vec::new();
    if let Selection::ParkAndDate(prev, date) = current {
        deltas.push(Delta::Unmount(LayerId::Booking(prev.clone(), *date)));
        deltas.push(Delta::HighlightBar(None));
    }
    if let Some(prev) = current.park() {
        deltas.push(Delta::Unmount(LayerId::Demand(prev.clone())));
    }
    deltas.extend([
        Delta::Hide(Annotation::Instruction),
        Delta::Show(Annotation::CampsiteDemand),
        Delta::Hide(Annotation::PlanningWindow),
        Delta::Mount(LayerId::Demand(key.clone())),
    ]);

    log::info!("[campr] selection: park {}", key);
    Ok(Transition {
        next: Selection::Park(key.clone()),
        deltas,
    })
}

fn select_date(
    current: &Selection,
    key: &ParkKey,
    date: NaiveDate,
    index: &ParkIndex,
) -> Result<Transition, SelectionError> {
    let selected = current
        .park()
        .ok_or(SelectionError::NoParkSelected(date))?;
    if selected != key {
        return Err(SelectionError::ParkMismatch {
            selected: selected.clone(),
            clicked: key.clone(),
        });
    }
    if current.date() == Some(date) {
        return Ok(Transition::unchanged(current));
    }
    let known = index
        .demand(key)
        .map(|group| group.records.iter().any(|r| r.pseudo_date == date))
        .unwrap_or(false);
    if !known {
        return Err(SelectionError::UnknownDate {
            park: key.clone(),
            date,
        });
    }

    let mut deltas = Vec::new();
    if let Some(prev) = current.date() {
        deltas.push(Delta::Unmount(LayerId::Booking(key.clone(), prev)));
    }
    deltas.extend([
        Delta::HighlightBar(Some(date)),
        Delta::Show(Annotation::PlanningWindow),
        Delta::Mount(LayerId::Booking(key.clone(), date)),
    ]);

    log::info!("[campr] selection: park {} date {}", key, date);
    Ok(Transition {
        next: Selection::ParkAndDate(key.clone(), date),
        deltas,
    })
}

/// Selection plus the stage it has produced.
///
/// The most recent failed event is kept as `error` until the next event
/// succeeds or it is dismissed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    selection: Selection,
    stage: Stage,
    error: Option<SelectionError>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one event through the reducer and apply its deltas. On error the
    /// selection and stage are left untouched.
    pub fn dispatch(
        &mut self,
        event: &SelectionEvent,
        index: &ParkIndex,
    ) -> Result<Vec<Delta>, SelectionError> {
        match reduce(&self.selection, event, index) {
            Ok(Transition { next, deltas }) => {
                self.stage.apply(&deltas);
                self.selection = next;
                self.error = None;
                Ok(deltas)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Last selection failure, if no event has succeeded since.
    pub fn error(&self) -> Option<&SelectionError> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campr_data::Dataset;

    const FIXTURE: &str = include_str!("../../fixtures/npscampr.json");

    fn index() -> ParkIndex {
        ParkIndex::build(Dataset::from_json(FIXTURE).unwrap()).unwrap()
    }

    fn key(s: &str) -> ParkKey {
        ParkKey::from_display(s)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_idle_to_park() {
        let index = index();
        let t = reduce(
            &Selection::Idle,
            &SelectionEvent::ParkClicked(key("Zion")),
            &index,
        )
        .unwrap();
        assert_eq!(t.next, Selection::Park(key("Zion")));
        assert_eq!(
            t.deltas,
            vec![
                Delta::Hide(Annotation::Instruction),
                Delta::Show(Annotation::CampsiteDemand),
                Delta::Hide(Annotation::PlanningWindow),
                Delta::Mount(LayerId::Demand(key("Zion"))),
            ]
        );
    }

    #[test]
    fn test_switching_park_unmounts_previous_charts() {
        let index = index();
        let current = Selection::ParkAndDate(key("Zion"), date(2020, 6, 1));
        let t = reduce(
            &current,
            &SelectionEvent::ParkClicked(key("Grand Canyon")),
            &index,
        )
        .unwrap();
        assert_eq!(t.next, Selection::Park(key("GrandCanyon")));
        assert_eq!(t.next.date(), None);
        assert!(t
            .deltas
            .contains(&Delta::Unmount(LayerId::Booking(key("Zion"), date(2020, 6, 1)))));
        assert!(t.deltas.contains(&Delta::Unmount(LayerId::Demand(key("Zion")))));
        assert!(t.deltas.contains(&Delta::HighlightBar(None)));
        assert_eq!(
            t.deltas.last(),
            Some(&Delta::Mount(LayerId::Demand(key("GrandCanyon"))))
        );
    }

    #[test]
    fn test_unknown_park_is_an_error() {
        let index = index();
        let err = reduce(
            &Selection::Idle,
            &SelectionEvent::ParkClicked(key("Yellowstone")),
            &index,
        )
        .unwrap_err();
        assert_eq!(err, SelectionError::UnknownPark(key("Yellowstone")));
    }

    #[test]
    fn test_date_requires_selected_park() {
        let index = index();
        let err = reduce(
            &Selection::Idle,
            &SelectionEvent::DateClicked(key("Zion"), date(2020, 6, 1)),
            &index,
        )
        .unwrap_err();
        assert_eq!(err, SelectionError::NoParkSelected(date(2020, 6, 1)));

        let err = reduce(
            &Selection::Park(key("Zion")),
            &SelectionEvent::DateClicked(key("GrandCanyon"), date(2020, 6, 1)),
            &index,
        )
        .unwrap_err();
        assert!(matches!(err, SelectionError::ParkMismatch { .. }));
    }

    #[test]
    fn test_date_must_be_a_demand_date() {
        let index = index();
        let err = reduce(
            &Selection::Park(key("Zion")),
            &SelectionEvent::DateClicked(key("Zion"), date(2020, 6, 3)),
            &index,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownDate {
                park: key("Zion"),
                date: date(2020, 6, 3)
            }
        );
    }

    #[test]
    fn test_park_to_park_and_date() {
        let index = index();
        let t = reduce(
            &Selection::Park(key("Zion")),
            &SelectionEvent::DateClicked(key("Zion"), date(2020, 6, 8)),
            &index,
        )
        .unwrap();
        assert_eq!(t.next, Selection::ParkAndDate(key("Zion"), date(2020, 6, 8)));
        assert_eq!(
            t.deltas,
            vec![
                Delta::HighlightBar(Some(date(2020, 6, 8))),
                Delta::Show(Annotation::PlanningWindow),
                Delta::Mount(LayerId::Booking(key("Zion"), date(2020, 6, 8))),
            ]
        );
    }

    #[test]
    fn test_session_keeps_one_chart_of_each_kind() {
        let index = index();
        let mut session = Session::new();
        session
            .dispatch(&SelectionEvent::ParkClicked(key("Zion")), &index)
            .unwrap();
        session
            .dispatch(&SelectionEvent::ParkClicked(key("Grand Canyon")), &index)
            .unwrap();
        assert_eq!(session.stage().demand_layers(), 1);
        assert_eq!(
            session.stage().layers(),
            &[LayerId::Demand(key("GrandCanyon"))]
        );

        for d in [date(2020, 6, 1), date(2020, 6, 8), date(2020, 6, 15)] {
            session
                .dispatch(&SelectionEvent::DateClicked(key("GrandCanyon"), d), &index)
                .unwrap();
            assert_eq!(session.stage().booking_layers(), 1);
            assert_eq!(session.stage().highlighted(), Some(d));
        }
        assert!(session
            .stage()
            .layers()
            .contains(&LayerId::Booking(key("GrandCanyon"), date(2020, 6, 15))));
    }

    #[test]
    fn test_reselecting_current_park_changes_nothing() {
        let index = index();
        let mut session = Session::new();
        session
            .dispatch(&SelectionEvent::ParkClicked(key("Zion")), &index)
            .unwrap();
        session
            .dispatch(
                &SelectionEvent::DateClicked(key("Zion"), date(2020, 6, 1)),
                &index,
            )
            .unwrap();
        let before = session.clone();

        let deltas = session
            .dispatch(&SelectionEvent::ParkClicked(key("Zion")), &index)
            .unwrap();
        assert!(deltas.is_empty());
        assert_eq!(session, before);

        let deltas = session
            .dispatch(
                &SelectionEvent::DateClicked(key("Zion"), date(2020, 6, 1)),
                &index,
            )
            .unwrap();
        assert!(deltas.is_empty());
        assert_eq!(session, before);
    }

    #[test]
    fn test_new_park_resets_annotations() {
        let index = index();
        let mut session = Session::new();
        session
            .dispatch(&SelectionEvent::ParkClicked(key("Zion")), &index)
            .unwrap();
        session
            .dispatch(
                &SelectionEvent::DateClicked(key("Zion"), date(2020, 6, 1)),
                &index,
            )
            .unwrap();
        assert!(session.stage().is_visible(Annotation::PlanningWindow));

        session
            .dispatch(&SelectionEvent::ParkClicked(key("Sequoia & Kings")), &index)
            .unwrap();
        let stage = session.stage();
        assert!(!stage.is_visible(Annotation::PlanningWindow));
        assert!(stage.is_visible(Annotation::CampsiteDemand));
        assert!(!stage.is_visible(Annotation::Instruction));
        assert_eq!(stage.booking_layers(), 0);
        assert_eq!(stage.highlighted(), None);
        assert_eq!(session.selection().date(), None);
    }

    #[test]
    fn test_failed_event_leaves_session_untouched() {
        let index = index();
        let mut session = Session::new();
        session
            .dispatch(&SelectionEvent::ParkClicked(key("Zion")), &index)
            .unwrap();
        let before = session.clone();
        assert!(session
            .dispatch(&SelectionEvent::ParkClicked(key("Nowhere")), &index)
            .is_err());
        assert_eq!(session.selection(), before.selection());
        assert_eq!(session.stage(), before.stage());
    }

    #[test]
    fn test_error_clears_on_next_successful_event() {
        let index = index();
        let mut session = Session::new();
        assert!(session
            .dispatch(&SelectionEvent::ParkClicked(key("Nowhere")), &index)
            .is_err());
        assert_eq!(
            session.error(),
            Some(&SelectionError::UnknownPark(key("Nowhere")))
        );

        session
            .dispatch(&SelectionEvent::ParkClicked(key("Zion")), &index)
            .unwrap();
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_dismissed_error_stays_cleared() {
        let index = index();
        let mut session = Session::new();
        assert!(session
            .dispatch(&SelectionEvent::DateClicked(key("Zion"), date(2020, 6, 1)), &index)
            .is_err());
        assert!(session.error().is_some());
        session.dismiss_error();
        assert_eq!(session.error(), None);
        assert_eq!(session.selection(), &Selection::Idle);
    }
}
