//! Mounted chart layers and annotation visibility.

use campr_data::ParkKey;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A chart layer that can be mounted into the inset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum LayerId {
    /// Weekly demand curve of one park, with its date bars
    Demand(ParkKey),
    /// Booking-lead-time curve for one park and camping date
    Booking(ParkKey, NaiveDate),
}

impl LayerId {
    pub fn is_demand(&self) -> bool {
        matches!(self, LayerId::Demand(_))
    }

    pub fn is_booking(&self) -> bool {
        matches!(self, LayerId::Booking(..))
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerId::Demand(key) => write!(f, "demand-{}", key),
            LayerId::Booking(key, date) => write!(f, "booking-{}-{}", key, date),
        }
    }
}

/// Fixed text elements of the inset whose visibility follows the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Annotation {
    /// "select a park"
    Instruction,
    /// "Campsite Demand"
    CampsiteDemand,
    /// "Planning Window"
    PlanningWindow,
}

/// One render-affecting change emitted by the selection reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Delta {
    Mount(LayerId),
    Unmount(LayerId),
    Show(Annotation),
    Hide(Annotation),
    /// Persistently highlight one date bar, or none
    HighlightBar(Option<NaiveDate>),
}

/// What is currently on screen in the inset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    layers: Vec<LayerId>,
    visible: BTreeSet<Annotation>,
    highlighted: Option<NaiveDate>,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            visible: BTreeSet::from([Annotation::Instruction]),
            highlighted: None,
        }
    }
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply deltas in order. Mounting a layer that is already mounted is
    /// ignored, so a layer is never present twice.
    pub fn apply(&mut self, deltas: &[Delta]) {
        for delta in deltas {
            match delta {
                Delta::Mount(layer) => {
                    if self.layers.contains(layer) {
                        log::warn!("[campr] stage: {:?} already mounted", layer);
                    } else {
                        self.layers.push(layer.clone());
                    }
                }
                Delta::Unmount(layer) => self.layers.retain(|l| l != layer),
                Delta::Show(annotation) => {
                    self.visible.insert(*annotation);
                }
                Delta::Hide(annotation) => {
                    self.visible.remove(annotation);
                }
                Delta::HighlightBar(date) => self.highlighted = *date,
            }
        }
    }

    /// Mounted layers, oldest first.
    pub fn layers(&self) -> &[LayerId] {
        &self.layers
    }

    pub fn is_visible(&self, annotation: Annotation) -> bool {
        self.visible.contains(&annotation)
    }

    pub fn highlighted(&self) -> Option<NaiveDate> {
        self.highlighted
    }

    pub fn demand_layers(&self) -> usize {
        self.layers.iter().filter(|l| l.is_demand()).count()
    }

    pub fn booking_layers(&self) -> usize {
        self.layers.iter().filter(|l| l.is_booking()).count()
    }
}
