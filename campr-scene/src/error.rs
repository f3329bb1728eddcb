/// Errors raised while handling a selection event
use campr_data::ParkKey;
use chrono::NaiveDate;
use thiserror::Error;

/// A click that cannot be resolved against the loaded data.
///
/// Every rendered panel and date bar comes from the data itself, so any of
/// these means the UI and the index disagree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No demand group for the clicked key
    #[error("No demand records for park key '{0}'")]
    UnknownPark(ParkKey),

    /// A date bar was clicked before any park was selected
    #[error("Date {0} clicked with no park selected")]
    NoParkSelected(NaiveDate),

    /// A date bar of a park other than the selected one was clicked
    #[error("Date clicked for park '{clicked}' while '{selected}' is selected")]
    ParkMismatch { selected: ParkKey, clicked: ParkKey },

    /// The date is not one of the park's weekly demand dates
    #[error("Park '{park}' has no demand record for {date}")]
    UnknownDate { park: ParkKey, date: NaiveDate },
}
