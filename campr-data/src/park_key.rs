use serde::Serialize;
use std::fmt;

/// Identifier-safe park key: the display short-name with every character
/// outside `[A-Za-z0-9]` removed.
///
/// Used as the element id of a park's panel and as the lookup handle for
/// selection. The display name is kept separately for labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ParkKey(String);

impl ParkKey {
    /// Normalize a display short-name into a key.
    pub fn from_display(display: &str) -> Self {
        ParkKey(
            display
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParkKey {
    fn from(display: &str) -> Self {
        ParkKey::from_display(display)
    }
}
