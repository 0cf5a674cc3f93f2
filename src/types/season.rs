//! Defines the `Season` enum, mapping the dataset's numeric season codes to labels.

use serde::Serialize;
use std::fmt;

/// Meteorological season a rental record belongs to.
///
/// The source data encodes seasons as the integers 1 to 4. Decoding goes through
/// [`Season::ALL`], a fixed table indexed by `code - 1`, so the numeric code of a
/// variant is simply its position in that table plus one.
///
/// Variants order as Spring < Summer < Fall < Winter, which is also the order
/// per-season totals are reported in.
///
/// # Examples
///
/// ```
/// use rentstat::Season;
///
/// assert_eq!(Season::from_code(3), Some(Season::Fall));
/// assert_eq!(Season::Fall.code(), 3);
/// assert_eq!(Season::Fall.label(), "Fall");
/// assert_eq!(Season::from_code(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Seasons in code order: `ALL[code - 1]` is the season for `code`.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    const LABELS: [&'static str; 4] = ["Spring", "Summer", "Fall", "Winter"];

    /// Decodes a 1-based season code. Codes outside `1..=4` yield `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        let index = usize::try_from(code.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    pub fn code(self) -> i64 {
        self as i64 + 1
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_table() {
        for season in Season::ALL {
            assert_eq!(Season::from_code(season.code()), Some(season));
        }
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(Season::from_code(1), Some(Season::Spring));
        assert_eq!(Season::from_code(2), Some(Season::Summer));
        assert_eq!(Season::from_code(4), Some(Season::Winter));
    }

    #[test]
    fn test_out_of_range_codes() {
        assert_eq!(Season::from_code(0), None);
        assert_eq!(Season::from_code(5), None);
        assert_eq!(Season::from_code(-3), None);
        assert_eq!(Season::from_code(i64::MIN), None);
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Season::Winter).unwrap(), "\"Winter\"");
        assert_eq!(Season::Summer.to_string(), "Summer");
    }
}
