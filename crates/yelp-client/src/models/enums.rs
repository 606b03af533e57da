//! Enum types for search parameters.

use std::fmt;

/// Result ordering for a search.
///
/// Sent on the wire as its integer code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Best matched (code 0).
    #[default]
    BestMatched,
    /// Distance from the search location (code 1).
    Distance,
    /// Highest rated (code 2).
    HighestRated,
}

impl SortOrder {
    /// Integer code sent in the `sort` query parameter.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::BestMatched => 0,
            Self::Distance => 1,
            Self::HighestRated => 2,
        }
    }

    /// Look up a sort order by its integer code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::BestMatched),
            1 => Some(Self::Distance),
            2 => Some(Self::HighestRated),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
