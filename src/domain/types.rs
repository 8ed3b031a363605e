//! Shared domain enumerations used by listing requests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Orderings a caller may request for a public article listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Popular,
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Popular,
        SortKey::Title,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Popular => "popular",
            SortKey::Title => "title",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SortKey {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "popular" => Ok(SortKey::Popular),
            "title" => Ok(SortKey::Title),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_round_trips_through_text() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::try_from(key.as_str()), Ok(key));
        }
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        assert_eq!(SortKey::try_from("bogus"), Err(()));
        assert_eq!(SortKey::try_from("Newest"), Err(()));
        assert_eq!(SortKey::try_from(""), Err(()));
    }
}
