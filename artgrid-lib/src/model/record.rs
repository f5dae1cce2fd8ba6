//! Artwork record and its identifier.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Stable identifier of a record in the remote catalog.
///
/// This is the only thing the selection ledger ever stores; record payloads
/// are never kept beyond the currently loaded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Returns the raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// One artwork as returned by the artworks endpoint.
///
/// Display attributes are opaque to this crate and any of them may be
/// `null` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Stable unique identifier.
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Start year; negative values are BCE.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// End year; negative values are BCE.
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Field names requested from the API, in column order.
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "place_of_origin",
        "artist_display",
        "inscriptions",
        "date_start",
        "date_end",
    ];

    /// Creates an artwork with only an id and a title.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: RecordId(id),
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Sets the place of origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.place_of_origin = Some(origin.into());
        self
    }

    /// Sets the artist display string.
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist_display = Some(artist.into());
        self
    }

    /// Sets the start and end years.
    pub fn with_dates(mut self, start: i32, end: i32) -> Self {
        self.date_start = Some(start);
        self.date_end = Some(end);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte — 1884",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": null,
            "date_start": 1884,
            "date_end": 1886
        }"#;
        let art: Artwork = serde_json::from_str(json).unwrap();

        assert_eq!(art.id, RecordId(27992));
        assert_eq!(art.place_of_origin.as_deref(), Some("France"));
        assert_eq!(art.inscriptions, None);
        assert_eq!(art.date_start, Some(1884));
        assert_eq!(art.date_end, Some(1886));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let art: Artwork = serde_json::from_str(r#"{"id": 5, "date_start": -500}"#).unwrap();

        assert_eq!(art.id.get(), 5);
        assert_eq!(art.title, None);
        assert_eq!(art.date_start, Some(-500));
    }

    #[test]
    fn test_record_id_parse() {
        assert_eq!(" 42 ".parse::<RecordId>().unwrap(), RecordId(42));
        assert!("abc".parse::<RecordId>().is_err());
        assert_eq!(RecordId(7).to_string(), "7");
    }
}
