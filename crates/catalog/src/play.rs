use serde::{Deserialize, Serialize};

/// Genre tag of a play (e.g. `"comedy"`, `"tragedy"`).
///
/// Kept as an open tag rather than a closed enum: a new genre becomes priceable
/// by registering a calculator for it, without touching this type. Genres with
/// no registered calculator are rejected at pricing time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genre(String);

impl Genre {
    pub const COMEDY: &'static str = "comedy";
    pub const TRAGEDY: &'static str = "tragedy";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn comedy() -> Self {
        Self::new(Self::COMEDY)
    }

    pub fn tragedy() -> Self {
        Self::new(Self::TRAGEDY)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Genre {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A play as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    #[serde(rename = "type")]
    pub genre: Genre,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: Genre) -> Self {
        Self {
            name: name.into(),
            genre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_record_shape() {
        let play: Play = serde_json::from_str(r#"{"name":"Hamlet","type":"tragedy"}"#).unwrap();
        assert_eq!(play, Play::new("Hamlet", Genre::tragedy()));
    }

    #[test]
    fn unknown_genre_tags_still_deserialize() {
        let play: Play = serde_json::from_str(r#"{"name":"Henry V","type":"history"}"#).unwrap();
        assert_eq!(play.genre.as_str(), "history");
    }

    #[test]
    fn genre_from_str_matches_named_constructors() {
        assert_eq!(Genre::from("comedy"), Genre::comedy());
        assert_eq!(Genre::from("tragedy"), Genre::tragedy());
        assert_eq!(Genre::from("history").to_string(), "history");
    }
}
