use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use playbill_core::{DomainError, DomainResult, PlayId};

use crate::play::Play;

/// Mapping from play id to play.
///
/// Serialized as a JSON object keyed by play id:
///
/// ```json
/// { "hamlet": { "name": "Hamlet", "type": "tragedy" } }
/// ```
///
/// Nothing in the statement pipeline mutates a catalog; it is borrowed for the
/// duration of a build and may be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: BTreeMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a play. Used while assembling a catalog.
    pub fn with_play(mut self, id: impl Into<PlayId>, play: Play) -> Self {
        self.plays.insert(id.into(), play);
        self
    }

    pub fn get(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Look up a play, failing with `UnresolvedPlay` when it is absent.
    pub fn resolve(&self, id: &PlayId) -> DomainResult<&Play> {
        self.get(id).ok_or_else(|| DomainError::unresolved_play(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayId, &Play)> {
        self.plays.iter()
    }
}

impl FromIterator<(PlayId, Play)> for PlayCatalog {
    fn from_iter<T: IntoIterator<Item = (PlayId, Play)>>(iter: T) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}
