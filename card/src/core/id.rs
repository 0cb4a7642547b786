use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Identifier of an entity in the host's state world, e.g. `sensor.room_status`.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Derives a sibling id by replacing the first occurrence of `from` with `to`.
    /// Without an occurrence the id is returned unchanged and the lookup will
    /// simply miss, which callers treat as "unavailable".
    pub fn with_suffix(&self, from: &str, to: &str) -> EntityId {
        EntityId(self.0.replacen(from, to, 1))
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
