use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::id::EntityId;

/// Complete, authoritative view of all known entity states at one point in
/// time. The host supplies a fresh snapshot on every update; this component
/// only reads it and never merges against a previous one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    states: HashMap<EntityId, EntityState>,
}

impl StateSnapshot {
    pub fn get(&self, id: &EntityId) -> Option<&EntityState> {
        self.states.get(id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntityState {
    pub state: StateValue,
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl EntityState {
    /// The raw state string, unless the upstream marked the entity unavailable.
    pub fn value(&self) -> Option<&str> {
        match &self.state {
            StateValue::Available(value) => Some(value),
            StateValue::Unavailable => None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

#[derive(Debug, Clone)]
pub enum StateValue {
    Available(String),
    Unavailable,
}

impl<'de> Deserialize<'de> for StateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "unavailable" => Ok(StateValue::Unavailable),
            _ => Ok(StateValue::Available(value)),
        }
    }
}
