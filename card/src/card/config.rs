use derive_more::derive::{Display, Error};
use serde::Deserialize;

use crate::core::EntityId;

/// Static card setup supplied once by the host. Only `entity` is required;
/// `compact` switches to the reduced single-row rendering kept for display
/// compatibility with the earlier card iteration.
#[derive(Debug, Clone, Deserialize)]
pub struct CardConfig {
    #[serde(default)]
    pub entity: EntityId,
    #[serde(default)]
    pub compact: bool,
}

#[derive(Debug, Error, Display)]
pub enum ConfigError {
    #[display("No entity configured, e.g. sensor.powerstat_status")]
    MissingEntity,
}

impl CardConfig {
    pub fn new(entity: impl Into<EntityId>) -> Self {
        Self {
            entity: entity.into(),
            compact: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entity.is_empty() {
            return Err(ConfigError::MissingEntity);
        }

        Ok(())
    }
}
