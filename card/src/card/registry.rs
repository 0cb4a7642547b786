use std::sync::{Mutex, OnceLock};

use serde::Serialize;

/// Catalog entry advertised to the host's card picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDefinition {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: bool,
}

/// Process-wide widget registry. Created once, never torn down. Registration
/// is idempotent by type name.
pub struct CardRegistry {
    cards: Mutex<Vec<CardDefinition>>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self {
            cards: Mutex::new(Vec::new()),
        }
    }

    /// Adds the definition unless its type name is already present.
    /// Returns whether a new entry was created.
    pub fn register(&self, definition: CardDefinition) -> bool {
        match self.cards.lock() {
            Ok(mut cards) => {
                if cards.iter().any(|card| card.type_name == definition.type_name) {
                    tracing::debug!("Card type {} already registered", definition.type_name);
                    return false;
                }

                cards.push(definition);
                true
            }
            Err(e) => {
                tracing::error!("Error locking card registry, registration skipped: {:?}", e);
                false
            }
        }
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.cards
            .lock()
            .map(|cards| cards.iter().any(|card| card.type_name == type_name))
            .unwrap_or(false)
    }

    pub fn cards(&self) -> Vec<CardDefinition> {
        self.cards.lock().map(|cards| cards.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.cards.lock().map(|cards| cards.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The registry instance shared with the host for the lifetime of the process.
pub fn registry() -> &'static CardRegistry {
    static REGISTRY: OnceLock<CardRegistry> = OnceLock::new();
    REGISTRY.get_or_init(CardRegistry::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> CardDefinition {
        CardDefinition {
            type_name: "powerstat-card",
            name: "PowerStat Card",
            description: "Advanced AI thermostat control card",
            preview: true,
        }
    }

    #[test]
    fn registering_twice_keeps_a_single_entry() {
        let registry = CardRegistry::new();

        assert!(registry.register(definition()));
        assert!(!registry.register(definition()));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("powerstat-card"));
    }

    #[test]
    fn global_registry_registration_is_idempotent() {
        registry().register(definition());
        registry().register(definition());

        assert_eq!(
            registry()
                .cards()
                .iter()
                .filter(|card| card.type_name == "powerstat-card")
                .count(),
            1
        );
    }
}
