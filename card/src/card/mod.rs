mod config;
mod display;
mod model;
mod registry;
mod render;
mod ring;

pub use config::{CardConfig, ConfigError};
pub use model::DisplayModel;
pub use registry::{CardDefinition, CardRegistry, registry};

use crate::core::StateSnapshot;

/// Dashboard card projecting the climate automation's entity states into a
/// visual status panel. Holds no state between updates apart from the
/// configuration and the rendered container.
pub struct StatusCard {
    config: CardConfig,
    container: Option<CardContainer>,
}

#[derive(Default)]
struct CardContainer {
    markup: String,
}

impl StatusCard {
    pub const TYPE_NAME: &'static str = "powerstat-card";

    /// Accepts the host-supplied configuration. The only hard failure of the
    /// whole component: a missing entity id.
    pub fn new(config: CardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self { config, container: None })
    }

    pub fn definition() -> CardDefinition {
        CardDefinition {
            type_name: Self::TYPE_NAME,
            name: "PowerStat Card",
            description: "Advanced AI thermostat control card",
            preview: true,
        }
    }

    /// One synchronous render pass over the pushed snapshot. The container is
    /// created lazily on the first call and reused afterwards. Never fails;
    /// missing upstream data degrades to defaults.
    pub fn update(&mut self, snapshot: &StateSnapshot) {
        let model = DisplayModel::resolve(&self.config.entity, snapshot);
        let markup = render::render(&model, self.config.compact);

        let container = self.container.get_or_insert_with(CardContainer::default);
        container.markup = markup;
    }

    /// The current container content, absent until the first update.
    pub fn markup(&self) -> Option<&str> {
        self.container.as_ref().map(|container| container.markup.as_str())
    }

    /// Nominal display height for the host's layout engine.
    pub fn card_size(&self) -> u8 {
        if self.config.compact { 3 } else { 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> StateSnapshot {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_entity_is_a_setup_error() {
        let result = StatusCard::new(CardConfig::new(""));

        assert!(matches!(result, Err(ConfigError::MissingEntity)));

        let result = StatusCard::new(CardConfig::new("   "));
        assert!(matches!(result, Err(ConfigError::MissingEntity)));
    }

    #[test]
    fn container_does_not_exist_before_the_first_update() {
        let card = StatusCard::new(CardConfig::new("sensor.room_status")).unwrap();

        assert!(card.markup().is_none());
    }

    #[test]
    fn renders_defaults_for_an_empty_snapshot() {
        let mut card = StatusCard::new(CardConfig::new("sensor.room_status")).unwrap();

        card.update(&snapshot(json!({})));

        let markup = card.markup().unwrap();
        assert!(markup.contains("Unknown"));
        assert!(markup.contains(">--°<"));
        assert!(markup.contains("Target: 21°C"));
        assert!(markup.contains("<span>OFF</span>"));
        assert!(markup.contains(">0%<"));
    }

    #[test]
    fn repeated_updates_reuse_the_container() {
        let mut card = StatusCard::new(CardConfig::new("sensor.room_status")).unwrap();
        let snapshot = snapshot(json!({"sensor.room_status": {"state": "idle"}}));

        card.update(&snapshot);
        let first = card.markup().unwrap().to_owned();

        card.update(&snapshot);
        assert_eq!(card.markup().unwrap(), first);
    }

    #[test]
    fn full_update_cycle_resolves_siblings_and_plan() {
        let mut card = StatusCard::new(CardConfig::new("sensor.room_status")).unwrap();

        card.update(&snapshot(json!({
            "sensor.room_status": {
                "state": "acting",
                "attributes": {"plan": {"target_temp": 23, "hvac_mode": "heat"}}
            },
            "sensor.room_effective_temperature": {"state": "22.4"},
            "sensor.room_reason": {"state": "Preheating"},
            "sensor.room_confidence": {"state": "80"}
        })));

        let markup = card.markup().unwrap();
        assert!(markup.contains("--accent: #30d158"));
        assert!(markup.contains("<span>🔥</span><span>HEAT</span>"));
        assert!(markup.contains(">22.4°<"));
        assert!(markup.contains("Target: 23°C"));
        assert!(markup.contains(">80%<"));
        assert!(markup.contains("Preheating"));
    }

    #[test]
    fn card_size_depends_on_the_variant() {
        let full = StatusCard::new(CardConfig::new("sensor.room_status")).unwrap();
        assert_eq!(full.card_size(), 5);

        let compact = StatusCard::new(CardConfig {
            entity: "sensor.room_status".into(),
            compact: true,
        })
        .unwrap();
        assert_eq!(compact.card_size(), 3);
    }
}
