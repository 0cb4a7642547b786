use serde::Serialize;
use serde_json::Value;

use crate::core::unit::{DegreeCelsius, Percent};
use crate::core::{EntityId, EntityState, StateSnapshot};

const STATUS_SUFFIX: &str = "_status";
const TEMPERATURE_SUFFIX: &str = "_effective_temperature";
const REASON_SUFFIX: &str = "_reason";
const CONFIDENCE_SUFFIX: &str = "_confidence";

const DEFAULT_TARGET: DegreeCelsius = DegreeCelsius(21.0);
const DEFAULT_STATUS: &str = "Unknown";
const DEFAULT_REASON: &str = "Monitoring";
const DEFAULT_MODE: &str = "off";

/// Fully resolved and defaulted values for one visual frame. Rebuilt from
/// scratch on every update and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    pub temperature: Option<DegreeCelsius>,
    pub target: DegreeCelsius,
    pub status: String,
    pub reason: String,
    pub confidence: Percent,
    pub mode: String,
}

impl DisplayModel {
    /// Projects the snapshot onto the card's values. Partial or malformed
    /// upstream data falls back to defaults, never to an error.
    pub fn resolve(entity: &EntityId, snapshot: &StateSnapshot) -> Self {
        let primary = snapshot.get(entity);

        let status = primary
            .and_then(EntityState::value)
            .unwrap_or(DEFAULT_STATUS)
            .to_owned();

        let temperature_id = entity.with_suffix(STATUS_SUFFIX, TEMPERATURE_SUFFIX);
        let temperature = parse_temperature(snapshot.get(&temperature_id), &temperature_id);

        let reason = snapshot
            .get(&entity.with_suffix(STATUS_SUFFIX, REASON_SUFFIX))
            .and_then(EntityState::value)
            .unwrap_or(DEFAULT_REASON)
            .to_owned();

        let confidence_id = entity.with_suffix(STATUS_SUFFIX, CONFIDENCE_SUFFIX);
        let confidence = parse_confidence(snapshot.get(&confidence_id), &confidence_id);

        let plan = primary.and_then(|state| state.attribute("plan"));
        let target = plan
            .and_then(|plan| plan.get("target_temp"))
            .and_then(Value::as_f64)
            .map(DegreeCelsius)
            .unwrap_or(DEFAULT_TARGET);
        let mode = plan
            .and_then(|plan| plan.get("hvac_mode"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_MODE)
            .to_owned();

        Self {
            temperature,
            target,
            status,
            reason,
            confidence,
            mode,
        }
    }
}

fn parse_temperature(state: Option<&EntityState>, id: &EntityId) -> Option<DegreeCelsius> {
    let raw = state?.value()?;

    match raw.parse::<f64>() {
        Ok(value) => Some(DegreeCelsius(value)),
        Err(_) => {
            tracing::warn!("Non-numeric temperature state for {}: {}", id, raw);
            None
        }
    }
}

fn parse_confidence(state: Option<&EntityState>, id: &EntityId) -> Percent {
    let raw = match state.and_then(EntityState::value) {
        Some(raw) => raw,
        None => return Percent(0.0),
    };

    match raw.parse::<f64>() {
        Ok(value) => Percent(value.trunc()).clamp(),
        Err(_) => {
            tracing::warn!("Non-numeric confidence state for {}: {}", id, raw);
            Percent(0.0)
        }
    }
}
