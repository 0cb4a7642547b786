use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::card::CardConfig;
use crate::infrastructure::{HttpServerConfig, MonitoringConfig};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub http_server: HttpServerConfig,
    pub monitoring: MonitoringConfig,
    pub card: CardConfig,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config.toml"))
            .add_source(Environment::default().separator("_").list_separator(","));

        let s = builder.build()?;
        s.try_deserialize()
    }
}
