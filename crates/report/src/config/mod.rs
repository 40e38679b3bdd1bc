use anyhow::Result;
use shared::config::{otel_endpoint, parse_port};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub otel_endpoint: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        Ok(Self {
            port: parse_port("PORT")?,
            otel_endpoint: otel_endpoint(),
        })
    }
}
