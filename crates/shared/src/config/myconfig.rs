use anyhow::{Context, Result};

pub const DEFAULT_EMAIL_FROM: &str = "RotaOnco <noreply@rotaonco.mail.com>";
pub const DEFAULT_OTEL_ENDPOINT: &str = "http://otel-collector:4317";

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub from: String,
}

impl EmailConfig {
    pub fn init() -> Result<Self> {
        let smtp_user =
            std::env::var("SMTP_USERNAME").context("Missing environment variable: SMTP_USERNAME")?;
        let smtp_pass =
            std::env::var("SMTP_PASSWORD").context("Missing environment variable: SMTP_PASSWORD")?;
        let smtp_server =
            std::env::var("SMTP_HOST").context("Missing environment variable: SMTP_HOST")?;
        let smtp_port = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .context("SMTP_PORT must be a valid u16 integer")?;

        let from = std::env::var("EMAIL_FROM")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string());

        Ok(Self {
            smtp_server,
            smtp_port,
            smtp_user,
            smtp_pass,
            from,
        })
    }
}

pub fn otel_endpoint() -> String {
    std::env::var("OTEL_ENDPOINT").unwrap_or_else(|_| DEFAULT_OTEL_ENDPOINT.to_string())
}

pub fn parse_port(name: &str) -> Result<u16> {
    std::env::var(name)
        .with_context(|| format!("Missing environment variable: {name}"))?
        .parse::<u16>()
        .with_context(|| format!("{name} must be a valid u16 integer"))
}
