use anyhow::{Context, Result, anyhow};
use bcrypt::DEFAULT_COST;
use shared::config::{EmailConfig, otel_endpoint, parse_port};

pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;
pub const DEFAULT_WEB_APP_BASE_URL: &str = "https://app.rotaonco.com";
const RESET_PATH: &str = "/resetar-senha";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetConfig {
    pub token_ttl_minutes: i64,
    pub web_app_base_url: String,
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
            web_app_base_url: DEFAULT_WEB_APP_BASE_URL.to_string(),
        }
    }
}

impl PasswordResetConfig {
    pub fn init() -> Self {
        let ttl = std::env::var("PASSWORD_RESET_TOKEN_TTL_MINUTES").ok();
        let base_url = std::env::var("APP_WEB_URL").ok();

        Self::from_values(ttl.as_deref(), base_url.as_deref())
    }

    /// Non-numeric or non-positive TTLs fall back to 60 minutes; an empty
    /// base URL falls back to the production web app.
    pub fn from_values(ttl_minutes: Option<&str>, web_app_base_url: Option<&str>) -> Self {
        let token_ttl_minutes = ttl_minutes
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES);

        let web_app_base_url = web_app_base_url
            .map(|v| v.trim().trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_WEB_APP_BASE_URL)
            .to_string();

        Self {
            token_ttl_minutes,
            web_app_base_url,
        }
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.token_ttl_minutes)
    }

    pub fn reset_url(&self, token: &str) -> String {
        format!(
            "{}{RESET_PATH}?token={}",
            self.web_app_base_url,
            urlencoding::encode(token)
        )
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub otel_endpoint: String,
    pub password_reset: PasswordResetConfig,
    pub email: EmailConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let run_migrations =
            parse_bool_flag(std::env::var("RUN_MIGRATIONS").ok().as_deref(), "RUN_MIGRATIONS")?;

        let port = parse_port("PORT")?;

        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(value) => value
                .trim()
                .parse::<u32>()
                .context("BCRYPT_COST must be a valid u32 integer")?,
            Err(_) => DEFAULT_COST,
        };

        let email = EmailConfig::init().context("Failed to load SMTP configuration")?;

        Ok(Self {
            database_url,
            run_migrations,
            port,
            bcrypt_cost,
            otel_endpoint: otel_endpoint(),
            password_reset: PasswordResetConfig::init(),
            email,
        })
    }
}

fn parse_bool_flag(value: Option<&str>, name: &str) -> Result<bool> {
    match value.map(str::trim) {
        None | Some("") | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 60)]
    #[case(Some("30"), 30)]
    #[case(Some(" 15 "), 15)]
    #[case(Some("0"), 60)]
    #[case(Some("-5"), 60)]
    #[case(Some("abc"), 60)]
    #[case(Some("1.5"), 60)]
    fn ttl_falls_back_to_sixty(#[case] raw: Option<&str>, #[case] expected: i64) {
        let config = PasswordResetConfig::from_values(raw, None);

        assert_eq!(config.token_ttl_minutes, expected);
    }

    #[rstest]
    #[case(None, "https://app.rotaonco.com")]
    #[case(Some(""), "https://app.rotaonco.com")]
    #[case(Some("http://localhost:3000/"), "http://localhost:3000")]
    #[case(Some("https://staging.rotaonco.com//"), "https://staging.rotaonco.com")]
    fn base_url_is_normalized(#[case] raw: Option<&str>, #[case] expected: &str) {
        let config = PasswordResetConfig::from_values(None, raw);

        assert_eq!(config.web_app_base_url, expected);
    }

    #[test]
    fn reset_url_encodes_token() {
        let config = PasswordResetConfig::from_values(None, Some("http://localhost:3000/"));

        let url = config.reset_url("abc.d+f/=");

        assert_eq!(
            url,
            "http://localhost:3000/resetar-senha?token=abc.d%2Bf%2F%3D"
        );
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some("true"), true)]
    #[case(Some("false"), false)]
    fn run_migrations_flag(#[case] raw: Option<&str>, #[case] expected: bool) {
        assert_eq!(parse_bool_flag(raw, "RUN_MIGRATIONS").unwrap(), expected);
    }

    #[test]
    fn run_migrations_rejects_garbage() {
        assert!(parse_bool_flag(Some("yes"), "RUN_MIGRATIONS").is_err());
    }
}
