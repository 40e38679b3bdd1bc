use crate::{domain::requests::EmailRequest, errors::ServiceError};
use askama::Template;
use tracing::{error, info};

pub const PASSWORD_RESET_SUBJECT: &str = "Redefinição de senha - RotaOnco";

#[derive(Template, Debug)]
#[template(path = "password_reset.html")]
struct PasswordResetHtml<'a> {
    greeting: &'a str,
    reset_url: &'a str,
    ttl_minutes: i64,
    year: i32,
}

#[derive(Template, Debug)]
#[template(path = "password_reset.txt")]
struct PasswordResetText<'a> {
    reset_url: &'a str,
    ttl_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct PasswordResetEmailData<'a> {
    pub to: &'a str,
    pub reset_url: &'a str,
    pub name: Option<&'a str>,
    pub ttl_minutes: i64,
    pub year: i32,
}

/// First word of the display name, or a neutral "Olá" when there is none.
fn greeting_for(name: Option<&str>) -> &str {
    name.map(str::trim)
        .and_then(|n| n.split_whitespace().next())
        .unwrap_or("Olá")
}

pub fn password_reset_email(data: &PasswordResetEmailData<'_>) -> Result<EmailRequest, ServiceError> {
    info!("📧 Rendering password reset email for {}", data.to);

    let html = PasswordResetHtml {
        greeting: greeting_for(data.name),
        reset_url: data.reset_url,
        ttl_minutes: data.ttl_minutes,
        year: data.year,
    }
    .render()
    .map_err(|e| {
        error!("❌ Failed to render password reset html: {}", e);
        ServiceError::Internal(format!("Failed to render email template: {e}"))
    })?;

    let text = PasswordResetText {
        reset_url: data.reset_url,
        ttl_minutes: data.ttl_minutes,
    }
    .render()
    .map_err(|e| {
        error!("❌ Failed to render password reset text: {}", e);
        ServiceError::Internal(format!("Failed to render email template: {e}"))
    })?;

    Ok(EmailRequest {
        to: data.to.to_string(),
        subject: PASSWORD_RESET_SUBJECT.to_string(),
        html,
        text,
    })
}
