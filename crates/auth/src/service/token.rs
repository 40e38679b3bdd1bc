use shared::{errors::ServiceError, utils::generate_secret_hex};
use uuid::Uuid;

const SECRET_BYTES: usize = 32;

/// A freshly minted token. `value` is what the user receives; only a hash
/// of `secret` is ever stored.
#[derive(Debug, Clone)]
pub struct GeneratedToken {
    pub token_id: String,
    pub secret: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken<'a> {
    pub token_id: &'a str,
    pub secret: &'a str,
}

pub fn generate_token() -> Result<GeneratedToken, ServiceError> {
    let token_id = Uuid::new_v4().to_string();
    let secret = generate_secret_hex(SECRET_BYTES)
        .map_err(|e| ServiceError::Internal(format!("Failed to generate token secret: {e}")))?;
    let value = format!("{token_id}.{secret}");

    Ok(GeneratedToken {
        token_id,
        secret,
        value,
    })
}

/// Splits `identifier.secret` at the first dot.
pub fn parse_token(raw: &str) -> Result<ParsedToken<'_>, ServiceError> {
    let trimmed = raw.trim();

    match trimmed.split_once('.') {
        Some((token_id, secret)) if !token_id.is_empty() && !secret.is_empty() => {
            Ok(ParsedToken { token_id, secret })
        }
        _ => Err(ServiceError::InvalidToken),
    }
}
