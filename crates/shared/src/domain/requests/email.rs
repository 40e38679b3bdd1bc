use serde::{Deserialize, Serialize};

/// A fully rendered message, ready for the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}
