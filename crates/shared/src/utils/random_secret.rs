use anyhow::Result;
use rand::TryRngCore;
use rand::rngs::OsRng;

/// `num_bytes` bytes straight from the OS RNG, hex encoded
/// (so the string is `2 * num_bytes` characters long).
pub fn generate_secret_hex(num_bytes: usize) -> Result<String> {
    let mut bytes = vec![0u8; num_bytes];
    OsRng.try_fill_bytes(&mut bytes)?;

    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_is_hex_of_requested_size() {
        let secret = generate_secret_hex(32).unwrap();

        assert_eq!(secret.len(), 64);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn secrets_do_not_repeat() {
        let a = generate_secret_hex(32).unwrap();
        let b = generate_secret_hex(32).unwrap();

        assert_ne!(a, b);
    }
}
