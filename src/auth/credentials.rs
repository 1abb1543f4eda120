use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use regex::Regex;
use tracing::error;

pub const MIN_PASSWORD_LEN: usize = 8;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .unwrap_or_else(|e| panic!("email regex: {e}"));
}

/// Trims and lower-cases; `None` when the result is not an address.
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    EMAIL_RE.is_match(&email).then_some(email)
}

pub fn password_long_enough(plain: &str) -> bool {
    plain.chars().count() >= MIN_PASSWORD_LEN
}

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_addresses() {
        assert_eq!(
            normalize_email("  Kumo@Example.COM "),
            Some("kumo@example.com".to_string())
        );
        assert_eq!(normalize_email("not-an-email"), None);
        assert_eq!(normalize_email("a b@example.com"), None);
    }

    #[test]
    fn enforces_minimum_password_length() {
        assert!(!password_long_enough("short"));
        assert!(password_long_enough("eightchr"));
    }

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("Secur3P@ssw0rd!").expect("hashing should succeed");
        assert!(verify_password("Secur3P@ssw0rd!", &hash).expect("verify should succeed"));
        assert!(!verify_password("wrong-password", &hash).expect("verify should not error"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        let err = verify_password("anything", "not-a-valid-hash").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
