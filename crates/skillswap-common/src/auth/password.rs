//! Password hashing and the registration password policy
//!
//! Hashes are Argon2id PHC strings with a random per-password salt.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

const MIN_STRONG_LENGTH: usize = 8;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Check that a password has 8+ characters with upper, lower and digit
///
/// # Errors
/// Returns a validation error naming the first unmet rule
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let rules: [(bool, &str); 4] = [
        (
            password.chars().count() >= MIN_STRONG_LENGTH,
            "Password must be at least 8 characters long",
        ),
        (
            password.chars().any(char::is_uppercase),
            "Password must contain at least one uppercase letter",
        ),
        (
            password.chars().any(char::is_lowercase),
            "Password must contain at least one lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one digit",
        ),
    ];

    match rules.iter().find(|(ok, _)| !ok) {
        Some((_, message)) => Err(AppError::Validation((*message).to_string())),
        None => Ok(()),
    }
}

/// Password service shared through application state
#[derive(Debug, Clone, Default)]
pub struct PasswordService {
    enforce_strength: bool,
}

impl PasswordService {
    /// Create a password service; `enforce_strength` turns on the strength rules
    #[must_use]
    pub fn new(enforce_strength: bool) -> Self {
        Self { enforce_strength }
    }

    /// Check a password chosen at registration
    ///
    /// # Errors
    /// Returns a validation error when the password is empty, or too weak
    /// while strength is enforced
    pub fn check_new_password(&self, password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }
        if self.enforce_strength {
            validate_password_strength(password)?;
        }
        Ok(())
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    /// Verify a password and return `InvalidCredentials` on mismatch
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if verify_password(password, hash)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}
