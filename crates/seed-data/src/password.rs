//! Password hashing for seeded users.

use argon2::{
    Algorithm, Argon2, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::config::{ConfigError, HashConfig};
use crate::error::SeedError;

/// Argon2id hasher with a configurable work factor.
///
/// Every hash gets a fresh random salt and is returned as a PHC string, so
/// the parameters travel with the hash and verification needs no config.
#[derive(Clone)]
pub struct PasswordHashing {
    argon2: Argon2<'static>,
}

impl PasswordHashing {
    pub fn new(config: &HashConfig) -> Result<Self, ConfigError> {
        let params = config.params()?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    pub fn hash(&self, password: &str) -> Result<String, SeedError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| SeedError::PasswordHash(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Checks a plaintext password against a stored PHC hash.
    pub fn verify(password: &str, hash: &str) -> Result<bool, SeedError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| SeedError::PasswordHash(format!("Invalid password hash: {e}")))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHashing {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}
