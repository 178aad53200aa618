//! Password hashing and verification (Argon2id, PHC-format digests).

use crate::error::{AppError, AppResult};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use std::sync::Arc;

/// Hashes and verifies passwords with a fixed Argon2id work factor.
///
/// Cheap to clone; handlers move a clone into `spawn_blocking`.
#[derive(Clone)]
pub struct Passwords {
    argon2: Argon2<'static>,
    // Digest checked when the login identifier matches no account.
    dummy: Arc<str>,
}

impl Passwords {
    /// Build a hasher with the given work factor (memory KiB, iterations, parallelism).
    ///
    /// `Params::default()` is the argon2 crate's recommendation (19 MiB, t=2, p=1).
    pub fn new(params: Params) -> AppResult<Self> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);
        let dummy = argon2
            .hash_password(b"dummy-password-for-missing-accounts", &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash: {}", e)))?
            .to_string();
        Ok(Self {
            argon2,
            dummy: dummy.into(),
        })
    }

    /// Hash `password` with a fresh random salt.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash: {}", e)))?
            .to_string();
        Ok(hash)
    }

    /// Check `password` against a stored digest. Salt and parameters come from the digest.
    pub fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("parse hash: {}", e)))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Spend one verification on the dummy digest so a missing account costs
    /// as much as a wrong password. Always `false`.
    pub fn verify_absent(&self, password: &str) -> bool {
        let _ = self.verify(password, &self.dummy);
        false
    }
}

#[cfg(test)]
pub(crate) fn fast() -> Passwords {
    let params = Params::new(1024, 1, 1, None).unwrap();
    Passwords::new(params).unwrap()
}
