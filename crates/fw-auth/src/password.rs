//! Password hashing for parent accounts.
//!
//! Uses Argon2id with OWASP-recommended parameters. Hashes are stored in
//! PHC string format, so verification reads its cost parameters from the
//! hash itself and previously issued hashes stay valid when the policy
//! changes.

use std::fmt;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// Errors from password checks, hashing, and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// The password does not meet the account policy.
    TooShort {
        /// Required minimum length in characters.
        min_length: usize,
    },
    /// The supplied password does not match the stored hash.
    Mismatch,
    /// Hashing or hash parsing failed internally.
    Hash(String),
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min_length } => {
                write!(f, "Password must be at least {min_length} characters long")
            }
            Self::Mismatch => write!(f, "Invalid credentials"),
            Self::Hash(msg) => write!(f, "Password hashing failed: {msg}"),
        }
    }
}

impl std::error::Error for PasswordError {}

/// Account password policy and Argon2id cost parameters.
///
/// Defaults follow the OWASP password storage cheat sheet: 19 MiB of
/// memory, 2 iterations, a single lane, and a 32-byte hash.
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    /// Minimum accepted password length in characters.
    pub min_length: usize,
    /// Argon2 memory cost in KiB.
    pub memory_cost: u32,
    /// Argon2 iteration count.
    pub time_cost: u32,
    /// Argon2 degree of parallelism.
    pub parallelism: u32,
    /// Output hash length in bytes.
    pub hash_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordPolicy {
    /// Creates the default policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_length: 5,
            memory_cost: 19 * 1024,
            time_cost: 2,
            parallelism: 1,
            hash_length: 32,
        }
    }

    /// Sets the minimum password length (builder pattern).
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the Argon2 memory cost in KiB (builder pattern).
    #[must_use]
    pub const fn with_memory_cost(mut self, memory_cost: u32) -> Self {
        self.memory_cost = memory_cost;
        self
    }

    /// Sets the Argon2 iteration count (builder pattern).
    #[must_use]
    pub const fn with_time_cost(mut self, time_cost: u32) -> Self {
        self.time_cost = time_cost;
        self
    }
}

/// Checks, hashes, and verifies account passwords.
#[derive(Debug, Clone, Default)]
pub struct PasswordService {
    policy: PasswordPolicy,
}

impl PasswordService {
    /// Creates a service with the given policy.
    #[must_use]
    pub const fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    /// Checks a candidate password against the account policy.
    ///
    /// ## Errors
    ///
    /// Returns `PasswordError::TooShort` if the password is shorter than
    /// the policy minimum.
    pub fn check_policy(&self, password: &str) -> Result<(), PasswordError> {
        if password.chars().count() < self.policy.min_length {
            return Err(PasswordError::TooShort {
                min_length: self.policy.min_length,
            });
        }
        Ok(())
    }

    /// Hashes a password with Argon2id and a fresh random salt.
    ///
    /// ## Errors
    ///
    /// Returns `PasswordError::Hash` if the policy parameters are invalid
    /// or hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let params = Params::new(
            self.policy.memory_cost,
            self.policy.time_cost,
            self.policy.parallelism,
            Some(self.policy.hash_length),
        )
        .map_err(|e| PasswordError::Hash(e.to_string()))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::Hash(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Verifies a password against a stored PHC hash string.
    ///
    /// Cost parameters come from the hash string itself, not from the
    /// current policy.
    ///
    /// ## Errors
    ///
    /// Returns `PasswordError::Mismatch` if the password does not match
    /// and `PasswordError::Hash` if the stored hash cannot be parsed.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<(), PasswordError> {
        let parsed =
            PasswordHash::new(stored_hash).map_err(|e| PasswordError::Hash(e.to_string()))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| PasswordError::Mismatch)
    }
}
