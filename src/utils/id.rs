use std::fmt;

use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

use crate::config::ID_LENGTH;

/// Opaque fixed-length identifier distinguishing an instance from its peers.
///
/// Tokens are random alphanumeric strings. Uniqueness is assumed rather than
/// checked, so two ids only compare equal when one was copied from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId([u8; ID_LENGTH]);

impl InstanceId {
    /// Generates a fresh id from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generates an id from the provided RNG, useful for reproducible scenes.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| rng.sample(Alphanumeric)))
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII alphanumerics are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
