//! API key credential set.
//!
//! The set of valid API keys is loaded once at startup and never changes
//! while the process runs. Keys are held as SHA-256 hashes so the raw secrets
//! are not kept around after configuration is parsed.

use std::collections::HashSet;
use std::fmt;

use sha2::{Digest, Sha256};

/// Immutable allow-list of API keys.
///
/// Membership is an exact, case-sensitive match on the full key. An empty set
/// rejects every key.
#[derive(Clone, Default)]
pub struct CredentialSet {
    /// Hex-encoded SHA-256 digests of the accepted keys
    key_hashes: HashSet<String>,
}

impl CredentialSet {
    /// Build a credential set from raw keys.
    ///
    /// Empty strings are skipped so that a blank `VALID_API_KEYS` entry can
    /// never make `Bearer ` (with nothing after it) a valid credential.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key_hashes = keys
            .into_iter()
            .filter(|key| !key.as_ref().is_empty())
            .map(|key| hash_key(key.as_ref().as_bytes()))
            .collect();

        Self { key_hashes }
    }

    /// Check whether `candidate` is one of the configured keys.
    ///
    /// Takes raw bytes so keys outside ASCII compare exactly as sent on the wire.
    pub fn contains(&self, candidate: impl AsRef<[u8]>) -> bool {
        self.key_hashes.contains(&hash_key(candidate.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.key_hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_hashes.is_empty()
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSet")
            .field("keys", &self.key_hashes.len())
            .finish()
    }
}

fn hash_key(key: &[u8]) -> String {
    hex::encode(Sha256::digest(key))
}
