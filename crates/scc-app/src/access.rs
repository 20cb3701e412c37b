//! # Access Gate
//!
//! Password gate in front of the compass pages. The password is never
//! stored; only its lowercase hex SHA-256 digest is configured. Access is
//! recorded in session storage as two flags:
//!
//! | Flag              | Meaning                         |
//! |-------------------|---------------------------------|
//! | `compassUnlocked` | full mode, real provider names  |
//! | `compassPublic`   | public mode, anonymized names   |
//!
//! The two flags are mutually exclusive on write; when both are somehow
//! present, the unlocked flag wins.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use scc_store::{keys, StorageManager};

/// Digest of the shipped default password.
pub const DEFAULT_PASSWORD_SHA256: &str =
    "8d3a1838c96994fdc083afd45060f5cc1f72983e6a995daca367806584d9ea15";

/// Presentation mode resolved from the session flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// Authenticated: real names.
    Full,
    /// Public mode: anonymized names.
    Public,
    /// Neither flag set; the login form is shown.
    Locked,
}

impl AccessMode {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Public => "public",
            Self::Locked => "locked",
        }
    }

    /// Footer label on the compass page.
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "Full access",
            Self::Public => "Public mode: provider names anonymized",
            Self::Locked => "Locked",
        }
    }

    /// Whether provider names must be replaced by codes.
    pub fn anonymized(self) -> bool {
        !matches!(self, Self::Full)
    }
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase hex SHA-256 of `input`.
pub fn sha256_hex(input: &str) -> String {
    Sha256::digest(input.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Compare two digests in constant time.
///
/// Lengths are compared first; on mismatch a dummy comparison keeps the
/// timing independent of where the inputs differ.
fn constant_time_digest_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Session-backed password gate.
#[derive(Debug, Clone)]
pub struct AccessGate {
    session: StorageManager,
    expected_digest: String,
}

impl AccessGate {
    /// Gate using the default digest.
    pub fn new(session: StorageManager) -> Self {
        Self::with_digest(session, DEFAULT_PASSWORD_SHA256)
    }

    /// Gate using a configured digest.
    pub fn with_digest(session: StorageManager, expected_digest: &str) -> Self {
        Self {
            session,
            expected_digest: expected_digest.trim().to_ascii_lowercase(),
        }
    }

    /// Check a password against the configured digest.
    pub fn validate(&self, password: &str) -> bool {
        constant_time_digest_eq(&sha256_hex(password), &self.expected_digest)
    }

    /// Validate and, on success, unlock full mode for the session.
    pub fn authenticate(&self, password: &str) -> bool {
        if !self.validate(password) {
            tracing::warn!("access password rejected");
            return false;
        }
        self.session.save_string(keys::SESSION_UNLOCKED, keys::FLAG_TRUE);
        self.session.remove(keys::SESSION_PUBLIC);
        tracing::info!("session unlocked");
        true
    }

    /// Continue without the password in anonymized mode.
    pub fn enable_public_mode(&self) {
        self.session.save_string(keys::SESSION_PUBLIC, keys::FLAG_TRUE);
        self.session.remove(keys::SESSION_UNLOCKED);
        tracing::info!("public mode enabled");
    }

    /// Resolve the current mode. A flag counts only when it is exactly
    /// `"true"`.
    pub fn check_session(&self) -> AccessMode {
        let flag = |key| self.session.load_string(key).as_deref() == Some(keys::FLAG_TRUE);
        if flag(keys::SESSION_UNLOCKED) {
            AccessMode::Full
        } else if flag(keys::SESSION_PUBLIC) {
            AccessMode::Public
        } else {
            AccessMode::Locked
        }
    }

    /// Clear both flags.
    pub fn logout(&self) {
        self.session.remove(keys::SESSION_UNLOCKED);
        self.session.remove(keys::SESSION_PUBLIC);
        tracing::info!("session cleared");
    }
}
