//! Credential verification.
//!
//! The store never inspects secrets itself; it delegates to an injected
//! [`CredentialVerifier`]. The default implementation is a fixed in-memory
//! list of demo accounts, which is all this single-tenant build needs. A
//! real backend would provide its own implementation of the same trait.

/// Identity details returned for a successfully verified credential pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub name: String,
    pub username: String,
}

/// Checks identifier/secret pairs against some credential source.
pub trait CredentialVerifier: Send + Sync {
    /// Verify a credential pair. `None` means no match.
    fn verify(&self, identifier: &str, secret: &str) -> Option<VerifiedIdentity>;

    /// Whether an identifier is already taken (blocks re-registration).
    fn is_registered(&self, identifier: &str) -> bool;
}

struct FixtureAccount {
    email: &'static str,
    password: &'static str,
    name: &'static str,
    username: &'static str,
}

const FIXTURE_ACCOUNTS: &[FixtureAccount] = &[
    FixtureAccount {
        email: "demo@example.com",
        password: "password123",
        name: "Demo User",
        username: "demouser",
    },
    FixtureAccount {
        email: "test@example.com",
        password: "test123",
        name: "Test User",
        username: "testuser",
    },
];

/// Default verifier backed by the fixed demo account list.
///
/// Identifier matching is case-insensitive; the secret must match exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCredentials;

impl CredentialVerifier for FixtureCredentials {
    fn verify(&self, identifier: &str, secret: &str) -> Option<VerifiedIdentity> {
        FIXTURE_ACCOUNTS
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(identifier) && a.password == secret)
            .map(|a| VerifiedIdentity {
                name: a.name.to_string(),
                username: a.username.to_string(),
            })
    }

    fn is_registered(&self, identifier: &str) -> bool {
        FIXTURE_ACCOUNTS
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_account_verifies() {
        let id = FixtureCredentials
            .verify("demo@example.com", "password123")
            .unwrap();
        assert_eq!(id.username, "demouser");
        assert_eq!(id.name, "Demo User");
    }

    #[test]
    fn identifier_match_is_case_insensitive() {
        assert!(FixtureCredentials
            .verify("DEMO@example.com", "password123")
            .is_some());
    }

    #[test]
    fn wrong_secret_fails() {
        assert!(FixtureCredentials.verify("demo@example.com", "wrong").is_none());
    }

    #[test]
    fn registration_check() {
        assert!(FixtureCredentials.is_registered("test@example.com"));
        assert!(!FixtureCredentials.is_registered("jane@x.com"));
    }
}
