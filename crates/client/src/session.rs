//! Admin entry.
//!
//! The storefront distinguishes visitors from catalog managers through an
//! `AdminGate`. `StaticCodeGate` compares against a shared code held by the
//! client, which anyone can read, so it is not a security boundary.
//! `BearerGate` treats what the operator enters as a capability token; the
//! backend checks it on every mutating call.

use thiserror::Error;

/// Capability token sent as `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn bearer(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// An open admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    credential: Option<Credential>,
}

impl AdminSession {
    /// Session without a credential (static code gate).
    pub fn anonymous() -> Self {
        Self { credential: None }
    }

    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("incorrect admin code")]
    IncorrectCode,
    #[error("admin token must not be empty")]
    EmptyToken,
}

/// Decides whether an operator may enter admin mode.
pub trait AdminGate: Send + Sync {
    fn admit(&self, code: &str) -> Result<AdminSession, GateError>;
}

/// Exact comparison against a configured code.
#[derive(Debug, Clone)]
pub struct StaticCodeGate {
    code: String,
}

impl StaticCodeGate {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl AdminGate for StaticCodeGate {
    fn admit(&self, code: &str) -> Result<AdminSession, GateError> {
        if code == self.code {
            Ok(AdminSession::anonymous())
        } else {
            Err(GateError::IncorrectCode)
        }
    }
}

/// Accepts any non-empty token and carries it as the session credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerGate;

impl AdminGate for BearerGate {
    fn admit(&self, code: &str) -> Result<AdminSession, GateError> {
        let token = code.trim();
        if token.is_empty() {
            return Err(GateError::EmptyToken);
        }
        Ok(AdminSession::with_credential(Credential::new(token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_gate_requires_exact_code() {
        let gate = StaticCodeGate::new("9999");
        assert_eq!(gate.admit("9999"), Ok(AdminSession::anonymous()));
        assert_eq!(gate.admit("9998"), Err(GateError::IncorrectCode));
        assert_eq!(gate.admit(" 9999"), Err(GateError::IncorrectCode));
        assert_eq!(gate.admit(""), Err(GateError::IncorrectCode));
    }

    #[test]
    fn bearer_gate_carries_token() {
        let session = BearerGate.admit("  tok-123 ").unwrap();
        assert_eq!(session.credential().map(Credential::bearer), Some("tok-123"));
        assert_eq!(BearerGate.admit("   "), Err(GateError::EmptyToken));
    }

    #[test]
    fn credential_debug_is_redacted() {
        let rendered = format!("{:?}", Credential::new("secret"));
        assert!(!rendered.contains("secret"));
    }
}
