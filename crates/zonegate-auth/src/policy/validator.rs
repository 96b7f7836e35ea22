//! Compiles a policy into rules and evaluates candidate credentials.

use thiserror::Error;

use zonegate_core::types::policy::{CredentialPolicy, PolicyKind};

use super::rule::PolicyRule;

/// Default status carried by [`InvalidSecretError`] (HTTP 400).
pub const DEFAULT_INVALID_SECRET_STATUS: u16 = 400;

/// Ordered violation messages for one candidate. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    messages: Vec<String>,
}

impl ValidationResult {
    /// Whether no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages in rule order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Convert into `Ok(())` when valid, or an [`InvalidSecretError`].
    pub fn into_result(self) -> Result<(), InvalidSecretError> {
        match InvalidSecretError::from_messages(self.messages) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// One or more policy rules were violated.
///
/// Always carries at least one message. `Display` joins the messages with
/// `,` in rule order; [`messages_as_one_string`](Self::messages_as_one_string)
/// is the sorted, space-joined display form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join(","))]
pub struct InvalidSecretError {
    messages: Vec<String>,
    status: u16,
}

impl InvalidSecretError {
    /// A single-message error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            status: DEFAULT_INVALID_SECRET_STATUS,
        }
    }

    /// Build from a message list; `None` for an empty list.
    pub fn from_messages(messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            return None;
        }
        Some(Self {
            messages,
            status: DEFAULT_INVALID_SECRET_STATUS,
        })
    }

    /// Override the status code reported to callers.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Messages in evaluation order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Status code reported to callers.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Messages sorted lexicographically and joined with a space.
    pub fn messages_as_one_string(&self) -> String {
        let mut sorted = self.messages.clone();
        sorted.sort();
        sorted.join(" ")
    }
}

/// A policy compiled into its active rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyValidator {
    kind: PolicyKind,
    rules: Vec<PolicyRule>,
}

impl PolicyValidator {
    /// Compile the active rules of `policy`.
    pub fn compile<P: CredentialPolicy>(policy: &P) -> Self {
        Self {
            kind: P::KIND,
            rules: PolicyRule::compile(policy.complexity()),
        }
    }

    /// The compiled rules in evaluation order.
    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }

    /// Message reported for an absent candidate.
    pub fn null_message(&self) -> String {
        format!("{} cannot be null", self.kind.subject())
    }

    /// Evaluate every rule against `candidate`, without short-circuiting.
    ///
    /// An absent candidate yields only the null message; rules are not
    /// evaluated.
    pub fn validate(&self, candidate: Option<&str>) -> ValidationResult {
        let Some(candidate) = candidate else {
            return ValidationResult {
                messages: vec![self.null_message()],
            };
        };

        let subject = self.kind.subject();
        let mut messages: Vec<String> = Vec::new();
        for rule in &self.rules {
            if let Some(message) = rule.check(subject, candidate) {
                if !messages.contains(&message) {
                    messages.push(message);
                }
            }
        }

        ValidationResult { messages }
    }
}
