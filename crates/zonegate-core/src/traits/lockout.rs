//! Lockout query contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::id::PrincipalId;

/// Answer from the lockout collaborator for one principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockoutDecision {
    /// Whether the principal may attempt authentication now.
    pub allowed: bool,
    /// Recent failed authentications counted by the collaborator.
    pub failure_count: u32,
}

impl LockoutDecision {
    /// An allowing decision.
    pub fn allowed(failure_count: u32) -> Self {
        Self {
            allowed: true,
            failure_count,
        }
    }

    /// A denying decision.
    pub fn denied(failure_count: u32) -> Self {
        Self {
            allowed: false,
            failure_count,
        }
    }
}

/// External service that tracks recent failed authentications per principal.
///
/// The gate only queries it; recording failures is the collaborator's own
/// business.
#[async_trait]
pub trait LockoutPolicy: Send + Sync + 'static {
    /// Decide whether `principal_id` may authenticate right now.
    async fn is_allowed(&self, principal_id: &PrincipalId) -> AppResult<LockoutDecision>;
}
