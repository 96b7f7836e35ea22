//! The authentication gate.
//!
//! Every attempt walks the same ordered sequence:
//!
//! ```text
//! Start -> Extracted -> LockoutChecked -> ExpirationChecked -> Delegated
//! ```
//!
//! Any rejection short-circuits the sequence, so a locked-out or expired
//! principal never reaches the delegated authenticator. Only bad-credentials
//! failures (undecodable header, unknown client, wrong secret) are reported to
//! the [`AuthenticationEntryPoint`].

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Months, Utc};
use thiserror::Error;

use zonegate_core::error::AppError;
use zonegate_core::traits::client_store::ClientDetailsStore;
use zonegate_core::traits::clock::{Clock, SystemClock};
use zonegate_core::traits::lockout::LockoutPolicy;
use zonegate_core::types::id::PrincipalId;
use zonegate_core::types::policy::{ClientSecretPolicy, CredentialPolicy};
use zonegate_core::types::zone::ZoneContext;

use crate::authenticator::{AuthenticatedClient, AuthenticationError, Authenticator};
use crate::basic::{BasicAuthError, BasicCredentials, extract_basic_credentials};
use crate::entry_point::AuthenticationEntryPoint;
use crate::policy::TenantPolicyResolver;

/// Position of an attempt in the gate sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GateState {
    /// Nothing inspected yet.
    Start,
    /// Credentials decoded from the header.
    Extracted,
    /// The lockout collaborator allowed the attempt.
    LockoutChecked,
    /// The secret is within its expiration window.
    ExpirationChecked,
    /// Handed to the delegated authenticator.
    Delegated,
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Extracted => "extracted",
            Self::LockoutChecked => "lockout_checked",
            Self::ExpirationChecked => "expiration_checked",
            Self::Delegated => "delegated",
        };
        f.write_str(name)
    }
}

/// Terminal result of a successful pass through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// No Basic credentials were presented; the request is not an attempt on
    /// this gate and continues unchanged.
    PassThrough,
    /// The delegated authenticator accepted the credentials.
    Authenticated(AuthenticatedClient),
}

/// Coarse classification of a [`GateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// The Basic header could not be decoded.
    MalformedCredentials,
    /// Unknown principal or wrong secret.
    BadCredentials,
    /// Too many recent failures.
    LockedOut,
    /// The secret is older than the policy allows.
    CredentialExpired,
    /// A collaborator failed to answer.
    CollaboratorFailure,
}

/// Why the gate rejected an attempt.
#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    MalformedCredentials(#[from] BasicAuthError),

    #[error("Bad credentials")]
    BadCredentials { principal_id: PrincipalId },

    #[error(
        "Client {principal_id} has {failure_count} failed authentications within the last checking period."
    )]
    LockedOut {
        principal_id: PrincipalId,
        failure_count: u32,
    },

    #[error("Your current secret has expired. Please reset your secret.")]
    CredentialExpired {
        principal_id: PrincipalId,
        expired_at: DateTime<Utc>,
    },

    #[error("Lockout check failed: {0}")]
    LockoutUnavailable(AppError),

    #[error("Client lookup failed: {0}")]
    PrincipalLookup(AppError),

    #[error("Delegated authentication failed: {0}")]
    AuthenticatorUnavailable(AppError),
}

impl GateError {
    /// Whether this failure belongs to the bad-credentials class routed to
    /// the entry point.
    pub fn is_bad_credentials(&self) -> bool {
        matches!(
            self,
            Self::MalformedCredentials(_) | Self::BadCredentials { .. }
        )
    }

    /// Coarse classification.
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::MalformedCredentials(_) => RejectionKind::MalformedCredentials,
            Self::BadCredentials { .. } => RejectionKind::BadCredentials,
            Self::LockedOut { .. } => RejectionKind::LockedOut,
            Self::CredentialExpired { .. } => RejectionKind::CredentialExpired,
            Self::LockoutUnavailable(_)
            | Self::PrincipalLookup(_)
            | Self::AuthenticatorUnavailable(_) => RejectionKind::CollaboratorFailure,
        }
    }

    /// The principal the attempt was made for, once known.
    pub fn principal_id(&self) -> Option<&PrincipalId> {
        match self {
            Self::BadCredentials { principal_id }
            | Self::LockedOut { principal_id, .. }
            | Self::CredentialExpired { principal_id, .. } => Some(principal_id),
            _ => None,
        }
    }
}

/// The instant a secret last changed at `last_modified` stops being valid.
///
/// `None` when the policy disables expiry (`months <= 0`) or the date is out
/// of range.
pub fn secret_expires_at(last_modified: DateTime<Utc>, months: i32) -> Option<DateTime<Utc>> {
    let months = u32::try_from(months).ok().filter(|m| *m > 0)?;
    last_modified.checked_add_months(Months::new(months))
}

/// Lockout and expiration enforcement in front of a delegated authenticator.
pub struct AuthenticationGate {
    lockout: Arc<dyn LockoutPolicy>,
    clients: Arc<dyn ClientDetailsStore>,
    authenticator: Arc<dyn Authenticator>,
    entry_point: Arc<dyn AuthenticationEntryPoint>,
    secret_policy: TenantPolicyResolver<ClientSecretPolicy>,
    clock: Arc<dyn Clock>,
}

impl AuthenticationGate {
    /// Create a gate on the system clock.
    pub fn new(
        lockout: Arc<dyn LockoutPolicy>,
        clients: Arc<dyn ClientDetailsStore>,
        authenticator: Arc<dyn Authenticator>,
        entry_point: Arc<dyn AuthenticationEntryPoint>,
        global_secret_policy: ClientSecretPolicy,
    ) -> Self {
        Self {
            lockout,
            clients,
            authenticator,
            entry_point,
            secret_policy: TenantPolicyResolver::new(global_secret_policy),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source used for expiration.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Run one attempt through the gate.
    ///
    /// `authorization` is the raw `Authorization` header value, if any.
    pub async fn evaluate(
        &self,
        zone: &ZoneContext,
        authorization: Option<&[u8]>,
    ) -> Result<GateOutcome, GateError> {
        let mut state = GateState::Start;
        let result = self.run(zone, authorization, &mut state).await;

        if let Err(failure) = &result {
            tracing::warn!(
                zone = %zone.id(),
                state = %state,
                kind = ?failure.kind(),
                error = %failure,
                "Authentication rejected"
            );
            if failure.is_bad_credentials() {
                self.entry_point.commence(zone, failure);
            }
        }

        result
    }

    async fn run(
        &self,
        zone: &ZoneContext,
        authorization: Option<&[u8]>,
        state: &mut GateState,
    ) -> Result<GateOutcome, GateError> {
        let Some(credentials) = extract_basic_credentials(authorization)? else {
            return Ok(GateOutcome::PassThrough);
        };
        *state = GateState::Extracted;

        self.check_lockout(&credentials.principal_id).await?;
        *state = GateState::LockoutChecked;

        self.check_expiration(zone, &credentials.principal_id).await?;
        *state = GateState::ExpirationChecked;

        let client = self.delegate(zone, &credentials).await?;
        *state = GateState::Delegated;

        Ok(GateOutcome::Authenticated(client))
    }

    async fn check_lockout(&self, principal_id: &PrincipalId) -> Result<(), GateError> {
        let decision = self
            .lockout
            .is_allowed(principal_id)
            .await
            .map_err(GateError::LockoutUnavailable)?;

        if decision.allowed {
            Ok(())
        } else {
            Err(GateError::LockedOut {
                principal_id: principal_id.clone(),
                failure_count: decision.failure_count,
            })
        }
    }

    async fn check_expiration(
        &self,
        zone: &ZoneContext,
        principal_id: &PrincipalId,
    ) -> Result<(), GateError> {
        let client = self
            .clients
            .load_by_principal_id(zone.id(), principal_id)
            .await
            .map_err(GateError::PrincipalLookup)?
            .ok_or_else(|| GateError::BadCredentials {
                principal_id: principal_id.clone(),
            })?;

        let policy = self.secret_policy.resolve(zone);
        let Some(expires_at) = secret_expires_at(client.last_modified, policy.expire_in_months())
        else {
            return Ok(());
        };

        if expires_at < self.clock.now() {
            return Err(GateError::CredentialExpired {
                principal_id: principal_id.clone(),
                expired_at: expires_at,
            });
        }

        Ok(())
    }

    async fn delegate(
        &self,
        zone: &ZoneContext,
        credentials: &BasicCredentials,
    ) -> Result<AuthenticatedClient, GateError> {
        tracing::debug!(
            zone = %zone.id(),
            principal = %credentials.principal_id,
            "Delegating authentication"
        );

        self.authenticator
            .authenticate(zone, credentials)
            .await
            .map_err(|e| match e {
                AuthenticationError::BadCredentials => GateError::BadCredentials {
                    principal_id: credentials.principal_id.clone(),
                },
                AuthenticationError::Unavailable(source) => {
                    GateError::AuthenticatorUnavailable(source)
                }
            })
    }
}
