//! "Authentication failed" notification hook.

use zonegate_core::types::zone::ZoneContext;

use crate::gate::GateError;

/// Notified when an attempt fails with a bad-credentials-class error.
///
/// Lockout and expiration rejections are never routed here.
pub trait AuthenticationEntryPoint: Send + Sync + 'static {
    /// Called once per failed attempt, before the error reaches the caller.
    fn commence(&self, zone: &ZoneContext, failure: &GateError);
}

/// Entry point that records the failure in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEntryPoint;

impl AuthenticationEntryPoint for TracingEntryPoint {
    fn commence(&self, zone: &ZoneContext, failure: &GateError) {
        tracing::info!(
            zone = %zone.id(),
            principal = failure.principal_id().map(|p| p.as_str()).unwrap_or("-"),
            error = %failure,
            "Authentication failed"
        );
    }
}
