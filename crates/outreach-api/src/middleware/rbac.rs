//! RBAC guards for handlers.

use outreach_auth::rbac::SystemPermission;
use outreach_core::error::AppError;

use crate::extractors::AuthUser;
use crate::state::AppState;

/// Checks that the authenticated employee's role grants `permission`.
pub fn require_permission(
    state: &AppState,
    auth: &AuthUser,
    permission: SystemPermission,
) -> Result<(), AppError> {
    state.rbac_enforcer.require_permission(auth.role, permission)
}
