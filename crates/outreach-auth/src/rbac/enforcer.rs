//! RBAC enforcement logic: checks whether a role has a required permission.

use outreach_core::error::AppError;
use outreach_entity::employee::EmployeeRole;

use super::policies::{RbacPolicies, SystemPermission};

/// Enforces role-based access control for back-office operations.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer {
    /// The policy configuration.
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an enforcer with custom policies.
    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// Returns `Ok(())` if allowed, or an authorization error if denied.
    pub fn require_permission(
        &self,
        role: EmployeeRole,
        permission: SystemPermission,
    ) -> Result<(), AppError> {
        if self.policies.has_permission(role, permission) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' does not have permission '{permission:?}'"
            )))
        }
    }

    /// Checks whether the role has the required permission.
    pub fn has_permission(&self, role: EmployeeRole, permission: SystemPermission) -> bool {
        self.policies.has_permission(role, permission)
    }

    /// Returns a reference to the underlying policies.
    pub fn policies(&self) -> &RbacPolicies {
        &self.policies
    }
}
