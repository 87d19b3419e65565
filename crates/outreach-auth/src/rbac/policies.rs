//! Role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use outreach_entity::employee::EmployeeRole;

/// A back-office permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemPermission {
    /// List eligible disclosures and payment history.
    PaymentView,
    /// Record payments.
    PaymentMark,
    /// Read the audit trail of a disclosure.
    AuditView,
}

/// Defines the mapping from each role to its set of allowed permissions.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    /// Role → set of permissions.
    policies: HashMap<EmployeeRole, HashSet<SystemPermission>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let mut policies = HashMap::new();

        // Accountant: payments only
        policies.insert(
            EmployeeRole::Accountant,
            HashSet::from([SystemPermission::PaymentView, SystemPermission::PaymentMark]),
        );

        // Manager and supervisor: audit trail
        policies.insert(
            EmployeeRole::Manager,
            HashSet::from([SystemPermission::AuditView]),
        );
        policies.insert(
            EmployeeRole::Supervisor,
            HashSet::from([SystemPermission::AuditView]),
        );

        // Scouts use the field app, not the back office.
        policies.insert(EmployeeRole::Scout, HashSet::new());

        Self { policies }
    }

    /// Returns the set of permissions for the given role.
    pub fn permissions_for_role(&self, role: EmployeeRole) -> HashSet<SystemPermission> {
        self.policies.get(&role).cloned().unwrap_or_default()
    }

    /// Checks whether the given role has the specified permission.
    pub fn has_permission(&self, role: EmployeeRole, permission: SystemPermission) -> bool {
        self.policies
            .get(&role)
            .is_some_and(|perms| perms.contains(&permission))
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
