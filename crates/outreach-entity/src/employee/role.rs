//! Employee role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available to field staff and back-office employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "employee_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EmployeeRole {
    /// Runs the program and supervises supervisors.
    Manager,
    /// Oversees a group of scouts.
    Supervisor,
    /// Field staff conducting visits; the unit of payment.
    Scout,
    /// Back-office role that reviews and settles scout payments.
    Accountant,
}

impl EmployeeRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Supervisor => "supervisor",
            Self::Scout => "scout",
            Self::Accountant => "accountant",
        }
    }

    /// Check if this role does field work.
    pub fn is_field_staff(&self) -> bool {
        matches!(self, Self::Scout)
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmployeeRole {
    type Err = outreach_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manager" => Ok(Self::Manager),
            "supervisor" => Ok(Self::Supervisor),
            "scout" => Ok(Self::Scout),
            "accountant" => Ok(Self::Accountant),
            _ => Err(outreach_core::AppError::validation(format!(
                "Invalid employee role: '{s}'. Expected one of: manager, supervisor, scout, accountant"
            ))),
        }
    }
}
