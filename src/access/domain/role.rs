//! Organisational roles ordered by authority.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role held by a member of the organisation.
///
/// Variants are declared in ascending order of authority, so the derived
/// ordering matches [`Role::rank`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Individual contributor who owns and works on tasks.
    Employee,
    /// Manages the members who report directly to them.
    Manager,
    /// Oversees every member of a department.
    DepartmentHead,
    /// Unscoped administrator.
    Admin,
}

impl Role {
    /// Every role, lowest authority first.
    pub const ALL: [Self; 4] = [
        Self::Employee,
        Self::Manager,
        Self::DepartmentHead,
        Self::Admin,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "EMPLOYEE",
            Self::Manager => "MANAGER",
            Self::DepartmentHead => "DEPARTMENT_HEAD",
            Self::Admin => "ADMIN",
        }
    }

    /// Returns the authority rank; higher ranks carry more authority.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Employee => 0,
            Self::Manager => 1,
            Self::DepartmentHead => 2,
            Self::Admin => 3,
        }
    }

    /// Returns whether this role carries at least the authority of `other`.
    #[must_use]
    pub const fn outranks_or_equals(self, other: Self) -> bool {
        self.rank() >= other.rank()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "EMPLOYEE" => Ok(Self::Employee),
            "MANAGER" => Ok(Self::Manager),
            "DEPARTMENT_HEAD" => Ok(Self::DepartmentHead),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
