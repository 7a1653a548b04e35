//! Organisation member as seen by access decisions.

use super::{DepartmentId, Role, UserId};
use serde::{Deserialize, Serialize};

/// Member of the organisation with the hierarchy facts access checks need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: UserId,
    role: Role,
    manager_id: Option<UserId>,
    department_id: Option<DepartmentId>,
}

impl Member {
    /// Creates a member with no manager and no department.
    #[must_use]
    pub const fn new(id: UserId, role: Role) -> Self {
        Self {
            id,
            role,
            manager_id: None,
            department_id: None,
        }
    }

    /// Sets the direct manager.
    #[must_use]
    pub const fn with_manager(mut self, manager_id: UserId) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    /// Sets the department.
    #[must_use]
    pub const fn with_department(mut self, department_id: DepartmentId) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the member's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the direct manager, if any.
    #[must_use]
    pub const fn manager_id(&self) -> Option<UserId> {
        self.manager_id
    }

    /// Returns the department, if any.
    #[must_use]
    pub const fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }

    /// Returns whether `other` reports directly to this member.
    #[must_use]
    pub fn manages(&self, other: &Self) -> bool {
        other.manager_id == Some(self.id)
    }
}
