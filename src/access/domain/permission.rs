//! Static role to capability mapping.
//!
//! Capabilities are cumulative along the role hierarchy: each permission
//! names the lowest role that holds it, and every higher role inherits it.

use super::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability that may be granted to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Create tasks for oneself.
    CreateTask,
    /// Update and progress one's own tasks.
    UpdateOwnTask,
    /// View one's own tasks.
    ViewOwnTasks,
    /// View one's own productivity scores.
    ViewOwnProductivity,
    /// Assign tasks to other members.
    AssignTasks,
    /// Approve or reopen tasks awaiting review.
    ApproveTasks,
    /// View tasks owned by members within scope.
    ViewTeamTasks,
    /// View productivity scores of members within scope.
    ViewTeamProductivity,
    /// View the team radar overview.
    ViewRadar,
    /// Create and edit KPI buckets.
    ManageKpis,
    /// Manage department membership and settings.
    ManageDepartment,
    /// Create, edit, and deactivate users.
    ManageUsers,
    /// Publish organisation-wide announcements.
    ManageAnnouncements,
    /// Change organisation-wide settings such as scoring weights.
    ManageSettings,
}

impl Permission {
    /// Every permission, grouped by the lowest role that holds it.
    pub const ALL: [Self; 14] = [
        Self::CreateTask,
        Self::UpdateOwnTask,
        Self::ViewOwnTasks,
        Self::ViewOwnProductivity,
        Self::AssignTasks,
        Self::ApproveTasks,
        Self::ViewTeamTasks,
        Self::ViewTeamProductivity,
        Self::ViewRadar,
        Self::ManageKpis,
        Self::ManageDepartment,
        Self::ManageUsers,
        Self::ManageAnnouncements,
        Self::ManageSettings,
    ];

    /// Returns the lowest role granted this permission.
    #[must_use]
    pub const fn minimum_role(self) -> Role {
        match self {
            Self::CreateTask | Self::UpdateOwnTask | Self::ViewOwnTasks | Self::ViewOwnProductivity => {
                Role::Employee
            }
            Self::AssignTasks
            | Self::ApproveTasks
            | Self::ViewTeamTasks
            | Self::ViewTeamProductivity
            | Self::ViewRadar => Role::Manager,
            Self::ManageKpis | Self::ManageDepartment => Role::DepartmentHead,
            Self::ManageUsers | Self::ManageAnnouncements | Self::ManageSettings => Role::Admin,
        }
    }

    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTask => "create_task",
            Self::UpdateOwnTask => "update_own_task",
            Self::ViewOwnTasks => "view_own_tasks",
            Self::ViewOwnProductivity => "view_own_productivity",
            Self::AssignTasks => "assign_tasks",
            Self::ApproveTasks => "approve_tasks",
            Self::ViewTeamTasks => "view_team_tasks",
            Self::ViewTeamProductivity => "view_team_productivity",
            Self::ViewRadar => "view_radar",
            Self::ManageKpis => "manage_kpis",
            Self::ManageDepartment => "manage_department",
            Self::ManageUsers => "manage_users",
            Self::ManageAnnouncements => "manage_announcements",
            Self::ManageSettings => "manage_settings",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns whether `role` holds `permission`.
#[must_use]
pub const fn has_permission(role: Role, permission: Permission) -> bool {
    role.outranks_or_equals(permission.minimum_role())
}

/// Returns every permission held by `role`.
#[must_use]
pub fn permissions_for(role: Role) -> Vec<Permission> {
    Permission::ALL
        .into_iter()
        .filter(|permission| has_permission(role, *permission))
        .collect()
}
