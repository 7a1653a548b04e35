//! Relational access predicates combining role, ownership, and hierarchy.
//!
//! Department and global scope for department heads and administrators is
//! assumed to be pre-filtered by the caller; these predicates only decide
//! the direct-report relationship for managers.

use super::{Permission, Role, UserId, has_permission};

/// Returns whether the role is manager or above.
#[must_use]
pub const fn is_manager_or_above(role: Role) -> bool {
    role.outranks_or_equals(Role::Manager)
}

/// Returns whether the role may assign tasks to other members.
#[must_use]
pub const fn can_assign_tasks(role: Role) -> bool {
    has_permission(role, Permission::AssignTasks)
}

/// Returns whether the role may open the team radar view.
#[must_use]
pub const fn can_view_radar(role: Role) -> bool {
    has_permission(role, Permission::ViewRadar)
}

/// Returns whether the role may view productivity scores of other members.
#[must_use]
pub const fn can_view_productivity(role: Role) -> bool {
    has_permission(role, Permission::ViewTeamProductivity)
}

/// Returns whether a viewer may see a task.
///
/// Owners always see their own tasks. Managers see tasks owned by their
/// direct reports. Department heads and administrators see every task handed
/// to them.
#[must_use]
pub fn can_view_task(
    viewer_role: Role,
    viewer_id: UserId,
    task_owner_id: UserId,
    viewer_subordinate_ids: &[UserId],
) -> bool {
    if viewer_id == task_owner_id {
        return true;
    }
    match viewer_role {
        Role::Employee => false,
        Role::Manager => viewer_subordinate_ids.contains(&task_owner_id),
        Role::DepartmentHead | Role::Admin => true,
    }
}

/// Returns whether an approver may approve or reopen a task under review.
///
/// Self-approval is never allowed, whatever the role.
#[must_use]
pub fn can_approve_task(
    approver_role: Role,
    approver_id: UserId,
    task_owner_id: UserId,
    approver_subordinate_ids: &[UserId],
) -> bool {
    if approver_id == task_owner_id {
        return false;
    }
    match approver_role {
        Role::Employee => false,
        Role::Manager => approver_subordinate_ids.contains(&task_owner_id),
        Role::DepartmentHead | Role::Admin => true,
    }
}
