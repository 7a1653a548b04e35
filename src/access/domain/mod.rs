//! Domain model for roles, permissions, and access predicates.

mod error;
mod ids;
mod member;
mod permission;
mod policy;
mod role;

pub use error::ParseRoleError;
pub use ids::{DepartmentId, UserId};
pub use member::Member;
pub use permission::{Permission, has_permission, permissions_for};
pub use policy::{
    can_approve_task, can_assign_tasks, can_view_productivity, can_view_radar, can_view_task,
    is_manager_or_above,
};
pub use role::Role;
