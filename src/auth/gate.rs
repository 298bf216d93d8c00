//! Role and ownership predicates.
//!
//! Handlers load a resource, then call [`authorize`] before touching or
//! returning it. List endpoints scope their query with [`owner_filter`].

use crate::auth::{AuthError, Identity};

/// Id of the configured admin account. Never assigned to a stored user.
pub const ADMIN_ID: i32 = 0;
pub const ADMIN_ROLE: &str = "admin";
pub const DEFAULT_ROLE: &str = "user";

/// A resource that belongs to exactly one user.
pub trait Owned {
    fn owner_id(&self) -> i32;
}

pub fn is_admin(identity: &Identity) -> bool {
    identity.id == ADMIN_ID
}

pub fn require_role(identity: &Identity, role: &str) -> Result<(), AuthError> {
    if identity.role == role {
        return Ok(());
    }

    tracing::warn!(
        user_id = identity.id,
        role = %identity.role,
        required = role,
        "Role check failed"
    );
    Err(AuthError::Forbidden(format!("Role '{role}' required")))
}

pub fn require_admin(identity: &Identity) -> Result<(), AuthError> {
    require_role(identity, ADMIN_ROLE)
}

pub fn can_access(identity: &Identity, owner_id: i32) -> bool {
    identity.id == owner_id || is_admin(identity)
}

pub fn authorize_owner(identity: &Identity, owner_id: i32) -> Result<(), AuthError> {
    if can_access(identity, owner_id) {
        return Ok(());
    }

    tracing::warn!(
        user_id = identity.id,
        owner_id,
        "Ownership check failed"
    );
    Err(AuthError::Forbidden(
        "Not authorized to access this resource".to_string(),
    ))
}

pub fn authorize<R: Owned>(identity: &Identity, resource: &R) -> Result<(), AuthError> {
    authorize_owner(identity, resource.owner_id())
}

/// Owners are stored users. The admin account has no row to hang records on.
pub fn require_stored_user(identity: &Identity) -> Result<(), AuthError> {
    if !is_admin(identity) {
        return Ok(());
    }

    tracing::warn!(user_id = identity.id, "Admin account tried to own a record");
    Err(AuthError::Forbidden(
        "The admin account cannot own records".to_string(),
    ))
}

/// `None` means every row is visible.
pub fn owner_filter(identity: &Identity) -> Option<i32> {
    if is_admin(identity) {
        None
    } else {
        Some(identity.id)
    }
}
