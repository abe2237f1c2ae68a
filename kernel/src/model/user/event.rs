use derive_new::new;

use crate::model::{id::UserId, role::Role};

#[derive(Debug, new)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    /// Plaintext credential; the store hashes it before persisting.
    pub password: String,
    pub role: Role,
}

/// Fully merged state for a user update. Callers resolve the partial input
/// against the stored record before building this event.
#[derive(Debug, new)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    /// `None` keeps the stored credential hash untouched.
    pub password: Option<String>,
    pub role: Role,
}
