//! User search criteria.

use serde::{Deserialize, Serialize};

use super::role::UserRole;

/// Optional filters for a user search.
///
/// `username` matches as a case-sensitive substring, `role` exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSearchCriteria {
    /// Substring of the login name.
    pub username: Option<String>,
    /// Exact role.
    pub role: Option<UserRole>,
}
