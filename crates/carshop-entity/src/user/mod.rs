//! User domain entities.

pub mod model;
pub mod role;
pub mod search;

pub use model::User;
pub use role::UserRole;
pub use search::UserSearchCriteria;
