//! Statements for the `users` table.

pub const INSERT: &str = "INSERT INTO users (username, password, role) \
     VALUES ($1, $2, $3) \
     RETURNING id, username, password, role";

pub const SELECT_ALL: &str = "SELECT id, username, password, role FROM users ORDER BY id";

pub const SELECT_BY_ID: &str = "SELECT id, username, password, role FROM users WHERE id = $1";

/// `$4` is the id.
pub const UPDATE: &str = "UPDATE users SET username = $1, password = $2, role = $3 \
     WHERE id = $4 \
     RETURNING id, username, password, role";

pub const DELETE: &str = "DELETE FROM users WHERE id = $1";

/// Whether any user holds the login name in `$1`.
pub const EXISTS_BY_USERNAME: &str = "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)";

/// Id of the user holding the login name in `$1`.
pub const SELECT_ID_BY_USERNAME: &str = "SELECT id FROM users WHERE username = $1";

pub const SELECT_BASE: &str = "SELECT id, username, password, role FROM users";

pub const USERNAME: &str = "username";
pub const ROLE: &str = "role";

/// Unique constraint on `users.username`.
pub const USERNAME_UNIQUE: &str = "users_username_key";
