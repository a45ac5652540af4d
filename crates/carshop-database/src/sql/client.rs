//! Statements for the `clients` table.

pub const INSERT: &str = "INSERT INTO clients (client_name, contact_info) \
     VALUES ($1, $2) \
     RETURNING id, client_name, contact_info";

pub const SELECT_ALL: &str = "SELECT id, client_name, contact_info FROM clients ORDER BY id";

pub const SELECT_BY_ID: &str = "SELECT id, client_name, contact_info FROM clients WHERE id = $1";

/// `$3` is the id.
pub const UPDATE: &str = "UPDATE clients SET client_name = $1, contact_info = $2 \
     WHERE id = $3 \
     RETURNING id, client_name, contact_info";

pub const DELETE: &str = "DELETE FROM clients WHERE id = $1";
