//! Repository implementations for all CarShop entities.

pub mod audit;
pub mod car;
pub mod client;
pub mod order;
pub mod user;

pub use audit::AuditLogRepository;
pub use car::CarRepository;
pub use client::ClientRepository;
pub use order::OrderRepository;
pub use user::UserRepository;

use carshop_core::error::{AppError, ErrorKind};

/// Map a sqlx failure into a `Database` error carrying it as the source.
///
/// Not logged here; the failure is reported once where it becomes a
/// response.
pub(crate) fn database_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}

/// Name of the constraint a database error violated, if any.
pub(crate) fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}

/// Whether `err` is a foreign-key violation (SQLSTATE 23503).
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_keeps_context_and_cause() {
        let err = database_error("Failed to list cars")(sqlx::Error::RowNotFound);

        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Failed to list cars");
        assert!(err.is_server_error());
        let cause = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(cause, Some(sqlx::Error::RowNotFound.to_string()));
    }

    #[test]
    fn test_non_database_errors_name_no_constraint() {
        assert_eq!(violated_constraint(&sqlx::Error::RowNotFound), None);
        assert!(!is_foreign_key_violation(&sqlx::Error::PoolTimedOut));
    }
}
