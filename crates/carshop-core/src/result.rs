//! Result alias and lookup helpers shared by every CarShop crate.

use crate::error::AppError;

/// `Result` specialized to [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

/// Turns an optional lookup into a `NotFound` error naming the entity.
pub trait OrNotFound<T> {
    /// `Err(NotFound)` with the message `"{entity} with ID {id} not found"`
    /// when the value is absent.
    fn or_not_found(self, entity: &str, id: i32) -> AppResult<T>;
}

impl<T> OrNotFound<T> for Option<T> {
    fn or_not_found(self, entity: &str, id: i32) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(format!("{entity} with ID {id} not found")))
    }
}
