//! Statements for the `cars` table.

/// Insert a car, returning the stored row.
pub const INSERT: &str = "INSERT INTO cars (make, model, year, price, condition) \
     VALUES ($1, $2, $3, $4, $5) \
     RETURNING id, make, model, year, price, condition";

/// Every car, ordered by id.
pub const SELECT_ALL: &str = "SELECT id, make, model, year, price, condition FROM cars ORDER BY id";

/// One car by id.
pub const SELECT_BY_ID: &str =
    "SELECT id, make, model, year, price, condition FROM cars WHERE id = $1";

/// Overwrite a car, returning the stored row. `$6` is the id.
pub const UPDATE: &str = "UPDATE cars SET make = $1, model = $2, year = $3, price = $4, condition = $5 \
     WHERE id = $6 \
     RETURNING id, make, model, year, price, condition";

/// Delete a car by id.
pub const DELETE: &str = "DELETE FROM cars WHERE id = $1";

/// Projection that search filters are appended to.
pub const SELECT_BASE: &str = "SELECT id, make, model, year, price, condition FROM cars";

/// Column filtered by `make`.
pub const MAKE: &str = "make";
/// Column filtered by `model`.
pub const MODEL: &str = "model";
/// Column filtered by `year`.
pub const YEAR: &str = "year";
/// Column filtered by `price`.
pub const PRICE: &str = "price";
/// Column filtered by `condition`.
pub const CONDITION: &str = "condition";
