//! Statements for the `orders` table.

pub const INSERT: &str = "INSERT INTO orders (client_id, car_id, creation_date, status) \
     VALUES ($1, $2, $3, $4) \
     RETURNING id, client_id, car_id, creation_date, status";

pub const SELECT_ALL: &str =
    "SELECT id, client_id, car_id, creation_date, status FROM orders ORDER BY id";

pub const SELECT_BY_ID: &str =
    "SELECT id, client_id, car_id, creation_date, status FROM orders WHERE id = $1";

/// `$5` is the id.
pub const UPDATE: &str =
    "UPDATE orders SET client_id = $1, car_id = $2, creation_date = $3, status = $4 \
     WHERE id = $5 \
     RETURNING id, client_id, car_id, creation_date, status";

/// `$4` is the id; `creation_date` is left alone.
pub const UPDATE_KEEPING_DATE: &str =
    "UPDATE orders SET client_id = $1, car_id = $2, status = $3 \
     WHERE id = $4 \
     RETURNING id, client_id, car_id, creation_date, status";

pub const DELETE: &str = "DELETE FROM orders WHERE id = $1";

/// Foreign key from `orders.client_id` to `clients.id`.
pub const CLIENT_FK: &str = "orders_client_id_fkey";

/// Foreign key from `orders.car_id` to `cars.id`.
pub const CAR_FK: &str = "orders_car_id_fkey";
