//! SQL statement catalog.
//!
//! One submodule per table. Statements are plain constants with `$n`
//! placeholders; only search queries are assembled at runtime, by
//! [`where_clause`].

pub mod audit;
pub mod car;
pub mod client;
pub mod order;
pub mod user;

/// How a populated search field constrains its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Case-sensitive substring match: `column LIKE $n`, bound as `%value%`.
    Contains(&'static str),
    /// Exact match: `column = $n`.
    Equals(&'static str),
}

/// Build a `WHERE` clause for the given filters.
///
/// Placeholders are numbered from `$1` in the order the filters are
/// given, which must also be the bind order. No filters yield an empty
/// string.
pub fn where_clause(filters: &[Filter]) -> String {
    if filters.is_empty() {
        return String::new();
    }

    let conditions: Vec<String> = filters
        .iter()
        .enumerate()
        .map(|(i, filter)| {
            let idx = i + 1;
            match filter {
                Filter::Contains(column) => format!("{column} LIKE ${idx}"),
                Filter::Equals(column) => format!("{column} = ${idx}"),
            }
        })
        .collect();

    format!(" WHERE {}", conditions.join(" AND "))
}

/// Wrap a search term for use with a [`Filter::Contains`] placeholder.
pub fn contains_pattern(value: &str) -> String {
    format!("%{value}%")
}

/// Assemble a full search query from a base `SELECT` and its filters.
pub fn search_query(select_base: &str, filters: &[Filter]) -> String {
    format!("{select_base}{} ORDER BY id", where_clause(filters))
}
