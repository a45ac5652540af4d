//! Typed path parameter helpers.

use carshop_core::error::AppError;

/// Parse a numeric entity id from a path segment.
///
/// `entity` names the resource in the error message, e.g. `"car"` yields
/// `Invalid car ID format`.
pub fn parse_id(raw: &str, entity: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::bad_request(format!("Invalid {entity} ID format")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use carshop_core::error::ErrorKind;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "car").unwrap(), 42);
        let err = parse_id("abc", "car").unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadRequest);
        assert_eq!(err.message, "Invalid car ID format");
        assert!(parse_id("1.5", "order").is_err());
        assert!(parse_id("", "user").is_err());
    }
}
