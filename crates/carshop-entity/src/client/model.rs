//! Client entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A dealership customer. Orders refer to clients by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Sequence-generated identifier.
    pub id: i32,
    /// Full name.
    pub client_name: String,
    /// Phone number, e-mail or other free-form contact details.
    pub contact_info: String,
}

impl Client {
    /// Build a client that has not been persisted yet (id `0`).
    pub fn new(client_name: impl Into<String>, contact_info: impl Into<String>) -> Self {
        Self {
            id: 0,
            client_name: client_name.into(),
            contact_info: contact_info.into(),
        }
    }

    /// Return a copy carrying the given id.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case() {
        let client: Client = serde_json::from_str(
            r#"{"id": 5, "clientName": "Ivan Petrov", "contactInfo": "+7 900 000 00 00"}"#,
        )
        .unwrap();
        assert_eq!(client, Client::new("Ivan Petrov", "+7 900 000 00 00").with_id(5));
    }
}
