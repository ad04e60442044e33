use serde::{Deserialize, Serialize};

use bookkeeper_core::{DomainError, DomainResult, ValueObject};

bookkeeper_core::typed_id!(
    /// Client identifier.
    ClientId
);

/// Identity and display data of the client a request is made for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientData {
    id: ClientId,
    name: String,
}

impl ValueObject for ClientData {}

impl ClientData {
    pub fn new(id: ClientId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("client name cannot be empty"));
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_id_and_name() {
        let id = ClientId::generate();
        let client = ClientData::new(id, "Kowalski").unwrap();
        assert_eq!(client.id(), id);
        assert_eq!(client.name(), "Kowalski");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = ClientData::new(ClientId::generate(), "   ").unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("client name cannot be empty") => {}
            _ => panic!("Expected Validation error for blank client name"),
        }
    }

    #[test]
    fn serializes_id_transparently() {
        let client = ClientData::new(ClientId::generate(), "Nowak").unwrap();
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["id"], serde_json::Value::String(client.id().to_string()));
        assert_eq!(json["name"], "Nowak");
    }
}
