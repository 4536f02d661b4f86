use serde::{Deserialize, Serialize};

/// A user record held in the external store.
///
/// The identifier is opaque text; uniqueness is the store's responsibility.
/// The phone number is kept as-is, no format is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Display name printed on the business card.
    pub name: String,
    pub phone: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Whether the record carries an identifier at all.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}
