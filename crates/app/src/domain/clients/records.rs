//! Client Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Client UUID
pub type ClientUuid = TypedUuid<ClientRecord>;

/// Client Record
#[derive(Debug, Clone)]
pub struct ClientRecord {
    pub uuid: ClientUuid,
    pub name: String,
    pub surname: String,
    pub national_id: Option<String>,
    pub phone: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ClientRecord {
    /// Name and surname joined for display.
    pub fn full_name(&self) -> String {
        if self.surname.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.surname)
        }
    }
}
