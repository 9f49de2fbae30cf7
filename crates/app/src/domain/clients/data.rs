//! Client Data

use crate::domain::clients::records::ClientUuid;

/// New Client Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewClient {
    pub uuid: ClientUuid,
    pub name: String,
    pub surname: String,

    /// National identity document number. Empty when unknown.
    pub national_id: String,

    pub phone: String,
    pub email: String,
}

impl NewClient {
    /// Trim every field and collapse an empty national ID to `None`.
    pub(crate) fn normalized(self) -> NormalizedClient {
        let national_id = self.national_id.trim();

        NormalizedClient {
            uuid: self.uuid,
            name: self.name.trim().to_string(),
            surname: self.surname.trim().to_string(),
            national_id: (!national_id.is_empty()).then(|| national_id.to_string()),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NormalizedClient {
    pub uuid: ClientUuid,
    pub name: String,
    pub surname: String,
    pub national_id: Option<String>,
    pub phone: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_trims_fields() {
        let client = NewClient {
            name: "  Rosa ".to_string(),
            surname: " Quispe".to_string(),
            national_id: " 45879632 ".to_string(),
            phone: " 999 ".to_string(),
            email: "rosa@example.com  ".to_string(),
            ..NewClient::default()
        }
        .normalized();

        assert_eq!(client.name, "Rosa");
        assert_eq!(client.surname, "Quispe");
        assert_eq!(client.national_id.as_deref(), Some("45879632"));
        assert_eq!(client.phone, "999");
        assert_eq!(client.email, "rosa@example.com");
    }

    #[test]
    fn blank_national_id_becomes_none() {
        let client = NewClient {
            name: "Rosa".to_string(),
            national_id: "   ".to_string(),
            ..NewClient::default()
        }
        .normalized();

        assert_eq!(client.national_id, None);
    }
}
