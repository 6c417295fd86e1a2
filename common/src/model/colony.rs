use crate::model::person::Person;
use serde::{Deserialize, Serialize};

/// Colony row as served by `GET /api/colony`. A colony is deactivated, not
/// deleted: `status == false` rows stay in the collection and are listed
/// under the inactive filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colony {
    pub uuid: String,
    #[serde(rename = "nameColony")]
    pub name_colony: String,
    #[serde(rename = "personBean")]
    pub person_bean: Person,
    pub status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_nested_backend_shape() {
        let json = r#"{
            "uuid": "b9a7c3f0-1111-2222-3333-444455556666",
            "nameColony": "Centro",
            "personBean": {
                "name": "Juan",
                "lastname": "Perez",
                "email": "juan@example.com",
                "phone": "+525512345678"
            },
            "status": true
        }"#;
        let colony: Colony = serde_json::from_str(json).unwrap();
        assert_eq!(colony.name_colony, "Centro");
        assert_eq!(colony.person_bean.lastname, "Perez");
        assert!(colony.status);
    }
}
