use crate::model::person::Person;
use serde::{Deserialize, Serialize};

/// Municipality row as served by `GET /api/municipality`. Soft-deleted like
/// colonies: `status == false` means deactivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    pub uuid: String,
    #[serde(rename = "nameMunicipality")]
    pub name_municipality: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "personBean")]
    pub person_bean: Person,
    pub status: bool,
}
