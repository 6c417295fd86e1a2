use crate::model::person::Person;
use serde::{Deserialize, Serialize};

/// Department ("area") row as served by `GET /api/area`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub uuid: String,
    #[serde(rename = "nameArea")]
    pub name_area: String,
    #[serde(rename = "personBean")]
    pub person_bean: Person,
    #[serde(default = "default_status")]
    pub status: bool,
}

fn default_status() -> bool {
    true
}
