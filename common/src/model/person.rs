use serde::{Deserialize, Serialize};

/// Responsible-party sub-record embedded in colony, municipality and area
/// rows (the backend nests it under `personBean`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
}
