//! Request and response payloads for the REST contract the front-end
//! consumes. Field spellings are the backend's (camelCase where it uses
//! camelCase); every body the app sends or receives is typed here so the
//! pages never build ad hoc JSON.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/signin`. The backend calls the email field
/// `username`.
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// 2xx response of `POST /api/auth/signin`. `role` stays a raw string here:
/// the caller decides whether it names a role it can route
/// (`model::role::Role::parse`) before persisting anything.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub role: String,
    pub token: String,
}

/// Body of `POST /api/colony`: the colony plus its first president.
#[derive(Debug, Clone, Serialize)]
pub struct CreateColonyRequest {
    #[serde(rename = "colonyName")]
    pub colony_name: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Body of `POST /api/municipality`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMunicipalityRequest {
    #[serde(rename = "nameMunicipality")]
    pub name_municipality: String,
    pub description: String,
    pub state: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Body of `POST /api/area`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAreaRequest {
    #[serde(rename = "nameArea")]
    pub name_area: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Body of the contact-update `PUT` on the three managed collections.
/// Identity fields are immutable by convention and never sent.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateContactRequest {
    pub uuid: String,
    pub email: String,
    pub phone: String,
}

/// Body of `DELETE` on the three managed collections. Deletion is a
/// deactivation on the server side.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteRequest {
    pub uuid: String,
}

/// Body of `PUT /api/{colony,municipality,area}/transfer`: replaces the
/// responsible person without touching the resource's identity fields.
#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest {
    pub uuid: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Body of `PUT /api/report` when a municipal officer routes a report to a
/// responding area.
#[derive(Debug, Clone, Serialize)]
pub struct AssignReportAreaRequest {
    pub uuid: String,
    #[serde(rename = "uuidArea")]
    pub uuid_area: String,
}

/// Body of `PUT /api/report` when an area responder closes out a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportStatusUpdateRequest {
    pub uuid: String,
    #[serde(rename = "statusDescription")]
    pub status_description: String,
}

/// Body of `PUT /api/report/cancel`.
#[derive(Debug, Clone, Serialize)]
pub struct CancelReportRequest {
    pub uuid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_colony_uses_backend_field_names() {
        let body = CreateColonyRequest {
            colony_name: "Centro".into(),
            name: "Juan".into(),
            lastname: "Perez".into(),
            email: "juan@example.com".into(),
            phone: "+525512345678".into(),
            password: "Abcdef1!".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["colonyName"], "Centro");
        assert!(json.get("colony_name").is_none());
    }

    #[test]
    fn report_assignment_uses_uuid_area() {
        let body = AssignReportAreaRequest {
            uuid: "r-1".into(),
            uuid_area: "a-9".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["uuidArea"], "a-9");
    }

    #[test]
    fn sign_in_sends_the_email_as_username() {
        let body = SignInRequest {
            username: "municipal@comureport.com".into(),
            password: "municipal123".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["username"], "municipal@comureport.com");
    }
}
