use serde::{Deserialize, Serialize};
use std::fmt;

/// Citizen incident report as served by `GET /api/report` and
/// `GET /api/report/history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub uuid: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub status: ReportStatus,
    #[serde(rename = "colonyName", default)]
    pub colony_name: String,
    #[serde(rename = "municipalityName", default)]
    pub municipality_name: String,
    /// Evidence attachments. Empty when the citizen uploaded none.
    #[serde(default)]
    pub image: Vec<ReportImage>,
}

/// One uploaded evidence file: the stored object name plus a fetchable URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportImage {
    pub image: String,
    pub url: String,
}

/// Report lifecycle state. The backend owns the transitions; the front-end
/// only renders them and requests cancellation or resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Pendiente,
    Resuelto,
    Cancelada,
    /// Unknown spellings map here so a backend addition never breaks the
    /// listing. Rendered with the neutral badge color.
    #[serde(other)]
    Desconocido,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportStatus::Pendiente => "Pendiente",
            ReportStatus::Resuelto => "Resuelto",
            ReportStatus::Cancelada => "Cancelada",
            ReportStatus::Desconocido => "Desconocido",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_report_with_evidence() {
        let json = r#"{
            "uuid": "r-1",
            "title": "Fuga de agua",
            "description": "En la esquina de la calle 5",
            "date": "2025-03-01",
            "status": "Pendiente",
            "colonyName": "Centro",
            "municipalityName": "Cuernavaca",
            "image": [{"image": "foto.jpg", "url": "https://cdn/foto.jpg"}]
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.status, ReportStatus::Pendiente);
        assert_eq!(report.image.len(), 1);
    }

    #[test]
    fn missing_evidence_defaults_to_empty() {
        let json = r#"{
            "uuid": "r-2",
            "title": "Bache",
            "date": "2025-03-02",
            "status": "Resuelto"
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert!(report.image.is_empty());
        assert_eq!(report.description, "");
    }

    #[test]
    fn unknown_status_falls_back_to_desconocido() {
        let report: Report = serde_json::from_str(
            r#"{"uuid":"r-3","title":"x","date":"2025-01-01","status":"EnRevision"}"#,
        )
        .unwrap();
        assert_eq!(report.status, ReportStatus::Desconocido);
    }
}
