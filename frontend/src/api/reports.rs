//! `/api/report` endpoints. Creation is the one multipart call in the app:
//! the text fields travel next to the evidence files in a single POST.

use gloo_net::http::Request;
use web_sys::FormData;

use common::model::report::Report;
use common::requests::{AssignReportAreaRequest, CancelReportRequest, ReportStatusUpdateRequest};

use super::{bearer, expect_ok, network_error, url, ApiError};

pub async fn list(token: &str) -> Result<Vec<Report>, ApiError> {
    let response = bearer(Request::get(&url("/api/report")), token)
        .send()
        .await
        .map_err(network_error)?;
    let response = expect_ok(response).await?;
    response.json::<Vec<Report>>().await.map_err(network_error)
}

/// Closed-out reports for the signed-in colony.
pub async fn history(token: &str) -> Result<Vec<Report>, ApiError> {
    let response = bearer(Request::get(&url("/api/report/history")), token)
        .send()
        .await
        .map_err(network_error)?;
    let response = expect_ok(response).await?;
    response.json::<Vec<Report>>().await.map_err(network_error)
}

/// Multipart create. The caller assembles the `FormData` (text parts plus up
/// to three `image` parts); no Content-Type header is set here so the
/// browser writes its own multipart boundary.
pub async fn create(token: &str, form: FormData) -> Result<(), ApiError> {
    let response = bearer(Request::post(&url("/api/report")), token)
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}

/// Routes a report to a responding area (municipal dashboard).
pub async fn assign_area(token: &str, body: &AssignReportAreaRequest) -> Result<(), ApiError> {
    let response = bearer(Request::put(&url("/api/report")), token)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}

/// Marks a report resolved with a closing description (area dashboard).
pub async fn update_status(token: &str, body: &ReportStatusUpdateRequest) -> Result<(), ApiError> {
    let response = bearer(Request::put(&url("/api/report")), token)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}

/// Cancels a still-pending report (colony dashboard).
pub async fn cancel(token: &str, uuid: &str) -> Result<(), ApiError> {
    let body = CancelReportRequest {
        uuid: uuid.to_string(),
    };
    let response = bearer(Request::put(&url("/api/report/cancel")), token)
        .json(&body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}
