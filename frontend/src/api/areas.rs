//! `/api/area` collection, managed from the municipal dashboard. Also read
//! by the municipal reports page to populate the assignment select.

use gloo_net::http::Request;

use common::model::area::Area;
use common::requests::{CreateAreaRequest, DeleteRequest, TransferRequest, UpdateContactRequest};

use super::{bearer, expect_ok, network_error, url, ApiError};

pub async fn list(token: &str) -> Result<Vec<Area>, ApiError> {
    let response = bearer(Request::get(&url("/api/area")), token)
        .send()
        .await
        .map_err(network_error)?;
    let response = expect_ok(response).await?;
    response.json::<Vec<Area>>().await.map_err(network_error)
}

pub async fn create(token: &str, body: &CreateAreaRequest) -> Result<(), ApiError> {
    let response = bearer(Request::post(&url("/api/area")), token)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}

pub async fn update_contact(token: &str, body: &UpdateContactRequest) -> Result<(), ApiError> {
    let response = bearer(Request::put(&url("/api/area")), token)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}

pub async fn remove(token: &str, uuid: &str) -> Result<(), ApiError> {
    let body = DeleteRequest {
        uuid: uuid.to_string(),
    };
    let response = bearer(Request::delete(&url("/api/area")), token)
        .json(&body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}

pub async fn transfer(token: &str, body: &TransferRequest) -> Result<(), ApiError> {
    let response = bearer(Request::put(&url("/api/area/transfer")), token)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}
