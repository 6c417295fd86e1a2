//! `/api/colony` collection: listing, registration of a colony with its
//! president, contact updates, deactivation and president transfer.

use gloo_net::http::Request;

use common::model::colony::Colony;
use common::requests::{
    CreateColonyRequest, DeleteRequest, TransferRequest, UpdateContactRequest,
};

use super::{bearer, expect_ok, network_error, url, ApiError};

pub async fn list(token: &str) -> Result<Vec<Colony>, ApiError> {
    let response = bearer(Request::get(&url("/api/colony")), token)
        .send()
        .await
        .map_err(network_error)?;
    let response = expect_ok(response).await?;
    response.json::<Vec<Colony>>().await.map_err(network_error)
}

pub async fn create(token: &str, body: &CreateColonyRequest) -> Result<(), ApiError> {
    let response = bearer(Request::post(&url("/api/colony")), token)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}

pub async fn update_contact(token: &str, body: &UpdateContactRequest) -> Result<(), ApiError> {
    let response = bearer(Request::put(&url("/api/colony")), token)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}

/// Deactivates the colony; the row keeps existing with `status == false`.
pub async fn remove(token: &str, uuid: &str) -> Result<(), ApiError> {
    let body = DeleteRequest {
        uuid: uuid.to_string(),
    };
    let response = bearer(Request::delete(&url("/api/colony")), token)
        .json(&body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}

/// Replaces the president. Invalidates the replaced person's credentials on
/// the server, which is why callers sign the current session out afterwards.
pub async fn transfer(token: &str, body: &TransferRequest) -> Result<(), ApiError> {
    let response = bearer(Request::put(&url("/api/colony/transfer")), token)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    expect_ok(response).await.map(|_| ())
}
