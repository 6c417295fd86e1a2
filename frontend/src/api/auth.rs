use gloo_net::http::Request;

use common::requests::{SignInRequest, SignInResponse};

use super::{expect_ok, network_error, url, ApiError};

/// `POST /api/auth/signin`. Any non-2xx (the backend answers 401 for bad
/// credentials) surfaces as an error the login page folds into its single
/// invalid-credentials banner.
pub async fn sign_in(email: &str, password: &str) -> Result<SignInResponse, ApiError> {
    let body = SignInRequest {
        username: email.to_string(),
        password: password.to_string(),
    };
    let response = Request::post(&url("/api/auth/signin"))
        .json(&body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    let response = expect_ok(response).await?;
    response
        .json::<SignInResponse>()
        .await
        .map_err(network_error)
}
