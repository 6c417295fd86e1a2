//! HTTP layer: one module per backend collection, all stateless functions
//! over `gloo_net`. Shared concerns live here: URL building against the
//! configured base, the bearer header, non-2xx classification, and the
//! country-code handling the backend expects on phone numbers.

pub mod areas;
pub mod auth;
pub mod colonies;
mod error;
pub mod municipalities;
pub mod reports;

pub use error::{ApiError, SESSION_MESSAGE};

use gloo_net::http::{RequestBuilder, Response};
use serde::Deserialize;

use crate::config;

/// Phones are edited and validated as 10 bare digits; the wire format
/// carries the country code.
const COUNTRY_PREFIX: &str = "+52";

pub(crate) fn url(path: &str) -> String {
    format!("{}{}", config::api_base_url(), path)
}

pub(crate) fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {token}"))
}

pub(crate) fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Classifies a response: 401 is its own case, any other non-2xx becomes
/// `Rejected` with whatever message the body yields. 2xx passes through.
pub(crate) async fn expect_ok(response: Response) -> Result<Response, ApiError> {
    if response.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = rejection_message(status, &body);
        gloo_console::error!("Solicitud rechazada:", message.clone());
        return Err(ApiError::Rejected(message));
    }
    Ok(response)
}

/// Best-effort extraction of a server message from an error body; falls
/// back to the bare status when the body is not the usual `{message}` JSON.
pub(crate) fn rejection_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.message.is_empty() => parsed.message,
        _ => format!("HTTP {status}"),
    }
}

/// Adds the country code for transmission. Already-prefixed input is left
/// alone so re-submitting an untouched edit draft stays harmless.
pub fn phone_to_api(phone: &str) -> String {
    if phone.starts_with(COUNTRY_PREFIX) {
        phone.to_string()
    } else {
        format!("{COUNTRY_PREFIX}{phone}")
    }
}

/// Strips the country code when a row is projected into an edit draft; the
/// prefix is never shown in a form.
pub fn phone_from_api(phone: &str) -> String {
    phone
        .strip_prefix(COUNTRY_PREFIX)
        .unwrap_or(phone)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_round_trips_through_the_wire_format() {
        assert_eq!(phone_to_api("5512345678"), "+525512345678");
        assert_eq!(phone_from_api("+525512345678"), "5512345678");
    }

    #[test]
    fn phone_prefix_is_not_doubled() {
        assert_eq!(phone_to_api("+525512345678"), "+525512345678");
    }

    #[test]
    fn phone_without_prefix_is_left_as_is_when_stripping() {
        assert_eq!(phone_from_api("5512345678"), "5512345678");
    }

    #[test]
    fn rejection_message_prefers_the_server_message() {
        assert_eq!(
            rejection_message(400, r#"{"message":"correo duplicado"}"#),
            "correo duplicado"
        );
        assert_eq!(rejection_message(500, "not json"), "HTTP 500");
        assert_eq!(rejection_message(400, r#"{"message":""}"#), "HTTP 400");
    }
}
