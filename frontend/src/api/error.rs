/// Distinct user-facing message for a rejected bearer token. Pages show it
/// instead of their contextual fallback whenever a call comes back 401.
pub const SESSION_MESSAGE: &str =
    "La sesión expiró o no es válida. Inicia sesión nuevamente.";

/// Failure of a backend call, already classified for the page boundary.
/// Pages turn these into transient banners; nothing propagates further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 401 on any authenticated call.
    Unauthorized,
    /// Any other non-2xx. Carries the server's message when one could be
    /// extracted, for the developer console; users get the page fallback.
    Rejected(String),
    /// The request never produced an HTTP response.
    Network(String),
}

impl ApiError {
    /// Message for the error banner: the session message for 401, the
    /// page's contextual fallback for everything else.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized => SESSION_MESSAGE.to_string(),
            ApiError::Rejected(_) | ApiError::Network(_) => fallback.to_string(),
        }
    }
}
