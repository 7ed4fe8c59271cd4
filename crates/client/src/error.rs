use shared_types::AppError;
use std::fmt;

/// Client-side error taxonomy.
///
/// - `Transport` — the request never produced an HTTP response.
/// - `Api` — the server answered with a structured error; its message is
///   surfaced to the user verbatim.
/// - `SessionExpired` — authentication could not be recovered after the
///   single refresh-and-retry. Terminal for the session.
/// - `Decode` — the response body had an unexpected shape.
#[derive(Debug)]
pub enum ClientError {
    Transport(reqwest::Error),
    Api(AppError),
    SessionExpired,
    Decode(String),
}

impl ClientError {
    /// Message suitable for a toast or inline banner.
    pub fn friendly_message(&self) -> String {
        match self {
            ClientError::Transport(_) => "Could not reach the server. Check your connection.".to_string(),
            ClientError::Api(err) => err.message.clone(),
            ClientError::SessionExpired => "Your session has expired. Please sign in again.".to_string(),
            ClientError::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }

    /// HTTP status to key a full-page error view on.
    pub fn page_status(&self) -> u16 {
        match self {
            ClientError::Transport(_) => 503,
            ClientError::Api(err) => err.http_status(),
            ClientError::SessionExpired => 401,
            ClientError::Decode(_) => 500,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(err) => write!(f, "transport error: {}", err),
            ClientError::Api(err) => write!(f, "{}", err),
            ClientError::SessionExpired => write!(f, "session expired"),
            ClientError::Decode(detail) => write!(f, "decode error: {}", detail),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(err) => Some(err),
            ClientError::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err)
        }
    }
}

impl From<AppError> for ClientError {
    fn from(err: AppError) -> Self {
        ClientError::Api(err)
    }
}
