use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared_types::{AppError, AppErrorKind, RefreshRequest, TokenPair};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::SessionStore;

/// Authenticated HTTP transport.
///
/// Attaches `Authorization: Bearer <access>` to every request. On a 401
/// whose body carries the token-expiry code, performs exactly one refresh
/// exchange and retries the original request once — never more. A rejection
/// of the retried request, or of the refresh exchange itself, is terminal:
/// the session is logged out and `ClientError::SessionExpired` returned.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.api_base.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.send_raw(Method::GET, path, None).await?;
        decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let body = to_value(body)?;
        let response = self.send_raw(Method::POST, path, Some(&body)).await?;
        decode(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let body = to_value(body)?;
        let response = self.send_raw(Method::PUT, path, Some(&body)).await?;
        decode(response).await
    }

    /// POST where the caller only cares about success.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let body = to_value(body)?;
        self.send_raw(Method::POST, path, Some(&body)).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send_raw(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Full request cycle, returning the successful response.
    ///
    /// The request is rebuilt from `(method, path, body)` for the retry so
    /// no body streaming state is shared between attempts.
    async fn send_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, ClientError> {
        let response = self.issue(method.clone(), path, body).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return ok_or_api_error(response).await;
        }

        let err = read_error(response).await;
        if !err.is_token_expired() || !self.session.is_logged_in() {
            return Err(ClientError::Api(err));
        }

        // Exactly one refresh-and-retry per original request.
        self.refresh_session().await?;
        let retry = self.issue(method, path, body).await?;
        if retry.status() == StatusCode::UNAUTHORIZED {
            // The refreshed token was rejected too. Do not loop.
            tracing::warn!(path, "request rejected after token refresh, ending session");
            self.session.logout();
            return Err(ClientError::SessionExpired);
        }
        ok_or_api_error(retry).await
    }

    async fn issue(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, ClientError> {
        let mut request = self.http.request(method, format!("{}{}", self.base, path));
        if let Some(token) = self.session.access_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.map_err(ClientError::from)
    }

    /// Exchange the refresh token for a new pair. Failure is terminal for
    /// the session and is not retried.
    async fn refresh_session(&self) -> Result<(), ClientError> {
        let Some(refresh_token) = self.session.refresh_token() else {
            self.session.logout();
            return Err(ClientError::SessionExpired);
        };

        tracing::debug!("access token expired, exchanging refresh token");
        let result = self
            .http
            .post(format!("{}/api/auth/refresh", self.base))
            .json(&RefreshRequest { refresh_token })
            .send()
            .await;

        let response = match result {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::warn!(status = %response.status(), "refresh exchange rejected, ending session");
                self.session.logout();
                return Err(ClientError::SessionExpired);
            }
            Err(err) => {
                tracing::warn!(error = %err, "refresh exchange unreachable, ending session");
                self.session.logout();
                return Err(ClientError::SessionExpired);
            }
        };

        match response.json::<TokenPair>().await {
            Ok(tokens) => {
                self.session.apply_refresh(tokens);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "refresh response malformed, ending session");
                self.session.logout();
                Err(ClientError::SessionExpired)
            }
        }
    }
}

fn to_value<B: Serialize>(body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body).map_err(|e| ClientError::Decode(e.to_string()))
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let text = response.text().await.map_err(ClientError::from)?;
    serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
}

async fn ok_or_api_error(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ClientError::Api(read_error(response).await))
    }
}

async fn read_error(response: reqwest::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::from_body(&body).unwrap_or_else(|| fallback_error(status, &body))
}

/// Shape an AppError for a non-2xx response whose body was not structured.
fn fallback_error(status: StatusCode, body: &str) -> AppError {
    let message = if body.trim().is_empty() {
        format!("Request failed with status {}", status.as_u16())
    } else {
        AppError::friendly_message(body)
    };
    let kind = match status {
        StatusCode::NOT_FOUND => AppErrorKind::NotFound,
        StatusCode::BAD_REQUEST => AppErrorKind::BadRequest,
        StatusCode::UNPROCESSABLE_ENTITY => AppErrorKind::ValidationError,
        StatusCode::CONFLICT => AppErrorKind::Conflict,
        StatusCode::UNAUTHORIZED => AppErrorKind::Unauthorized,
        StatusCode::FORBIDDEN => AppErrorKind::Forbidden,
        StatusCode::TOO_MANY_REQUESTS => AppErrorKind::RateLimited,
        _ => AppErrorKind::InternalError,
    };
    let mut err = AppError::internal(message);
    err.kind = kind;
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_error_maps_common_statuses() {
        assert_eq!(
            fallback_error(StatusCode::NOT_FOUND, "").kind,
            AppErrorKind::NotFound
        );
        assert_eq!(
            fallback_error(StatusCode::FORBIDDEN, "").kind,
            AppErrorKind::Forbidden
        );
        assert_eq!(
            fallback_error(StatusCode::BAD_GATEWAY, "").kind,
            AppErrorKind::InternalError
        );
    }

    #[test]
    fn fallback_error_keeps_structured_message_when_present() {
        let err = fallback_error(
            StatusCode::IM_A_TEAPOT,
            r#"{"kind":"BadRequest","message":"short and stout"}"#,
        );
        assert_eq!(err.message, "short and stout");
    }
}
