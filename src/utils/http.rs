// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{AppError, Result};
use crate::models::NOT_AUTHORIZED;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &ApiConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
    if config.timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(config.timeout_secs));
    }
    Ok(builder.build()?)
}

/// Error body shape shared by every endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Decode a 2xx body as JSON, or turn the failure into an [`AppError`].
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await?;
    if status.is_success() {
        return Ok(serde_json::from_slice(&bytes)?);
    }
    Err(status_error(status, &bytes))
}

/// Map a non-2xx status and its raw body to the error taxonomy.
pub fn status_error(status: StatusCode, body: &[u8]) -> AppError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());

    match (status, message) {
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, message) => {
            AppError::authorization(message.unwrap_or_else(|| NOT_AUTHORIZED.to_string()))
        }
        (_, Some(message)) => AppError::server(status.as_u16(), message),
        (_, None) => AppError::Status {
            status: status.as_u16(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn conflict_with_message_is_server_reported() {
        let err = status_error(
            StatusCode::CONFLICT,
            br#"{"message":"Student with USN 1AB21CS045 already exists"}"#,
        );
        assert_eq!(err.kind(), ErrorKind::ServerReported);
        assert_eq!(
            err.user_message("generic"),
            "Student with USN 1AB21CS045 already exists"
        );
    }

    #[test]
    fn html_error_page_is_network_failure() {
        let err = status_error(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert!(matches!(err, AppError::Status { status: 502 }));
    }

    #[test]
    fn unauthorized_maps_to_authorization() {
        let err = status_error(StatusCode::UNAUTHORIZED, br#"{"message":"Token expired"}"#);
        assert_eq!(err.kind(), ErrorKind::Authorization);
        assert_eq!(err.user_message("x"), "Token expired");

        let err = status_error(StatusCode::FORBIDDEN, b"");
        assert_eq!(err.user_message("x"), NOT_AUTHORIZED);
    }

    #[test]
    fn client_builds_with_and_without_timeout() {
        let mut config = ApiConfig::default();
        assert!(create_async_client(&config).is_ok());
        config.timeout_secs = 0;
        assert!(create_async_client(&config).is_ok());
    }
}
