use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::env_variable_utils::API_BASE_URL;
use crate::session::CredentialStore;

/// What a request against the backend can fail with. Failures are surfaced
/// as a banner at the call site and are never retried automatically.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{detail}")]
    Api { status: u16, detail: String },
    #[error("Failed to parse server response: {0}")]
    Parse(String),
    #[error("Session expired, please log in again")]
    Unauthorized,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<ErrorDetail>,
}

// FastAPI-style `detail`: either a plain message or a list of field errors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Debug, Deserialize)]
struct FieldError {
    msg: String,
}

/// Extracts a user-facing message from a non-2xx response body.
pub fn parse_error_detail(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(ErrorDetail::Message(msg)),
        }) => msg,
        Ok(ErrorBody {
            detail: Some(ErrorDetail::Fields(fields)),
        }) if !fields.is_empty() => fields
            .into_iter()
            .map(|f| f.msg)
            .collect::<Vec<_>>()
            .join(", "),
        _ => format!("HTTP error: {}", status),
    }
}

/// Thin wrapper over `gloo_net` that attaches the bearer token from the
/// injected credential store and maps responses onto [`ApiError`].
///
/// No retry, timeout or cancellation layer: every call is fire-and-await
/// against the remote API, and overlapping requests are possible. See
/// DESIGN.md, "Known gaps kept on purpose".
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    credentials: Rc<dyn CredentialStore>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.credentials, &other.credentials)
    }
}

impl ApiClient {
    pub fn new(credentials: Rc<dyn CredentialStore>) -> Self {
        Self {
            base_url: API_BASE_URL.clone(),
            credentials,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.credentials.load()
    }

    pub fn store_token(&self, token: &str) {
        self.credentials.store(token);
    }

    pub fn logout(&self) {
        self.credentials.clear();
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.credentials.load() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.decode(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.decode(response).await
    }

    /// POST whose response body the caller does not care about.
    pub async fn post_json_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.expect_ok(response).await
    }

    /// POST with an `application/x-www-form-urlencoded` body (OAuth2 login).
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        body: String,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.decode(response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.decode(response).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::patch(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.expect_ok(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        self.check_status(&response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn expect_ok(&self, response: Response) -> Result<(), ApiError> {
        self.check_status(&response).await
    }

    async fn check_status(&self, response: &Response) -> Result<(), ApiError> {
        if response.status() == 401 {
            // Forced logout: the token is gone or stale, any further call
            // would fail the same way.
            self.credentials.clear();
            redirect_to_login();
            return Err(ApiError::Unauthorized);
        }
        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status,
            detail: parse_error_detail(status, &body),
        })
    }
}

fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_passed_through() {
        let body = r#"{"detail": "Sem permissão de acesso ao canal"}"#;
        assert_eq!(
            parse_error_detail(403, body),
            "Sem permissão de acesso ao canal"
        );
    }

    #[test]
    fn field_errors_are_joined_into_one_message() {
        let body = r#"{"detail": [{"msg": "channel_url is invalid"}, {"msg": "api_key too short"}]}"#;
        assert_eq!(
            parse_error_detail(422, body),
            "channel_url is invalid, api_key too short"
        );
    }

    #[test]
    fn empty_field_list_falls_back_to_status() {
        let body = r#"{"detail": []}"#;
        assert_eq!(parse_error_detail(422, body), "HTTP error: 422");
    }

    #[test]
    fn unparseable_body_falls_back_to_status() {
        assert_eq!(parse_error_detail(502, "<html>bad gateway</html>"), "HTTP error: 502");
        assert_eq!(parse_error_detail(500, ""), "HTTP error: 500");
    }

    #[test]
    fn missing_detail_falls_back_to_status() {
        assert_eq!(parse_error_detail(404, r#"{"message": "nope"}"#), "HTTP error: 404");
    }

    #[test]
    fn api_error_display_uses_detail_only() {
        let err = ApiError::Api {
            status: 404,
            detail: "Monitoring not found".to_string(),
        };
        assert_eq!(err.to_string(), "Monitoring not found");
    }
}
