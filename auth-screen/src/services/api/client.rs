//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! The backend signals success and failure inside the JSON body (a `status`
//! field of 200/201 means success) rather than through the HTTP status code,
//! so every response goes through a two-phase parse: first the envelope is
//! inspected generically, then the payload is decoded into the caller's
//! type. The HTTP status code is never consulted.

use reqwest::{header, Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::core::error::{Outcome, RequestError};
use crate::core::service::AuthApi;

/// Envelope `status` values the backend uses for success.
const SUCCESS_STATUSES: [i64; 2] = [200, 201];

/// Fallback alert text when a rejection envelope carries no message.
const FALLBACK_REJECTION_MESSAGE: &str = "An unexpected error occurred";

/// HTTP client for communicating with the backend API.
///
/// Explicitly constructed and injected rather than accessed through a
/// singleton; it holds no mutable state, so one instance can be shared
/// across controllers behind an `Arc`. The underlying `reqwest::Client`
/// maintains a connection pool.
pub struct ApiClient {
    pub(crate) client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new API client for the given endpoint configuration.
    ///
    /// Uses the transport's default timeout behavior; there is no
    /// client-side retry or cancellation.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Get the endpoint configuration for URL construction.
    pub(crate) fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POST a JSON body and decode the enveloped response payload.
    pub async fn post<T, B>(&self, url: &str, body: &B) -> Outcome<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| RequestError::BodyEncoding(e.to_string()))?;
        self.send(Method::POST, url, Some(bytes)).await
    }

    /// GET and decode the enveloped response payload.
    pub async fn get<T>(&self, url: &str) -> Outcome<T>
    where
        T: DeserializeOwned,
    {
        self.send(Method::GET, url, None).await
    }

    /// Perform a request and resolve the envelope.
    ///
    /// Resolution order:
    /// 1. URL must parse, otherwise `InvalidUrl` with no network call.
    /// 2. Transport failures and empty bodies are `Transport`.
    /// 3. A body that is not JSON is `Decoding` (raw text attached).
    /// 4. A JSON body without a whole-number `status` is
    ///    `Rejected("Invalid response format")`.
    /// 5. `status` 200/201 decodes the payload into `T`; a shape mismatch
    ///    is `Decoding` (raw text attached).
    /// 6. Any other `status` is `Rejected` with the envelope's `message`
    ///    or the fixed fallback.
    async fn send<T>(&self, method: Method, url: &str, body: Option<Vec<u8>>) -> Outcome<T>
    where
        T: DeserializeOwned,
    {
        let url = Url::parse(url).map_err(|_| RequestError::InvalidUrl)?;

        let mut request = self
            .client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "Request transport error");
            RequestError::Transport(e.to_string())
        })?;

        let text = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        if text.is_empty() {
            return Err(RequestError::Transport("No data received".to_string()));
        }

        tracing::debug!(body = %text, "Response received");

        let mut envelope: Value = serde_json::from_str(&text).map_err(|e| RequestError::Decoding {
            reason: e.to_string(),
            body: text.clone(),
        })?;

        match envelope_status(&envelope) {
            Some(status) if SUCCESS_STATUSES.contains(&status) => {
                // The payload types carry integer status fields; rewrite a
                // float spelling with its whole number before decoding.
                envelope["status"] = Value::from(status);
                serde_json::from_value::<T>(envelope).map_err(|e| RequestError::Decoding {
                    reason: e.to_string(),
                    body: text,
                })
            }
            Some(status) => {
                let message = envelope
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or(FALLBACK_REJECTION_MESSAGE);
                tracing::warn!(status = status, message = %message, "Request rejected by server");
                Err(RequestError::Rejected(message.to_string()))
            }
            None => Err(RequestError::Rejected("Invalid response format".to_string())),
        }
    }
}

/// Extract the envelope's `status` as a whole number.
///
/// Integer-valued floats qualify (`200.0` is 200); anything else, including
/// a missing field, a string status, or a non-object body, is `None`.
fn envelope_status(envelope: &Value) -> Option<i64> {
    match envelope.get("status") {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        _ => None,
    }
}

// Implement AuthApi trait for ApiClient
#[async_trait::async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, request: shared::LoginRequest) -> Outcome<shared::LoginResponse> {
        crate::services::api::auth::login(self, request).await
    }

    async fn sign_up(&self, request: shared::SignUpRequest) -> Outcome<shared::SignUpResponse> {
        crate::services::api::auth::sign_up(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::{LoginRequest, LoginResponse};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server: &MockServer) -> ApiConfig {
        ApiConfig {
            login_base_url: server.uri(),
            signup_base_url: server.uri(),
        }
    }

    fn login_body() -> LoginRequest {
        LoginRequest::new("a@b.co", "Abc12345!")
    }

    // ========== Envelope Success Tests ==========

    #[tokio::test]
    async fn test_status_200_decodes_payload() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "message": "Login successful",
                "data": { "id": "1", "email": "a@b.co" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let response: LoginResponse = client
            .post(&client.config().login_url(), &login_body())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.message.as_deref(), Some("Login successful"));
        assert_eq!(response.data.id, "1");
    }

    #[tokio::test]
    async fn test_status_201_counts_as_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 201,
                "data": { "id": "2", "email": "b@c.co" }
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let response: LoginResponse = client
            .post(&client.config().login_url(), &login_body())
            .await
            .unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.message, None);
    }

    #[tokio::test]
    async fn test_integer_valued_float_status_counts_as_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200.0,
                "message": "ok",
                "data": { "id": "1", "email": "a@b.co" }
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let response: LoginResponse = client
            .post(&client.config().login_url(), &login_body())
            .await
            .unwrap();

        // The whole payload decodes, not just the envelope check.
        assert_eq!(response.status, 200);
        assert_eq!(response.message.as_deref(), Some("ok"));
        assert_eq!(response.data.id, "1");
        assert_eq!(response.data.email, "a@b.co");
    }

    #[tokio::test]
    async fn test_get_resolves_envelope_like_post() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": { "id": "1", "email": "a@b.co" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let response: LoginResponse = client.get(&client.config().login_url()).await.unwrap();

        assert_eq!(response.data.id, "1");
    }

    #[tokio::test]
    async fn test_http_status_is_ignored_when_envelope_succeeds() {
        // The backend's HTTP layer is not trusted; only the envelope counts.
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "status": 200,
                "data": { "id": "1", "email": "a@b.co" }
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let result: Outcome<LoginResponse> = client
            .post(&client.config().login_url(), &login_body())
            .await;

        assert!(result.is_ok());
    }

    // ========== Envelope Rejection Tests ==========

    #[tokio::test]
    async fn test_rejection_uses_server_message() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 409,
                "message": "Email taken"
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let result: Outcome<LoginResponse> = client
            .post(&client.config().login_url(), &login_body())
            .await;

        assert_eq!(result, Err(RequestError::Rejected("Email taken".to_string())));
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 500 })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let result: Outcome<LoginResponse> = client
            .post(&client.config().login_url(), &login_body())
            .await;

        assert_eq!(
            result,
            Err(RequestError::Rejected("An unexpected error occurred".to_string()))
        );
    }

    #[tokio::test]
    async fn test_missing_status_is_invalid_format() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let result: Outcome<LoginResponse> = client
            .post(&client.config().login_url(), &login_body())
            .await;

        assert_eq!(
            result,
            Err(RequestError::Rejected("Invalid response format".to_string()))
        );
    }

    #[tokio::test]
    async fn test_non_object_body_is_invalid_format() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let result: Outcome<LoginResponse> = client
            .post(&client.config().login_url(), &login_body())
            .await;

        assert_eq!(
            result,
            Err(RequestError::Rejected("Invalid response format".to_string()))
        );
    }

    #[tokio::test]
    async fn test_fractional_status_is_invalid_format() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 200.5 })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let result: Outcome<LoginResponse> = client
            .post(&client.config().login_url(), &login_body())
            .await;

        assert_eq!(
            result,
            Err(RequestError::Rejected("Invalid response format".to_string()))
        );
    }

    // ========== Decoding and Transport Tests ==========

    #[tokio::test]
    async fn test_payload_shape_mismatch_is_decoding_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": { "unexpected": true }
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let result: Outcome<LoginResponse> = client
            .post(&client.config().login_url(), &login_body())
            .await;

        match result {
            Err(RequestError::Decoding { body, .. }) => {
                assert!(body.contains("unexpected"), "raw body kept for debugging");
            }
            other => panic!("expected Decoding error in test, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_decoding_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let result: Outcome<LoginResponse> = client
            .post(&client.config().login_url(), &login_body())
            .await;

        match result {
            Err(RequestError::Decoding { body, .. }) => {
                assert_eq!(body, "<html>oops</html>");
            }
            other => panic!("expected Decoding error in test, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_transport_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/loginWithPhone"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let result: Outcome<LoginResponse> = client
            .post(&client.config().login_url(), &login_body())
            .await;

        assert_eq!(
            result,
            Err(RequestError::Transport("No data received".to_string()))
        );
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_sending() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(test_config(&mock_server));
        let result: Outcome<LoginResponse> = client.post("not a url", &login_body()).await;

        assert_eq!(result, Err(RequestError::InvalidUrl));
        // expect(0) verifies on drop that no request reached the server
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = ApiClient::new(ApiConfig {
            login_base_url: "http://127.0.0.1:1".to_string(),
            signup_base_url: "http://127.0.0.1:1".to_string(),
        });
        let result: Outcome<LoginResponse> = client
            .post(&client.config().login_url(), &login_body())
            .await;

        assert!(matches!(result, Err(RequestError::Transport(_))));
    }
}
