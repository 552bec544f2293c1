use serde::{Deserialize, Serialize};

/// Login request body for `POST {login_base_url}/user/loginWithPhone`.
///
/// Device-token fields are part of the wire contract but unused by this
/// core; they are always serialized as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub device_token: String,
    pub ios_device_token: String,
}

impl LoginRequest {
    /// Builds a login body with the device-token stubs filled in.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            device_token: String::new(),
            ios_device_token: String::new(),
        }
    }
}

/// Signup request body for `POST {signup_base_url}/user/signup`.
///
/// Phone fields are collected by a different screen; this core always sends
/// an empty mobile number with the fixed default country code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub mobile_number: String,
    pub country_code: String,
    pub password: String,
    pub confirm_password: String,
    pub device_token: String,
    pub ios_device_token: String,
}

impl SignUpRequest {
    /// Builds a signup body with the phone and device-token stubs filled in.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            mobile_number: String::new(),
            country_code: "+91".to_string(),
            password: password.into(),
            confirm_password: confirm_password.into(),
            device_token: String::new(),
            ios_device_token: String::new(),
        }
    }
}

/// Login response payload (decoded after the envelope check passes).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub status: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: UserData,
}

/// Authenticated user record returned on login success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserData {
    pub id: String,
    pub email: String,
}

/// Signup response payload. Every field is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SignUpData>,
}

/// Container for the created user in a signup response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SignUpUser>,
}

/// Created user record returned on signup success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignUpUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
