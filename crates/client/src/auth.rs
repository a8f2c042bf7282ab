//! Sign-in and sign-up calls
//!
//! The backend issues no token; a successful status is the whole answer.

use procurex_core::{ConsoleError, ConsoleResult, Validatable};
use reqwest::Method;
use serde::Serialize;

use crate::http::ApiClient;

pub const SIGN_IN_PATH: &str = "/api/signin";
pub const SIGN_UP_PATH: &str = "/api/signup";

const SIGN_IN_FALLBACK: &str = "Invalid credentials. Please try again.";
const SIGN_UP_FALLBACK: &str = "Sign up failed. Please try again.";

/// Body of `POST /api/signin`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Validatable for Credentials {
    fn validate(&self) -> ConsoleResult<()> {
        if self.email.trim().is_empty() {
            return Err(ConsoleError::field_validation("credentials", "email", "Email is required"));
        }
        if self.password.is_empty() {
            return Err(ConsoleError::field_validation(
                "credentials",
                "password",
                "Password is required",
            ));
        }
        Ok(())
    }
}

/// Body of `POST /api/signup`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

impl Validatable for SignUpRequest {
    fn validate(&self) -> ConsoleResult<()> {
        Credentials::new(self.email.clone(), self.password.clone()).validate()?;
        if self.password != self.confirm_password {
            return Err(ConsoleError::field_validation(
                "credentials",
                "confirm_password",
                "Passwords do not match",
            ));
        }
        Ok(())
    }
}

/// Authentication endpoints
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Succeeds on any 2xx; otherwise the server's `error` text is surfaced
    pub async fn sign_in(&self, credentials: &Credentials) -> ConsoleResult<()> {
        credentials.validate()?;
        let body = serde_json::to_value(credentials)?;
        self.api
            .execute(Method::POST, SIGN_IN_PATH, Some(&body))
            .await?
            .check_status(Some(SIGN_IN_FALLBACK))?;
        tracing::info!("Signed in as {}", credentials.email);
        Ok(())
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> ConsoleResult<()> {
        request.validate()?;
        let body = serde_json::to_value(request)?;
        self.api
            .execute(Method::POST, SIGN_UP_PATH, Some(&body))
            .await?
            .check_status(Some(SIGN_UP_FALLBACK))?;
        tracing::info!("Registered {}", request.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_sign_in_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", SIGN_IN_PATH)
            .match_body(Matcher::Json(json!({"email": "ops@procurex.io", "password": "hunter2"})))
            .with_status(200)
            .with_body(r#"{"message":"Login successful"}"#)
            .create_async()
            .await;

        let auth = AuthClient::new(ApiClient::new(&server.url()).unwrap());
        auth.sign_in(&Credentials::new("ops@procurex.io", "hunter2"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_sign_in_accepts_plain_text_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", SIGN_IN_PATH)
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body("Login successful")
            .create_async()
            .await;

        let auth = AuthClient::new(ApiClient::new(&server.url()).unwrap());
        let result = auth
            .sign_in(&Credentials::new("ops@procurex.io", "hunter2"))
            .await;
        mock.assert_async().await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_sign_up_accepts_plain_text_success() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", SIGN_UP_PATH)
            .with_status(201)
            .with_body("User registered")
            .create_async()
            .await;

        let auth = AuthClient::new(ApiClient::new(&server.url()).unwrap());
        let request = SignUpRequest {
            email: "new@procurex.io".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
        };
        assert_eq!(auth.sign_up(&request).await, Ok(()));
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password_surfaces_server_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", SIGN_IN_PATH)
            .with_status(401)
            .with_body(r#"{"error":"Incorrect password"}"#)
            .create_async()
            .await;

        let auth = AuthClient::new(ApiClient::new(&server.url()).unwrap());
        let err = auth
            .sign_in(&Credentials::new("ops@procurex.io", "nope"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Incorrect password");
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_sign_in_fallback_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", SIGN_IN_PATH)
            .with_status(500)
            .create_async()
            .await;

        let auth = AuthClient::new(ApiClient::new(&server.url()).unwrap());
        let err = auth
            .sign_in(&Credentials::new("ops@procurex.io", "pw"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), SIGN_IN_FALLBACK);
    }

    #[tokio::test]
    async fn test_sign_up_sends_confirm_password() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", SIGN_UP_PATH)
            .match_body(Matcher::Json(json!({
                "email": "new@procurex.io",
                "password": "pw",
                "confirmPassword": "pw"
            })))
            .with_status(201)
            .create_async()
            .await;

        let auth = AuthClient::new(ApiClient::new(&server.url()).unwrap());
        let request = SignUpRequest {
            email: "new@procurex.io".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
        };
        auth.sign_up(&request).await.unwrap();
        mock.assert_async().await;
    }

    #[test]
    fn test_sign_up_validation() {
        let request = SignUpRequest {
            email: "new@procurex.io".into(),
            password: "pw".into(),
            confirm_password: "other".into(),
        };
        assert_eq!(request.validation_errors(), vec!["Passwords do not match"]);
        assert!(!Credentials::default().is_valid());
    }
}
