//! Auth Service Calls
//!
//! Password sign-in, signup with profile metadata, sign-out, and session
//! restore against the backend's auth endpoints. A successful sign-in stores
//! the token in local storage; every later request picks it up from there.

use serde::{Deserialize, Serialize};

use super::{api_error, clear_session, load_session, store_session, Gateway, StoredSession};
use crate::error::GatewayError;

/// User object as the auth service returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthUser {
    /// Auth uuid, distinct from the `authUsers` row id.
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Free-form metadata attached at signup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    user: AuthUser,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    name: &'a str,
    phone: &'a str,
}

impl Gateway {
    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, GatewayError> {
        let resp = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.config.anon_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await
            .map_err(|e| GatewayError::Auth(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(api_error(resp, GatewayError::Auth).await);
        }
        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| GatewayError::Auth(e.to_string()))?;
        store_session(&StoredSession {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            user_id: token.user.id.clone(),
        });
        Ok(token.user)
    }

    /// Create an auth account carrying name/phone metadata. Depending on the
    /// project's confirmation setting the response is either a session or a
    /// bare user object; a returned session is stored right away.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        phone: &str,
    ) -> Result<AuthUser, GatewayError> {
        let resp = self
            .http
            .post(self.auth_url("signup"))
            .header("apikey", &self.config.anon_key)
            .json(&SignUpBody {
                email,
                password,
                data: SignUpMetadata { name, phone },
            })
            .send()
            .await
            .map_err(|e| GatewayError::Auth(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(api_error(resp, GatewayError::Auth).await);
        }

        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| GatewayError::Auth(e.to_string()))?;
        let user_value = value.get("user").cloned().unwrap_or_else(|| value.clone());
        let user: AuthUser = serde_json::from_value(user_value)
            .map_err(|e| GatewayError::Auth(format!("unexpected signup response: {e}")))?;

        if let Some(access_token) = value.get("access_token").and_then(|t| t.as_str()) {
            store_session(&StoredSession {
                access_token: access_token.to_string(),
                refresh_token: value
                    .get("refresh_token")
                    .and_then(|t| t.as_str())
                    .map(str::to_string),
                user_id: user.id.clone(),
            });
        }
        Ok(user)
    }

    /// Resolve the stored session to a live user. `Ok(None)` means nobody is
    /// signed in; a rejected token clears the stale session instead of
    /// erroring.
    pub async fn current_user(&self) -> Result<Option<AuthUser>, GatewayError> {
        let Some(session) = load_session() else {
            return Ok(None);
        };
        let resp = self
            .http
            .get(self.auth_url("user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await
            .map_err(|e| GatewayError::Auth(e.to_string()))?;
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED
            || resp.status() == reqwest::StatusCode::FORBIDDEN
        {
            clear_session();
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(api_error(resp, GatewayError::Auth).await);
        }
        let user = resp
            .json()
            .await
            .map_err(|e| GatewayError::Auth(e.to_string()))?;
        Ok(Some(user))
    }

    pub async fn sign_out(&self) -> Result<(), GatewayError> {
        let Some(session) = load_session() else {
            return Ok(());
        };
        let resp = self
            .http
            .post(self.auth_url("logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await
            .map_err(|e| GatewayError::Auth(e.to_string()))?;
        // An already-expired token still counts as signed out.
        if !resp.status().is_success() && resp.status() != reqwest::StatusCode::UNAUTHORIZED {
            return Err(api_error(resp, GatewayError::Auth).await);
        }
        clear_session();
        Ok(())
    }
}
