//! Session State
//!
//! Tracks who is signed in. A `CurrentUser` joins the auth-service identity
//! with the owner row that restaurants reference; display fields prefer the
//! auth metadata and fall back to the owner row, matching what signup wrote.

use leptos::prelude::*;

use crate::error::GatewayError;
use crate::gateway::{AuthUser, Gateway};
use crate::models::OwnerProfile;

/// Signed-in restaurant owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Auth-service uuid
    pub auth_id: String,
    /// `authUsers` row id; restaurants point at this
    pub owner_id: u32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct Session {
    /// Current user, `None` while signed out - read
    pub user: ReadSignal<Option<CurrentUser>>,
    set_user: WriteSignal<Option<CurrentUser>>,
    /// Initial auth check still in flight - read
    pub checking: ReadSignal<bool>,
    set_checking: WriteSignal<bool>,
}

impl Session {
    pub fn new(
        user: (ReadSignal<Option<CurrentUser>>, WriteSignal<Option<CurrentUser>>),
        checking: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            checking: checking.0,
            set_checking: checking.1,
        }
    }

    pub fn set_user(&self, user: Option<CurrentUser>) {
        self.set_user.set(user);
    }

    pub fn clear(&self) {
        self.set_user.set(None);
    }

    pub fn finish_check(&self) {
        self.set_checking.set(false);
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }
}

/// Get the session from context.
pub fn use_session() -> Session {
    expect_context::<Session>()
}

/// Join the auth identity with its owner row; auth metadata wins, the owner
/// row fills in whatever signup metadata lacks.
pub fn merge_user(auth_user: AuthUser, owner: OwnerProfile) -> CurrentUser {
    CurrentUser {
        auth_id: auth_user.id,
        owner_id: owner.id,
        name: auth_user.user_metadata.name.unwrap_or(owner.name),
        email: auth_user.email.unwrap_or(owner.email),
        phone: auth_user.user_metadata.phone.or(owner.phone),
    }
}

/// Resolve the stored token to a `CurrentUser`, or `None` when signed out.
pub async fn restore(gateway: &Gateway) -> Result<Option<CurrentUser>, GatewayError> {
    let Some(auth_user) = gateway.current_user().await? else {
        return Ok(None);
    };
    let owner = gateway.owner_by_auth_id(&auth_user.id).await?;
    Ok(Some(merge_user(auth_user, owner)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::AuthUser;

    fn owner_row() -> OwnerProfile {
        OwnerProfile {
            id: 12,
            auth_id: "uuid-1".to_string(),
            name: "Row Name".to_string(),
            email: "row@example.com".to_string(),
            phone: Some("555-0100".to_string()),
        }
    }

    #[test]
    fn test_merge_prefers_auth_metadata() {
        let auth_user: AuthUser = serde_json::from_value(serde_json::json!({
            "id": "uuid-1",
            "email": "meta@example.com",
            "user_metadata": { "name": "Meta Name", "phone": "555-0199" }
        }))
        .unwrap();

        let user = merge_user(auth_user, owner_row());
        assert_eq!(user.owner_id, 12);
        assert_eq!(user.name, "Meta Name");
        assert_eq!(user.email, "meta@example.com");
        assert_eq!(user.phone.as_deref(), Some("555-0199"));
    }

    #[test]
    fn test_merge_falls_back_to_owner_row() {
        let auth_user: AuthUser =
            serde_json::from_value(serde_json::json!({ "id": "uuid-1" })).unwrap();

        let user = merge_user(auth_user, owner_row());
        assert_eq!(user.name, "Row Name");
        assert_eq!(user.email, "row@example.com");
        assert_eq!(user.phone.as_deref(), Some("555-0100"));
    }
}
