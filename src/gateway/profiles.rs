//! Owner Account Table Calls
//!
//! The `authUsers` table links auth uuids to owner rows; restaurants hang off
//! the owner row id, not the auth uuid.

use super::Gateway;
use crate::error::GatewayError;
use crate::models::{NewOwner, OwnerPatch, OwnerProfile};

const TABLE: &str = "authUsers";

impl Gateway {
    /// Look up the owner row for an auth uuid. Failure here is a session
    /// problem (the account exists but has no owner record), so it surfaces
    /// as an auth error and sends the user back to the landing page.
    pub async fn owner_by_auth_id(&self, auth_id: &str) -> Result<OwnerProfile, GatewayError> {
        let rows: Vec<OwnerProfile> = self
            .rows_get(TABLE, &[("authId".to_string(), format!("eq.{auth_id}"))])
            .await
            .map_err(|e| GatewayError::Auth(e.message().to_string()))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| GatewayError::Auth("no account record found for this user".to_string()))
    }

    /// Create the owner row right after signup.
    pub async fn insert_owner(&self, row: &NewOwner) -> Result<OwnerProfile, GatewayError> {
        let rows: Vec<OwnerProfile> = self.rows_insert(TABLE, &[row]).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| GatewayError::Write("insert returned no row".to_string()))
    }

    /// Update account details from the profile page.
    pub async fn update_owner(&self, id: u32, patch: &OwnerPatch) -> Result<(), GatewayError> {
        self.rows_update(TABLE, id, patch).await
    }
}
